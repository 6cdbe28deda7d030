use crate::state::{UiCommand, UiState};
use arc_core::GraphAction;
use crossbeam::channel::Sender;
use egui::{Key, KeyboardShortcut, Modifiers};

/// A menu/tool-bar action: label, shortcut and the status tip shown on hover.
pub struct Action {
    pub label: &'static str,
    pub shortcut: Option<KeyboardShortcut>,
    pub tip: &'static str,
}

pub const SAVE_GRAPH: Action = Action {
    label: "Save Graph...",
    shortcut: Some(KeyboardShortcut::new(Modifiers::COMMAND, Key::S)),
    tip: "Save graph's settings.",
};

pub const OPEN_GRAPH: Action = Action {
    label: "Open Graph...",
    shortcut: Some(KeyboardShortcut::new(Modifiers::COMMAND, Key::O)),
    tip: "Open a saved graph.",
};

pub const RESET_GRAPH: Action = Action {
    label: "Reset Graph...",
    shortcut: Some(KeyboardShortcut::new(Modifiers::COMMAND, Key::N)),
    tip: "Reset the graph to its default values.",
};

pub const EXIT: Action = Action {
    label: "Exit",
    shortcut: Some(KeyboardShortcut::new(Modifiers::COMMAND, Key::Q)),
    tip: "Exit application.",
};

pub const SINE_TOGGLE: Action = Action {
    label: "Sine",
    shortcut: None,
    tip: "Toggle visibility of sine wave.",
};

pub const COSINE_TOGGLE: Action = Action {
    label: "Cosine",
    shortcut: None,
    tip: "Toggle visibility of cosine wave.",
};

/// Keyboard shortcuts and the commands they send.
const SHORTCUT_COMMANDS: [(&Action, UiCommand); 4] = [
    (&SAVE_GRAPH, UiCommand::Graph(GraphAction::Save)),
    (&OPEN_GRAPH, UiCommand::Graph(GraphAction::Open)),
    (&RESET_GRAPH, UiCommand::Graph(GraphAction::Reset)),
    (&EXIT, UiCommand::Quit),
];

/// Draw a button for `action`, recording its status tip when hovered.
pub fn action_button(ui: &mut egui::Ui, action: &Action, state: &mut UiState) -> bool {
    let mut button = egui::Button::new(action.label);
    if let Some(shortcut) = &action.shortcut {
        button = button.shortcut_text(ui.ctx().format_shortcut(shortcut));
    }
    let response = ui.add(button);
    if response.hovered() {
        state.hovered_tip = Some(action.tip);
    }
    response.clicked()
}

/// Consume any pressed shortcut and send its command.
pub fn handle_shortcuts(ctx: &egui::Context, tx: &Sender<UiCommand>) {
    for (action, cmd) in SHORTCUT_COMMANDS {
        let Some(shortcut) = &action.shortcut else {
            continue;
        };
        if ctx.input_mut(|i| i.consume_shortcut(shortcut)) {
            log::debug!("Shortcut {}", action.label);
            let _ = tx.try_send(cmd);
        }
    }
}

/// Draw the menu bar inside a `TopBottomPanel`.
pub fn draw_menu_bar(ui: &mut egui::Ui, state: &mut UiState, tx: &Sender<UiCommand>) {
    egui::menu::bar(ui, |ui| {
        ui.menu_button("File", |ui| {
            for (action, graph) in [
                (&SAVE_GRAPH, GraphAction::Save),
                (&OPEN_GRAPH, GraphAction::Open),
                (&RESET_GRAPH, GraphAction::Reset),
            ] {
                if action_button(ui, action, state) {
                    let _ = tx.try_send(UiCommand::Graph(graph));
                    ui.close_menu();
                }
            }
            ui.separator();
            if action_button(ui, &EXIT, state) {
                let _ = tx.try_send(UiCommand::Quit);
                ui.close_menu();
            }
        });

        ui.menu_button("View", |ui| {
            ui.checkbox(&mut state.show_files_bar, "Files Bar");
            ui.checkbox(&mut state.show_wave_bar, "Wave Bar");
            ui.separator();
            ui.checkbox(&mut state.show_controls, "Controls");
            ui.checkbox(&mut state.show_console, "Console");
        });

        ui.menu_button("Help", |ui| {
            if ui.button("Keyboard Shortcuts").clicked() {
                state.show_shortcuts = true;
                ui.close_menu();
            }
            if ui.button("About ARC Oscilloscope").clicked() {
                state.show_about = true;
                ui.close_menu();
            }
        });
    });
}
