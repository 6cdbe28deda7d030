use crate::state::{UiCommand, UiState};
use arc_core::Oscilloscope;
use crossbeam::channel::Sender;
use egui::{Key, TextEdit, Ui};

const INPUT_HEIGHT: f32 = 28.0;

/// Draw the console dock: the scrolling log above a single-line input.
/// Enter submits the line and keeps focus in the input.
pub fn draw_console(
    ui: &mut Ui,
    scope: &Oscilloscope,
    state: &mut UiState,
    tx: &Sender<UiCommand>,
) {
    ui.heading("Console");
    ui.separator();

    let log_height = (ui.available_height() - INPUT_HEIGHT - 8.0).max(40.0);
    egui::ScrollArea::vertical()
        .max_height(log_height)
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for line in scope.console().lines() {
                ui.label(egui::RichText::new(line).monospace());
            }
        });

    ui.separator();

    let response = ui.add(
        TextEdit::singleline(&mut state.console_input)
            .hint_text("Enter a command")
            .font(egui::TextStyle::Monospace)
            .desired_width(f32::INFINITY),
    );

    if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
        let line = std::mem::take(&mut state.console_input);
        if !line.trim().is_empty() {
            let _ = tx.try_send(UiCommand::SubmitLine(line));
        }
        response.request_focus();
    }
}
