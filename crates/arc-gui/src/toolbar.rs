use crate::menu_bar::{action_button, COSINE_TOGGLE, OPEN_GRAPH, RESET_GRAPH, SAVE_GRAPH, SINE_TOGGLE};
use crate::state::{UiCommand, UiState};
use arc_core::{GraphAction, Oscilloscope};
use crossbeam::channel::Sender;

/// Draw the "Files Bar" and "Wave Bar" tool bars on one row, each only when
/// enabled in the View menu.
pub fn draw_toolbars(
    ui: &mut egui::Ui,
    scope: &Oscilloscope,
    state: &mut UiState,
    tx: &Sender<UiCommand>,
) {
    ui.horizontal(|ui| {
        if state.show_files_bar {
            for (action, graph) in [
                (&SAVE_GRAPH, GraphAction::Save),
                (&OPEN_GRAPH, GraphAction::Open),
                (&RESET_GRAPH, GraphAction::Reset),
            ] {
                if action_button(ui, action, state) {
                    let _ = tx.try_send(UiCommand::Graph(graph));
                }
            }
        }

        if state.show_files_bar && state.show_wave_bar {
            ui.separator();
        }

        if state.show_wave_bar {
            let toggles = [
                (&SINE_TOGGLE, scope.sine().is_visible(), UiCommand::ToggleSine),
                (&COSINE_TOGGLE, scope.cosine().is_visible(), UiCommand::ToggleCosine),
            ];
            for (action, visible, cmd) in toggles {
                let response = ui.selectable_label(visible, action.label);
                if response.hovered() {
                    state.hovered_tip = Some(action.tip);
                }
                if response.clicked() {
                    let _ = tx.try_send(cmd);
                }
            }
        }

        ui.separator();
        let running = scope.is_running();
        if ui
            .button(if running { "Pause" } else { "Resume" })
            .on_hover_text("Stop or restart the sampling timer.")
            .clicked()
        {
            let _ = tx.try_send(UiCommand::SetRunning(!running));
        }
    });
}
