pub mod chart;
pub mod console_dock;
pub mod controls_dock;
pub mod dialogs;
pub mod menu_bar;
pub mod state;
pub mod theme;
pub mod toolbar;

pub use state::{apply_command, command_channel, drain_commands, UiCommand, UiState};

use arc_core::{Oscilloscope, StatusLevel};
use crossbeam::channel::Sender;
use std::time::Instant;

/// Draw the complete oscilloscope window for one frame.
///
/// Reads `scope` only. Every user action is sent on `tx` and must be applied
/// (see [`drain_commands`]) before the next frame.
pub fn draw_window(
    ctx: &egui::Context,
    scope: &Oscilloscope,
    state: &mut UiState,
    tx: &Sender<UiCommand>,
    now: Instant,
) {
    theme::apply(ctx);
    state.hovered_tip = None;

    menu_bar::handle_shortcuts(ctx, tx);

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        menu_bar::draw_menu_bar(ui, state, tx);
    });

    if state.show_files_bar || state.show_wave_bar {
        egui::TopBottomPanel::top("tool_bar").show(ctx, |ui| {
            toolbar::draw_toolbars(ui, scope, state, tx);
        });
    }

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        draw_status_bar(ui, scope, state, now);
    });

    if state.show_controls {
        egui::TopBottomPanel::bottom("controls")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                controls_dock::draw_controls(ui, scope, tx);
                ui.add_space(4.0);
            });
    }

    if state.show_console {
        egui::SidePanel::right("console")
            .resizable(true)
            .default_width(380.0)
            .show(ctx, |ui| {
                console_dock::draw_console(ui, scope, state, tx);
            });
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        chart::draw_chart(ui, scope);
    });

    dialogs::draw_about_dialog(ctx, &mut state.show_about);
    dialogs::draw_shortcuts_dialog(ctx, &mut state.show_shortcuts);
}

fn draw_status_bar(ui: &mut egui::Ui, scope: &Oscilloscope, state: &UiState, now: Instant) {
    ui.horizontal(|ui| {
        if let Some(msg) = scope.status(now) {
            let color = match msg.level {
                StatusLevel::Error => theme::STATUS_ERROR,
                StatusLevel::Info => theme::STATUS_INFO,
            };
            ui.colored_label(color, &msg.text);
        } else if let Some(tip) = state.hovered_tip {
            ui.label(tip);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let s = scope.state();
            ui.monospace(format!(
                "t = {:6.2} s   A = {}   T = {}   φ = {}",
                s.time(),
                s.amplitude(),
                s.period(),
                s.phase()
            ));
            if !scope.is_running() {
                ui.separator();
                ui.label("Paused");
            }
        });
    });
}
