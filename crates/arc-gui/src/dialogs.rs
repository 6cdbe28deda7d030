use crate::menu_bar::{EXIT, OPEN_GRAPH, RESET_GRAPH, SAVE_GRAPH};

/// Draw the About dialog window.
pub fn draw_about_dialog(ctx: &egui::Context, open: &mut bool) {
    egui::Window::new("About ARC Oscilloscope")
        .open(open)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("ARC Oscilloscope");
                ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                ui.add_space(8.0);
                ui.label("Live sine and cosine waveform chart");
                ui.label("with adjustable amplitude, period and phase.");
                ui.add_space(8.0);
                ui.label("Type 'list' in the console for commands.");
            });
        });
}

/// Draw the Keyboard Shortcuts dialog window.
pub fn draw_shortcuts_dialog(ctx: &egui::Context, open: &mut bool) {
    egui::Window::new("Keyboard Shortcuts")
        .open(open)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::Grid::new("shortcuts_grid")
                .num_columns(2)
                .spacing([40.0, 4.0])
                .show(ui, |ui| {
                    for action in [&SAVE_GRAPH, &OPEN_GRAPH, &RESET_GRAPH, &EXIT] {
                        let Some(shortcut) = &action.shortcut else {
                            continue;
                        };
                        ui.label(egui::RichText::new(ctx.format_shortcut(shortcut)).monospace());
                        ui.label(action.label.trim_end_matches("..."));
                        ui.end_row();
                    }
                    ui.label(egui::RichText::new("Enter").monospace());
                    ui.label("Run console command");
                    ui.end_row();
                });
        });
}
