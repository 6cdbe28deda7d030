mod app;

use arc_core::ScopeConfig;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ScopeConfig::from_env();
    log::info!(
        "Starting ARC Oscilloscope: time step {} s, period {} s",
        config.time_step,
        config.period
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title(arc_gui::chart::TITLE)
            .with_inner_size(config.window_size)
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        arc_gui::chart::TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(app::ScopeApp::new(&config)))),
    )
}
