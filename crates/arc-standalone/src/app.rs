use arc_core::{Oscilloscope, ScopeConfig, TickClock, ViewAction};
use arc_gui::{UiCommand, UiState};
use crossbeam::channel::{Receiver, Sender};
use eframe::egui;
use std::time::Instant;

/// Top-level eframe application: owns the scope and drives its timer.
pub struct ScopeApp {
    scope: Oscilloscope,
    clock: TickClock,
    ui_state: UiState,
    command_tx: Sender<UiCommand>,
    command_rx: Receiver<UiCommand>,
    last_frame: Instant,
}

impl ScopeApp {
    pub fn new(config: &ScopeConfig) -> Self {
        let (tx, rx) = arc_gui::command_channel();
        let clock = TickClock::new(config.time_step, config.max_catch_up_ticks);
        log::info!("Timer interval {:?}", clock.interval());

        Self {
            scope: Oscilloscope::new(config),
            clock,
            ui_state: UiState::default(),
            command_tx: tx,
            command_rx: rx,
            last_frame: Instant::now(),
        }
    }

    fn run_timer(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        if !self.scope.is_running() {
            self.clock.reset();
            return;
        }
        for _ in 0..self.clock.advance(elapsed) {
            self.scope.tick();
        }
    }
}

impl eframe::App for ScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.run_timer(now);

        arc_gui::draw_window(ctx, &self.scope, &mut self.ui_state, &self.command_tx, now);

        // Apply what the widgets sent this frame; the next frame shows it.
        let pending = !self.command_rx.is_empty();
        if let Some(ViewAction::Quit) =
            arc_gui::drain_commands(&mut self.scope, &self.command_rx, now)
        {
            log::info!("Quit requested");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        if pending {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(self.clock.until_next());
        }
    }
}
