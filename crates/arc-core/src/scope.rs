use crate::config::ScopeConfig;
use crate::console::{Console, Outcome};
use crate::parameter::Param;
use crate::series::{SamplePoint, Series};
use crate::status::{StatusBar, StatusLevel, StatusMessage};
use crate::waveform::{Tick, WaveformState};
use std::time::Instant;

/// File-menu graph actions. None of them has a persistence backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphAction {
    Save,
    Open,
    Reset,
}

impl GraphAction {
    pub fn title(&self) -> &'static str {
        match self {
            GraphAction::Save => "Save Graph",
            GraphAction::Open => "Open Graph",
            GraphAction::Reset => "Reset Graph",
        }
    }
}

/// Requests the scope cannot fulfil itself and hands back to the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    Quit,
}

/// The oscilloscope view-model: waveform state, plotted series, console log
/// and status bar, owned in one place.
///
/// Widgets never mutate this directly; the window applies their commands here
/// and renders the next frame from the result.
pub struct Oscilloscope {
    state: WaveformState,
    sine: Series,
    cosine: Series,
    console: Console,
    status: StatusBar,
    running: bool,
    ticks: u64,
}

impl Default for Oscilloscope {
    fn default() -> Self {
        Self::new(&ScopeConfig::default())
    }
}

impl Oscilloscope {
    pub fn new(config: &ScopeConfig) -> Self {
        let mut state = WaveformState::new(config.time_step);
        state.set(Param::Amplitude, config.amplitude);
        state.set(Param::Period, config.period);
        state.set(Param::Phase, config.phase);

        Self {
            state,
            sine: Series::new("Sine"),
            cosine: Series::new("Cosine"),
            console: Console::new(),
            status: StatusBar::default(),
            running: true,
            ticks: 0,
        }
    }

    pub fn state(&self) -> &WaveformState {
        &self.state
    }

    pub fn sine(&self) -> &Series {
        &self.sine
    }

    pub fn cosine(&self) -> &Series {
        &self.cosine
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    /// Total ticks since start-up.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn status(&self, now: Instant) -> Option<&StatusMessage> {
        self.status.current(now)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        if self.running != running {
            log::info!("Sampling {}", if running { "resumed" } else { "paused" });
        }
        self.running = running;
    }

    /// Advance one timer tick and append the samples to both series.
    ///
    /// When the clock wraps, both series are cleared first so the chart starts
    /// a fresh sweep.
    pub fn tick(&mut self) -> Tick {
        let tick = self.state.tick();
        self.ticks += 1;
        if tick.wrapped {
            log::debug!("Sweep wrapped after {} ticks", self.ticks);
            self.sine.clear();
            self.cosine.clear();
        }
        let s = tick.sample;
        self.sine.push(SamplePoint::new(s.time, s.sine));
        self.cosine.push(SamplePoint::new(s.time, s.cosine));
        tick
    }

    /// Set a parameter from a control. Returns the clamped value stored.
    pub fn set_param(&mut self, param: Param, value: f64) -> f64 {
        let stored = self.state.set(param, value);
        log::info!("{} = {}", param.label(), stored);
        stored
    }

    pub fn toggle_sine(&mut self) -> bool {
        self.sine.toggle()
    }

    pub fn toggle_cosine(&mut self) -> bool {
        self.cosine.toggle()
    }

    pub fn set_sine_visible(&mut self, visible: bool) {
        self.sine.set_visible(visible);
    }

    pub fn set_cosine_visible(&mut self, visible: bool) {
        self.cosine.set_visible(visible);
    }

    /// Run a graph action from the menu or tool bar.
    pub fn graph_action(&mut self, action: GraphAction, now: Instant) {
        log::warn!("{} requested but not implemented", action.title());
        self.status.show(
            format!("{} is not implemented yet.", action.title()),
            StatusLevel::Info,
            now,
        );
    }

    /// Feed one line from the console input.
    pub fn submit(&mut self, line: &str, now: Instant) -> Option<ViewAction> {
        match self.console.submit(line, &mut self.state) {
            Outcome::Handled | Outcome::Rejected(_) => None,
            Outcome::Changed { param, value } => {
                log::info!("{} = {} (console)", param.label(), value);
                None
            }
            Outcome::Quit => Some(ViewAction::Quit),
            Outcome::NotImplemented(cmd) => {
                log::warn!("Console '{}' requested but not implemented", cmd.verb());
                None
            }
            Outcome::Status(text) => {
                self.status.show(text, StatusLevel::Error, now);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_feeds_both_series() {
        let mut scope = Oscilloscope::default();
        for _ in 0..10 {
            scope.tick();
        }
        assert_eq!(scope.sine().len(), 10);
        assert_eq!(scope.cosine().len(), 10);
        assert_eq!(scope.tick_count(), 10);
    }

    #[test]
    fn test_wrap_clears_series() {
        let config = ScopeConfig {
            time_step: 0.5,
            period: 1.0,
            ..Default::default()
        };
        let mut scope = Oscilloscope::new(&config);
        scope.tick();
        assert_eq!(scope.sine().len(), 1);
        let tick = scope.tick();
        assert!(tick.wrapped);
        assert_eq!(scope.sine().len(), 1);
        assert_eq!(scope.sine().last().map(|p| p.time), Some(0.0));
    }

    #[test]
    fn test_unknown_set_param_goes_to_status_bar() {
        let now = Instant::now();
        let mut scope = Oscilloscope::default();
        let before = scope.state().clone();
        assert_eq!(scope.submit("set gain 3", now), None);
        assert_eq!(scope.state(), &before);
        let status = scope.status(now).map(|m| m.text.clone());
        assert_eq!(status.as_deref(), Some("ERROR: 'gain' value unknown."));
    }

    #[test]
    fn test_quit_and_exit() {
        let now = Instant::now();
        let mut scope = Oscilloscope::default();
        assert_eq!(scope.submit("quit", now), Some(ViewAction::Quit));
        assert_eq!(scope.submit("EXIT", now), Some(ViewAction::Quit));
    }

    #[test]
    fn test_graph_action_reports_not_implemented() {
        let now = Instant::now();
        let mut scope = Oscilloscope::default();
        scope.graph_action(GraphAction::Save, now);
        let status = scope.status(now).map(|m| m.text.clone());
        assert_eq!(status.as_deref(), Some("Save Graph is not implemented yet."));
    }

    #[test]
    fn test_config_values_are_applied() {
        let config = ScopeConfig {
            amplitude: 7.0,
            phase: 3.0,
            ..Default::default()
        };
        let scope = Oscilloscope::new(&config);
        assert_eq!(scope.state().amplitude(), 7.0);
        assert_eq!(scope.state().phase(), 3.0);
    }
}
