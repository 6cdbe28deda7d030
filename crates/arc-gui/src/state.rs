use arc_core::{GraphAction, Oscilloscope, Param, ViewAction};
use crossbeam::channel::{Receiver, Sender};
use std::time::Instant;

/// Commands sent from widget code to the scope owner via a channel.
///
/// Widgets only read the [`Oscilloscope`]; every change goes through here and
/// is applied by [`apply_command`] before the next frame is drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    /// A slider, spin box or dial moved.
    SetParam { param: Param, value: f64 },
    /// Show or hide the sine series (check box).
    SetSineVisible(bool),
    /// Show or hide the cosine series (check box).
    SetCosineVisible(bool),
    /// Flip sine visibility (tool bar).
    ToggleSine,
    /// Flip cosine visibility (tool bar).
    ToggleCosine,
    /// A line entered in the console input.
    SubmitLine(String),
    /// A File-menu graph action.
    Graph(GraphAction),
    /// Pause or resume the timer.
    SetRunning(bool),
    /// Close the window.
    Quit,
}

/// Create the command channel. Capacity covers a burst of slider drags in one
/// frame; overflow is dropped by `try_send`.
pub fn command_channel() -> (Sender<UiCommand>, Receiver<UiCommand>) {
    crossbeam::channel::bounded(256)
}

/// Apply one command to the scope.
pub fn apply_command(
    scope: &mut Oscilloscope,
    cmd: UiCommand,
    now: Instant,
) -> Option<ViewAction> {
    match cmd {
        UiCommand::SetParam { param, value } => {
            scope.set_param(param, value);
        }
        UiCommand::SetSineVisible(visible) => scope.set_sine_visible(visible),
        UiCommand::SetCosineVisible(visible) => scope.set_cosine_visible(visible),
        UiCommand::ToggleSine => {
            scope.toggle_sine();
        }
        UiCommand::ToggleCosine => {
            scope.toggle_cosine();
        }
        UiCommand::SubmitLine(line) => return scope.submit(&line, now),
        UiCommand::Graph(action) => scope.graph_action(action, now),
        UiCommand::SetRunning(running) => scope.set_running(running),
        UiCommand::Quit => return Some(ViewAction::Quit),
    }
    None
}

/// Drain every pending command. Returns `Quit` if any command asked for it.
pub fn drain_commands(
    scope: &mut Oscilloscope,
    rx: &Receiver<UiCommand>,
    now: Instant,
) -> Option<ViewAction> {
    let mut action = None;
    while let Ok(cmd) = rx.try_recv() {
        if let Some(a) = apply_command(scope, cmd, now) {
            action = Some(a);
        }
    }
    action
}

/// View-only state: which bars and docks are shown, open dialogs, the console
/// input buffer. None of it affects the waveform.
pub struct UiState {
    pub show_files_bar: bool,
    pub show_wave_bar: bool,
    pub show_controls: bool,
    pub show_console: bool,
    pub show_about: bool,
    pub show_shortcuts: bool,
    pub console_input: String,
    /// Status tip of the action under the pointer this frame.
    pub hovered_tip: Option<&'static str>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            show_files_bar: true,
            show_wave_bar: true,
            show_controls: true,
            show_console: true,
            show_about: false,
            show_shortcuts: false,
            console_input: String::new(),
            hovered_tip: None,
        }
    }
}
