pub mod clock;
pub mod command;
pub mod config;
pub mod console;
pub mod parameter;
pub mod scope;
pub mod series;
pub mod status;
pub mod waveform;

pub use clock::TickClock;
pub use command::{Command, CommandError};
pub use config::ScopeConfig;
pub use console::{Console, Outcome};
pub use parameter::{Param, ParamRange};
pub use scope::{GraphAction, Oscilloscope, ViewAction};
pub use series::{SamplePoint, Series};
pub use status::{StatusBar, StatusLevel, StatusMessage};
pub use waveform::{Tick, WaveSample, WaveformState};
