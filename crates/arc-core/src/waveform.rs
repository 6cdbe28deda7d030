use crate::parameter::Param;
use std::f64::consts::TAU;

/// Default tick increment in seconds (a 50 ms timer).
pub const DEFAULT_TIME_STEP: f64 = 0.05;

/// One evaluated point of both waveforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveSample {
    pub time: f64,
    pub sine: f64,
    pub cosine: f64,
}

/// Result of advancing the sampler by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub sample: WaveSample,
    /// Time reached the period and restarted from zero. Plotted series must be
    /// cleared before `sample` is appended.
    pub wrapped: bool,
}

/// Waveform parameters plus the running simulation clock.
///
/// `y(t) = amplitude * sin(2π / period * t + phase)`, and the same with `cos`.
///
/// Fields are private so the invariants hold: `period` is always inside
/// [`Param::Period`]'s range (so strictly positive), `time_step > 0`, and after
/// a tick `time` lies in `[0, period)`.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveformState {
    amplitude: f64,
    period: f64,
    phase: f64,
    time: f64,
    time_step: f64,
}

impl Default for WaveformState {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_STEP)
    }
}

impl WaveformState {
    /// Create a state with default parameters. An invalid `time_step` falls back
    /// to [`DEFAULT_TIME_STEP`].
    pub fn new(time_step: f64) -> Self {
        Self {
            amplitude: Param::Amplitude.range().default,
            period: Param::Period.range().default,
            phase: Param::Phase.range().default,
            time: 0.0,
            time_step: if is_valid_step(time_step) {
                time_step
            } else {
                DEFAULT_TIME_STEP
            },
        }
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn get(&self, param: Param) -> f64 {
        match param {
            Param::Amplitude => self.amplitude,
            Param::Period => self.period,
            Param::Phase => self.phase,
        }
    }

    /// Set a parameter, clamped to its range. Returns the value actually stored.
    pub fn set(&mut self, param: Param, value: f64) -> f64 {
        let clamped = param.range().clamp(value);
        match param {
            Param::Amplitude => self.amplitude = clamped,
            Param::Period => self.period = clamped,
            Param::Phase => self.phase = clamped,
        }
        clamped
    }

    /// Evaluate both waveforms at `time` without advancing the clock.
    pub fn evaluate(&self, time: f64) -> WaveSample {
        let angle = TAU / self.period * time + self.phase;
        let (sin, cos) = angle.sin_cos();
        WaveSample {
            time,
            sine: self.amplitude * sin,
            cosine: self.amplitude * cos,
        }
    }

    /// Advance the clock by one step, wrapping to zero once a full period has
    /// elapsed, and sample both waveforms at the new time.
    pub fn tick(&mut self) -> Tick {
        self.time += self.time_step;
        let wrapped = self.time >= self.period;
        if wrapped {
            self.time = 0.0;
        }
        Tick {
            sample: self.evaluate(self.time),
            wrapped,
        }
    }
}

fn is_valid_step(step: f64) -> bool {
    step.is_finite() && step > 0.0
}
