/// The three user-adjustable waveform parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    Amplitude,
    Period,
    Phase,
}

/// Inclusive value range and start-up value of a parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl ParamRange {
    pub const fn new(min: f64, max: f64, default: f64) -> Self {
        Self { min, max, default }
    }

    /// Clamp `value` into the range. Non-finite input maps to the default.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_finite() {
            value.clamp(self.min, self.max)
        } else {
            self.default
        }
    }

}

const AMPLITUDE_RANGE: ParamRange = ParamRange::new(0.0, 10.0, 2.0);
const PERIOD_RANGE: ParamRange = ParamRange::new(1.0, 60.0, 30.0);
const PHASE_RANGE: ParamRange = ParamRange::new(0.0, 10.0, 0.0);

impl Param {
    pub const ALL: [Param; 3] = [Param::Amplitude, Param::Period, Param::Phase];

    /// Look a parameter up by its console name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "amplitude" => Some(Param::Amplitude),
            "period" => Some(Param::Period),
            "phase" => Some(Param::Phase),
            _ => None,
        }
    }

    /// Lower-case name used by the console grammar.
    pub fn name(&self) -> &'static str {
        match self {
            Param::Amplitude => "amplitude",
            Param::Period => "period",
            Param::Phase => "phase",
        }
    }

    /// Capitalized name used for labels and `info` output.
    pub fn label(&self) -> &'static str {
        match self {
            Param::Amplitude => "Amplitude",
            Param::Period => "Period",
            Param::Phase => "Phase",
        }
    }

    pub fn range(&self) -> ParamRange {
        match self {
            Param::Amplitude => AMPLITUDE_RANGE,
            Param::Period => PERIOD_RANGE,
            Param::Phase => PHASE_RANGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(Param::from_name("AMPLITUDE"), Some(Param::Amplitude));
        assert_eq!(Param::from_name("Period"), Some(Param::Period));
        assert_eq!(Param::from_name("phase"), Some(Param::Phase));
        assert_eq!(Param::from_name("frequency"), None);
    }

    #[test]
    fn test_name_roundtrip() {
        for p in Param::ALL {
            assert_eq!(Param::from_name(p.name()), Some(p));
        }
    }

    #[test]
    fn test_period_never_reaches_zero() {
        let r = Param::Period.range();
        assert_eq!(r.clamp(0.0), 1.0);
        assert_eq!(r.clamp(-5.0), 1.0);
        assert_eq!(r.clamp(f64::NAN), 30.0);
        assert_eq!(r.clamp(120.0), 60.0);
    }

    #[test]
    fn test_defaults_inside_range() {
        for p in Param::ALL {
            let r = p.range();
            assert_eq!(r.clamp(r.default), r.default, "{} default out of range", p.name());
        }
    }
}
