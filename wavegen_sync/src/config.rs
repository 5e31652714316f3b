use serde::Serialize;
use wavegen_protocol::{ConfigSnapshot, Waveform};

/// Which preview the screen is rendering. Exactly one is active at all
/// times; the legacy pair of independent booleans is collapsed into this
/// enum and only re-expanded at the wire boundary.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PreviewMode {
    Wave,
    Digital,
}

/// Analog output channel whose waveform shape a mutation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalChannel {
    S1,
    S2,
}

/// Numeric configuration field addressed by a slider-style mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericParam {
    S1Frequency,
    S2Frequency,
    S2Phase,
    PwmFrequency,
    Sqr1DutyCycle,
    Sqr2DutyCycle,
    Sqr2Phase,
    Sqr3DutyCycle,
    Sqr3Phase,
    Sqr4DutyCycle,
    Sqr4Phase,
}

/// The flat settings object handed to the presentation layer.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WaveGenSettings {
    pub active_preview: PreviewMode,
    pub s1_frequency: f64,
    pub s2_frequency: f64,
    pub s2_phase: f64,
    pub wave_form_s1: Waveform,
    pub wave_form_s2: Waveform,
    pub pwm_frequency: f64,
    pub sqr1_duty_cycle: f64,
    pub sqr2_duty_cycle: f64,
    pub sqr2_phase: f64,
    pub sqr3_duty_cycle: f64,
    pub sqr3_phase: f64,
    pub sqr4_duty_cycle: f64,
    pub sqr4_phase: f64,
}

impl Default for WaveGenSettings {
    fn default() -> Self {
        Self {
            active_preview: PreviewMode::Wave,
            s1_frequency: 10.0,
            s2_frequency: 10.0,
            s2_phase: 0.0,
            wave_form_s1: Waveform::Sine,
            wave_form_s2: Waveform::Sine,
            pwm_frequency: 0.0,
            sqr1_duty_cycle: 0.0,
            sqr2_duty_cycle: 0.0,
            sqr2_phase: 0.0,
            sqr3_duty_cycle: 0.0,
            sqr3_phase: 0.0,
            sqr4_duty_cycle: 0.0,
            sqr4_phase: 0.0,
        }
    }
}

impl WaveGenSettings {
    pub fn to_snapshot(&self) -> ConfigSnapshot {
        ConfigSnapshot {
            wave: self.active_preview == PreviewMode::Wave,
            digital: self.active_preview == PreviewMode::Digital,
            s1_frequency: self.s1_frequency,
            s2_frequency: self.s2_frequency,
            s2_phase: self.s2_phase,
            wave_form_s1: self.wave_form_s1,
            wave_form_s2: self.wave_form_s2,
            pwm_frequency: self.pwm_frequency,
            sqr1_duty_cycle: self.sqr1_duty_cycle,
            sqr2_duty_cycle: self.sqr2_duty_cycle,
            sqr2_phase: self.sqr2_phase,
            sqr3_duty_cycle: self.sqr3_duty_cycle,
            sqr3_phase: self.sqr3_phase,
            sqr4_duty_cycle: self.sqr4_duty_cycle,
            sqr4_phase: self.sqr4_phase,
        }
    }

    /// Older firmware can report both preview flags set (or neither); the
    /// wave slot wins in that case, matching the screen's default.
    pub fn from_snapshot(frame: &ConfigSnapshot) -> Self {
        let active_preview = if frame.digital && !frame.wave {
            PreviewMode::Digital
        } else {
            PreviewMode::Wave
        };
        Self {
            active_preview,
            s1_frequency: frame.s1_frequency,
            s2_frequency: frame.s2_frequency,
            s2_phase: frame.s2_phase,
            wave_form_s1: frame.wave_form_s1,
            wave_form_s2: frame.wave_form_s2,
            pwm_frequency: frame.pwm_frequency,
            sqr1_duty_cycle: frame.sqr1_duty_cycle,
            sqr2_duty_cycle: frame.sqr2_duty_cycle,
            sqr2_phase: frame.sqr2_phase,
            sqr3_duty_cycle: frame.sqr3_duty_cycle,
            sqr3_phase: frame.sqr3_phase,
            sqr4_duty_cycle: frame.sqr4_duty_cycle,
            sqr4_phase: frame.sqr4_phase,
        }
    }

    pub(crate) fn set_waveform(&mut self, channel: SignalChannel, shape: Waveform) {
        match channel {
            SignalChannel::S1 => self.wave_form_s1 = shape,
            SignalChannel::S2 => self.wave_form_s2 = shape,
        }
    }

    pub(crate) fn set_numeric(&mut self, param: NumericParam, value: f64) {
        match param {
            NumericParam::S1Frequency => self.s1_frequency = value,
            NumericParam::S2Frequency => self.s2_frequency = value,
            NumericParam::S2Phase => self.s2_phase = value,
            NumericParam::PwmFrequency => self.pwm_frequency = value,
            NumericParam::Sqr1DutyCycle => self.sqr1_duty_cycle = value,
            NumericParam::Sqr2DutyCycle => self.sqr2_duty_cycle = value,
            NumericParam::Sqr2Phase => self.sqr2_phase = value,
            NumericParam::Sqr3DutyCycle => self.sqr3_duty_cycle = value,
            NumericParam::Sqr3Phase => self.sqr3_phase = value,
            NumericParam::Sqr4DutyCycle => self.sqr4_duty_cycle = value,
            NumericParam::Sqr4Phase => self.sqr4_phase = value,
        }
    }
}
