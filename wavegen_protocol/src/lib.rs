use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
}

/// Full waveform-generator configuration frame as it travels on the wire.
/// The device always sends and expects every field; there is no partial form.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSnapshot {
    pub wave: bool,
    pub digital: bool,
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

/// Outbound command to the device. `SetConfig` carries the snapshot fields
/// inline next to the command tag.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(tag = "command")]
pub enum SyncCommand {
    #[serde(rename = "GET_CONFIG_WAV_GEN")]
    GetConfig,
    #[serde(rename = "SET_CONFIG_WAV_GEN")]
    SetConfig(ConfigSnapshot),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionEvent {
    pub is_connected: bool,
}
