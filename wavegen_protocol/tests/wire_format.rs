use serde_json::json;
use wavegen_protocol::{ConfigSnapshot, ConnectionEvent, SyncCommand, Waveform};

fn sample_snapshot() -> ConfigSnapshot {
    ConfigSnapshot {
        wave: true,
        digital: false,
        s1_frequency: 20.0,
        s2_frequency: 10.0,
        s2_phase: 90.0,
        wave_form_s1: Waveform::Sine,
        wave_form_s2: Waveform::Triangle,
        pwm_frequency: 5000.0,
        sqr1_duty_cycle: 50.0,
        sqr2_duty_cycle: 25.0,
        sqr2_phase: 180.0,
        sqr3_duty_cycle: 12.5,
        sqr3_phase: 45.0,
        sqr4_duty_cycle: 75.0,
        sqr4_phase: 270.0,
    }
}

#[test]
fn get_config_is_a_bare_command_tag() {
    let value = serde_json::to_value(SyncCommand::GetConfig).expect("serialize");
    assert_eq!(value, json!({ "command": "GET_CONFIG_WAV_GEN" }));
}

#[test]
fn set_config_carries_snapshot_fields_beside_the_tag() {
    let value = serde_json::to_value(SyncCommand::SetConfig(sample_snapshot())).expect("serialize");
    let obj = value.as_object().expect("json object");

    assert_eq!(obj["command"], "SET_CONFIG_WAV_GEN");
    assert_eq!(obj["wave"], json!(true));
    assert_eq!(obj["digital"], json!(false));
    assert_eq!(obj["s1Frequency"], json!(20.0));
    assert_eq!(obj["s2Phase"], json!(90.0));
    assert_eq!(obj["waveFormS1"], json!("sine"));
    assert_eq!(obj["waveFormS2"], json!("triangle"));
    assert_eq!(obj["pwmFrequency"], json!(5000.0));
    assert_eq!(obj["sqr3DutyCycle"], json!(12.5));
    assert_eq!(obj["sqr4Phase"], json!(270.0));
    // Tag plus the fifteen snapshot fields, nothing nested.
    assert_eq!(obj.len(), 16);
}

#[test]
fn device_snapshot_frame_parses_with_camel_case_names() {
    let frame = r#"{
        "wave": false,
        "digital": true,
        "s1Frequency": 20.0,
        "s2Frequency": 15.5,
        "s2Phase": 0.0,
        "waveFormS1": "square",
        "waveFormS2": "sine",
        "pwmFrequency": 1000.0,
        "sqr1DutyCycle": 10.0,
        "sqr2DutyCycle": 20.0,
        "sqr2Phase": 30.0,
        "sqr3DutyCycle": 40.0,
        "sqr3Phase": 50.0,
        "sqr4DutyCycle": 60.0,
        "sqr4Phase": 70.0
    }"#;

    let snap: ConfigSnapshot = serde_json::from_str(frame).expect("parse snapshot frame");
    assert!(!snap.wave);
    assert!(snap.digital);
    assert_eq!(snap.s1_frequency, 20.0);
    assert_eq!(snap.s2_frequency, 15.5);
    assert_eq!(snap.wave_form_s1, Waveform::Square);
    assert_eq!(snap.wave_form_s2, Waveform::Sine);
    assert_eq!(snap.sqr4_phase, 70.0);
}

#[test]
fn set_config_roundtrips_through_the_command_tag() {
    let cmd = SyncCommand::SetConfig(sample_snapshot());
    let text = serde_json::to_string(&cmd).expect("serialize");
    let parsed: SyncCommand = serde_json::from_str(&text).expect("parse command");
    assert_eq!(parsed, cmd);
}

#[test]
fn connection_event_parses() {
    let ev: ConnectionEvent =
        serde_json::from_str(r#"{ "isConnected": true }"#).expect("parse connection event");
    assert!(ev.is_connected);
}
