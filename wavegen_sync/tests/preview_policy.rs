use wavegen_sync::{
    ConfigSnapshot, ConfigStore, NumericParam, PreviewMode, SignalChannel, WaveGenSettings,
    Waveform,
};

fn frame_with_flags(wave: bool, digital: bool) -> ConfigSnapshot {
    let mut frame = WaveGenSettings::default().to_snapshot();
    frame.wave = wave;
    frame.digital = digital;
    frame
}

#[test]
fn defaults_match_the_screen_boot_state() {
    let settings = WaveGenSettings::default();
    assert_eq!(settings.active_preview, PreviewMode::Wave);
    assert_eq!(settings.s1_frequency, 10.0);
    assert_eq!(settings.s2_frequency, 10.0);
    assert_eq!(settings.wave_form_s1, Waveform::Sine);
    assert_eq!(settings.wave_form_s2, Waveform::Sine);
    assert_eq!(settings.s2_phase, 0.0);
    assert_eq!(settings.pwm_frequency, 0.0);
    assert_eq!(settings.sqr1_duty_cycle, 0.0);
    assert_eq!(settings.sqr4_phase, 0.0);
}

#[test]
fn toggle_selects_one_active_preview_and_is_idempotent() {
    let (mut store, _rx) = ConfigStore::new();
    assert_eq!(store.settings().active_preview, PreviewMode::Wave);

    store.toggle_preview(PreviewMode::Digital);
    assert_eq!(store.settings().active_preview, PreviewMode::Digital);

    store.toggle_preview(PreviewMode::Digital);
    assert_eq!(store.settings().active_preview, PreviewMode::Digital);

    store.toggle_preview(PreviewMode::Wave);
    assert_eq!(store.settings().active_preview, PreviewMode::Wave);
}

#[test]
fn wire_encoding_keeps_the_preview_flags_exclusive() {
    let (mut store, _rx) = ConfigStore::new();
    let frame = store.snapshot();
    assert!(frame.wave);
    assert!(!frame.digital);

    store.toggle_preview(PreviewMode::Digital);
    let frame = store.snapshot();
    assert!(!frame.wave);
    assert!(frame.digital);
}

#[test]
fn ambiguous_legacy_flag_frames_decode_to_wave() {
    // Firmware predating the exclusive encoding could report both flags set
    // or neither; the wave slot wins, matching the screen's boot default.
    let both = WaveGenSettings::from_snapshot(&frame_with_flags(true, true));
    assert_eq!(both.active_preview, PreviewMode::Wave);

    let neither = WaveGenSettings::from_snapshot(&frame_with_flags(false, false));
    assert_eq!(neither.active_preview, PreviewMode::Wave);

    let digital_only = WaveGenSettings::from_snapshot(&frame_with_flags(false, true));
    assert_eq!(digital_only.active_preview, PreviewMode::Digital);
}

#[test]
fn mutations_publish_committed_state() {
    let (mut store, mut rx) = ConfigStore::new();

    store.set_parameter(NumericParam::Sqr2DutyCycle, 33.0);
    assert!(rx.has_changed().expect("store alive"));
    assert_eq!(rx.borrow_and_update().sqr2_duty_cycle, 33.0);

    store.set_waveform(SignalChannel::S1, Waveform::Triangle);
    assert!(rx.has_changed().expect("store alive"));
    assert_eq!(rx.borrow_and_update().wave_form_s1, Waveform::Triangle);
}
