use crate::config::{NumericParam, PreviewMode, SignalChannel, WaveGenSettings};
use tokio::sync::watch;
use wavegen_protocol::{ConfigSnapshot, Waveform};

/// Owns the current settings and publishes every committed change to
/// downstream consumers. Mutations are synchronous; the outbound write they
/// imply is scheduled by the controller after the commit, never before.
pub struct ConfigStore {
    settings: WaveGenSettings,
    publish: watch::Sender<WaveGenSettings>,
}

impl ConfigStore {
    pub fn new() -> (Self, watch::Receiver<WaveGenSettings>) {
        let settings = WaveGenSettings::default();
        let (publish, settings_rx) = watch::channel(settings);
        (Self { settings, publish }, settings_rx)
    }

    pub fn settings(&self) -> WaveGenSettings {
        self.settings
    }

    /// Current state as a wire frame, read at call time.
    pub fn snapshot(&self) -> ConfigSnapshot {
        self.settings.to_snapshot()
    }

    /// Selects the active preview. Selection is idempotent; re-selecting the
    /// active mode is a committed no-op change.
    pub fn toggle_preview(&mut self, mode: PreviewMode) {
        self.settings.active_preview = mode;
        self.commit();
    }

    pub fn set_waveform(&mut self, channel: SignalChannel, shape: Waveform) {
        self.settings.set_waveform(channel, shape);
        self.commit();
    }

    pub fn set_parameter(&mut self, param: NumericParam, value: f64) {
        self.settings.set_numeric(param, value);
        self.commit();
    }

    /// Wholesale replace from an inbound frame. Every field lands in one
    /// commit; the payload is trusted as-is.
    pub fn replace(&mut self, frame: &ConfigSnapshot) {
        self.settings = WaveGenSettings::from_snapshot(frame);
        self.commit();
    }

    fn commit(&self) {
        self.publish.send_replace(self.settings);
    }
}
