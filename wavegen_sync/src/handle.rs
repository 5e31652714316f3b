use thiserror::Error;
use tokio::sync::{mpsc, watch};

use crate::config::{NumericParam, PreviewMode, SignalChannel, WaveGenSettings};
use crate::controller::SyncStatus;
use wavegen_protocol::Waveform;

#[derive(Debug, Clone)]
pub enum UiIntent {
    TogglePreview(PreviewMode),
    SelectWaveform(SignalChannel, Waveform),
    SetParameter(NumericParam, f64),
}

#[derive(Debug, Error)]
pub enum HandleError {
    #[error("sync controller unavailable")]
    ControllerGone,
}

/// Outward surface of the controller: mutation entry points for the
/// settings panel plus live read-only views for rendering. Cloneable;
/// dropping the last clone tears the controller down.
#[derive(Clone)]
pub struct WaveGenHandle {
    intent_tx: mpsc::Sender<UiIntent>,
    settings_rx: watch::Receiver<WaveGenSettings>,
    status_rx: watch::Receiver<SyncStatus>,
}

impl WaveGenHandle {
    pub(crate) fn new(
        intent_tx: mpsc::Sender<UiIntent>,
        settings_rx: watch::Receiver<WaveGenSettings>,
        status_rx: watch::Receiver<SyncStatus>,
    ) -> Self {
        Self {
            intent_tx,
            settings_rx,
            status_rx,
        }
    }

    pub async fn toggle_preview(&self, mode: PreviewMode) -> Result<(), HandleError> {
        self.send(UiIntent::TogglePreview(mode)).await
    }

    pub async fn select_waveform(
        &self,
        channel: SignalChannel,
        shape: Waveform,
    ) -> Result<(), HandleError> {
        self.send(UiIntent::SelectWaveform(channel, shape)).await
    }

    pub async fn set_parameter(&self, param: NumericParam, value: f64) -> Result<(), HandleError> {
        self.send(UiIntent::SetParameter(param, value)).await
    }

    async fn send(&self, intent: UiIntent) -> Result<(), HandleError> {
        self.intent_tx
            .send(intent)
            .await
            .map_err(|_| HandleError::ControllerGone)
    }

    pub fn settings(&self) -> WaveGenSettings {
        *self.settings_rx.borrow()
    }

    pub fn active_preview(&self) -> PreviewMode {
        self.settings_rx.borrow().active_preview
    }

    pub fn sync_status(&self) -> SyncStatus {
        *self.status_rx.borrow()
    }

    pub fn watch_settings(&self) -> watch::Receiver<WaveGenSettings> {
        self.settings_rx.clone()
    }

    pub fn watch_status(&self) -> watch::Receiver<SyncStatus> {
        self.status_rx.clone()
    }
}
