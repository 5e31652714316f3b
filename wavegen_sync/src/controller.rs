use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

use crate::channel::{DeviceEvent, INTENT_CAP};
use crate::debounce::Debouncer;
use crate::handle::{UiIntent, WaveGenHandle};
use crate::store::ConfigStore;
use wavegen_protocol::SyncCommand;

/// Quiet window shared by the outgoing write and the refetch trigger.
pub const SYNC_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy)]
pub struct ControllerConfig {
    pub debounce_window: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            debounce_window: SYNC_DEBOUNCE,
        }
    }
}

/// Where local state stands relative to the device. `StaleDisconnected`
/// means a write was dropped at window close; the reconnect refetch is the
/// recovery path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    Synced,
    Pending,
    StaleDisconnected,
}

/// Single-task sync actor. Owns the store, both debouncers and the
/// connectivity flag; every handler and timer callback runs sequentially on
/// this task, so mutations and sends are naturally linearized.
pub struct SyncController {
    intent_rx: mpsc::Receiver<UiIntent>,
    device_rx: mpsc::Receiver<DeviceEvent>,
    command_tx: mpsc::Sender<SyncCommand>,
    store: ConfigStore,
    push: Debouncer,
    fetch: Debouncer,
    is_connected: bool,
    status_tx: watch::Sender<SyncStatus>,
}

impl SyncController {
    pub fn new(
        device_rx: mpsc::Receiver<DeviceEvent>,
        command_tx: mpsc::Sender<SyncCommand>,
        config: ControllerConfig,
    ) -> (Self, WaveGenHandle) {
        let (intent_tx, intent_rx) = mpsc::channel(INTENT_CAP);
        let (store, settings_rx) = ConfigStore::new();
        let (status_tx, status_rx) = watch::channel(SyncStatus::Synced);

        let controller = Self {
            intent_rx,
            device_rx,
            command_tx,
            store,
            push: Debouncer::new(config.debounce_window),
            fetch: Debouncer::new(config.debounce_window),
            is_connected: false,
            status_tx,
        };
        let handle = WaveGenHandle::new(intent_tx, settings_rx, status_rx);
        (controller, handle)
    }

    pub async fn run(mut self) {
        // Screen-mount refetch. The connectivity guard at fire time turns
        // this into a no-op while the device is still absent.
        self.fetch.arm();

        loop {
            tokio::select! {
                intent = self.intent_rx.recv() => {
                    match intent {
                        Some(intent) => self.on_intent(intent),
                        // Every handle dropped: tear down. Pending windows
                        // die with the task and can never fire afterwards.
                        None => break,
                    }
                }
                event = self.device_rx.recv() => {
                    match event {
                        Some(event) => self.on_device_event(event),
                        None => {
                            warn!("device channel closed, stopping sync controller");
                            break;
                        }
                    }
                }
                _ = self.push.idle(), if self.push.is_armed() => self.flush_push(),
                _ = self.fetch.idle(), if self.fetch.is_armed() => self.flush_fetch(),
            }
        }
    }

    fn on_intent(&mut self, intent: UiIntent) {
        match intent {
            UiIntent::TogglePreview(mode) => self.store.toggle_preview(mode),
            UiIntent::SelectWaveform(channel, shape) => self.store.set_waveform(channel, shape),
            UiIntent::SetParameter(param, value) => self.store.set_parameter(param, value),
        }
        // The mutation above is committed before the window is armed; the
        // eventual send reads live store state, not a snapshot taken here.
        self.push.arm();
        self.status_tx.send_replace(SyncStatus::Pending);
    }

    fn on_device_event(&mut self, event: DeviceEvent) {
        match event {
            DeviceEvent::Connection(ev) => {
                if ev.is_connected && !self.is_connected {
                    debug!("device connected, scheduling config refetch");
                    self.fetch.arm();
                }
                self.is_connected = ev.is_connected;
            }
            DeviceEvent::Snapshot(frame) => {
                debug!("applying device config snapshot");
                self.store.replace(&frame);
                self.status_tx.send_replace(SyncStatus::Synced);
            }
        }
    }

    fn flush_push(&mut self) {
        self.push.disarm();
        if !self.is_connected {
            // Dropped on purpose, no retry and no requeue; the next user
            // mutation or the reconnect refetch resynchronizes.
            warn!("disconnected at window close, dropping config write");
            self.status_tx.send_replace(SyncStatus::StaleDisconnected);
            return;
        }
        match self
            .command_tx
            .try_send(SyncCommand::SetConfig(self.store.snapshot()))
        {
            Ok(()) => {
                debug!("sent SET_CONFIG_WAV_GEN");
                self.status_tx.send_replace(SyncStatus::Synced);
            }
            Err(err) => warn!("config write not sent: {err}"),
        }
    }

    fn flush_fetch(&mut self) {
        self.fetch.disarm();
        if !self.is_connected {
            return;
        }
        match self.command_tx.try_send(SyncCommand::GetConfig) {
            Ok(()) => debug!("sent GET_CONFIG_WAV_GEN"),
            Err(err) => warn!("config read not sent: {err}"),
        }
    }
}
