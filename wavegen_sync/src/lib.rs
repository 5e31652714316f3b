mod channel;
mod config;
mod controller;
mod debounce;
mod handle;
mod store;

pub use crate::channel::{DeviceEvent, COMMAND_CAP, DEVICE_EVENT_CAP, INTENT_CAP};
pub use crate::config::{NumericParam, PreviewMode, SignalChannel, WaveGenSettings};
pub use crate::controller::{ControllerConfig, SyncController, SyncStatus, SYNC_DEBOUNCE};
pub use crate::debounce::Debouncer;
pub use crate::handle::{HandleError, UiIntent, WaveGenHandle};
pub use crate::store::ConfigStore;
pub use wavegen_protocol::{ConfigSnapshot, ConnectionEvent, SyncCommand, Waveform};
