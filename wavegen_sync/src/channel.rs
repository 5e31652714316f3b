pub const DEVICE_EVENT_CAP: usize = 256;
pub const COMMAND_CAP: usize = 256;
pub const INTENT_CAP: usize = 256;

/// Inbound traffic from the transport: connectivity transitions and full
/// configuration snapshots pushed by the device.
#[derive(Debug, Clone)]
pub enum DeviceEvent {
    Connection(ConnectionEvent),
    Snapshot(ConfigSnapshot),
}

pub use wavegen_protocol::{ConfigSnapshot, ConnectionEvent, SyncCommand, Waveform};
