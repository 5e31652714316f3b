use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wavegen_sync::{
    ConfigSnapshot, ConnectionEvent, ControllerConfig, DeviceEvent, NumericParam, PreviewMode,
    SignalChannel, SyncCommand, SyncController, Waveform, COMMAND_CAP, DEVICE_EVENT_CAP,
};

fn demo_snapshot() -> ConfigSnapshot {
    ConfigSnapshot {
        wave: true,
        digital: false,
        s1_frequency: 20.0,
        s2_frequency: 10.0,
        s2_phase: 0.0,
        wave_form_s1: Waveform::Sine,
        wave_form_s2: Waveform::Square,
        pwm_frequency: 1000.0,
        sqr1_duty_cycle: 50.0,
        sqr2_duty_cycle: 0.0,
        sqr2_phase: 0.0,
        sqr3_duty_cycle: 0.0,
        sqr3_phase: 0.0,
        sqr4_duty_cycle: 0.0,
        sqr4_phase: 0.0,
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let (device_tx, device_rx) = mpsc::channel(DEVICE_EVENT_CAP);
    let (command_tx, mut command_rx) = mpsc::channel(COMMAND_CAP);

    let (controller, handle) =
        SyncController::new(device_rx, command_tx, ControllerConfig::default());
    let controller_task = tokio::spawn(controller.run());

    // Fake device: answer config reads with a canned frame, print writes.
    let responder_tx = device_tx.clone();
    let device_task = tokio::spawn(async move {
        while let Some(cmd) = command_rx.recv().await {
            match cmd {
                SyncCommand::GetConfig => {
                    info!("device: config read, replying with snapshot");
                    let _ = responder_tx
                        .send(DeviceEvent::Snapshot(demo_snapshot()))
                        .await;
                }
                SyncCommand::SetConfig(frame) => {
                    let json =
                        serde_json::to_string(&SyncCommand::SetConfig(frame)).unwrap_or_default();
                    info!("device: config write {json}");
                }
            }
        }
    });

    device_tx
        .send(DeviceEvent::Connection(ConnectionEvent { is_connected: true }))
        .await
        .expect("device channel");
    tokio::time::sleep(Duration::from_millis(700)).await;
    info!("settings after refetch: {:?}", handle.settings());

    handle
        .set_parameter(NumericParam::S1Frequency, 30.0)
        .await
        .expect("controller alive");
    handle
        .select_waveform(SignalChannel::S2, Waveform::Triangle)
        .await
        .expect("controller alive");
    handle
        .toggle_preview(PreviewMode::Digital)
        .await
        .expect("controller alive");
    tokio::time::sleep(Duration::from_millis(700)).await;
    info!("sync status after burst: {:?}", handle.sync_status());

    device_tx
        .send(DeviceEvent::Connection(ConnectionEvent {
            is_connected: false,
        }))
        .await
        .expect("device channel");
    handle
        .set_parameter(NumericParam::PwmFrequency, 125.0)
        .await
        .expect("controller alive");
    tokio::time::sleep(Duration::from_millis(700)).await;
    info!("sync status after offline edit: {:?}", handle.sync_status());

    drop(handle);
    let _ = controller_task.await;
    drop(device_tx);
    let _ = device_task.await;
}
