use rodio::source::{SineWave, Source};
use rodio::{OutputStream, Sink};
use std::time::Duration;

/// One-shot timer alarm on a detached thread. Playback problems are logged
/// and swallowed; the timer is never affected by a missing audio device.
pub fn play_alarm() {
    std::thread::spawn(|| {
        if let Err(err) = beep() {
            log::warn!("[audio] alarm playback failed: {err}");
        }
    });
}

fn beep() -> Result<(), String> {
    let (_stream, handle) =
        OutputStream::try_default().map_err(|e| format!("no output device: {e}"))?;
    let sink = Sink::try_new(&handle).map_err(|e| format!("could not open sink: {e}"))?;
    sink.append(
        SineWave::new(880.0)
            .take_duration(Duration::from_millis(350))
            .amplify(0.20),
    );
    sink.sleep_until_end();
    Ok(())
}
