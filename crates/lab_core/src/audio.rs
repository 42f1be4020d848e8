// crates/lab_core/src/audio.rs

use crossbeam_channel::{unbounded, Receiver, Sender};
use lab_shared::{AudioSink, SoundEvent};
use tracing::trace;

/// Collects sound triggers from the simulation; the host drains them
/// between steps. Sending never blocks and never fails the caller.
pub struct AudioQueue {
    tx: Sender<SoundEvent>,
    rx: Receiver<SoundEvent>,
}

impl Default for AudioQueue {
    fn default() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }
}

impl AudioQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&self) -> Vec<SoundEvent> {
        self.rx.try_iter().collect()
    }
}

impl AudioSink for AudioQueue {
    fn play(&mut self, event: SoundEvent) {
        if self.tx.send(event).is_err() {
            trace!(?event, "Audio queue closed, sound dropped");
        }
    }
}
