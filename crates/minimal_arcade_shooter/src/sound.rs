use std::collections::HashMap;
use std::io::{BufReader, Cursor};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use log::{error, warn};
use rodio::{Decoder, OutputStream, Sink};

/// Logical sound identifiers.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SoundType {
    Shot,
}

/// Message sent from the game thread to the audio thread.
pub struct Message {
    pub sound_type: SoundType,
}

struct SoundThread {
    receiver: Receiver<Message>,
    sound_files: HashMap<SoundType, Vec<u8>>,
}

impl SoundThread {
    fn run(self) {
        // Keep the stream alive as long as the audio thread runs.
        let Ok((stream, stream_handle)) = OutputStream::try_default() else {
            error!("Failed to open default audio output stream, disabling audio");
            return;
        };
        let _stream = stream;

        while let Ok(msg) = self.receiver.recv() {
            let Some(bytes) = self.sound_files.get(&msg.sound_type) else {
                warn!("No audio data for sound {:?}", msg.sound_type);
                continue;
            };

            let reader = BufReader::new(Cursor::new(bytes.clone()));
            let source = match Decoder::new(reader) {
                Ok(source) => source,
                Err(e) => {
                    error!("Failed to decode sound {:?}: {e}", msg.sound_type);
                    continue;
                }
            };

            // One sink per trigger so overlapping shots all play out.
            match Sink::try_new(&stream_handle) {
                Ok(sink) => {
                    sink.append(source);
                    sink.detach();
                }
                Err(e) => error!("Failed to create audio sink: {e}"),
            }
        }
        log::debug!("Audio channel closed, stopping sound thread");
    }
}

/// Handle living on the game thread that forwards sound triggers to the
/// audio thread.
pub struct SoundManager {
    sender: Sender<Message>,
}

impl SoundManager {
    /// Start the audio thread with the given preloaded sound files.
    ///
    /// Returns `None` if the thread cannot be spawned; the game then runs
    /// silently. A missing output device is detected on the audio thread and
    /// likewise only disables sound.
    pub fn new(sound_files: HashMap<SoundType, Vec<u8>>) -> Option<Self> {
        let (sender, receiver) = mpsc::channel::<Message>();
        let sound_thread = SoundThread {
            receiver,
            sound_files,
        };

        if let Err(e) = thread::Builder::new()
            .name("minimal_arcade_sound".into())
            .spawn(move || sound_thread.run())
        {
            error!("Failed to spawn audio thread: {e}");
            return None;
        }

        Some(Self { sender })
    }

    /// Fire-and-forget playback.
    pub fn play(&self, sound_type: SoundType) {
        // If the audio thread has gone away we simply stop playing sounds.
        let _ = self.sender.send(Message { sound_type });
    }
}
