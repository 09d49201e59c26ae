use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::{
    fmt, fs,
    io::Cursor,
    path::{Path, PathBuf},
};

/// Failure to bring up sound effect playback. All variants are fatal at
/// startup.
#[derive(Debug)]
pub enum SoundError {
    MissingAsset {
        path: PathBuf,
        source: std::io::Error,
    },
    UnreadableAsset {
        path: PathBuf,
        source: rodio::decoder::DecoderError,
    },
    NoOutputDevice(rodio::StreamError),
}

impl fmt::Display for SoundError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MissingAsset { path, source } => {
                write!(f, "missing sound asset {}: {}", path.display(), source)
            }
            Self::UnreadableAsset { path, source } => {
                write!(f, "could not decode sound asset {}: {}", path.display(), source)
            }
            Self::NoOutputDevice(source) => {
                write!(f, "could not open an audio output stream: {}", source)
            }
        }
    }
}

impl std::error::Error for SoundError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingAsset { source, .. } => Some(source),
            Self::UnreadableAsset { source, .. } => Some(source),
            Self::NoOutputDevice(source) => Some(source),
        }
    }
}

enum Output {
    Enabled {
        _stream: OutputStream,
        handle: OutputStreamHandle,
    },
    Disabled,
}

/// Loads the click sample once and plays it fire-and-forget. Overlapping
/// plays are left to the mixer.
pub struct SoundEffects {
    output: Output,
    click: Vec<u8>,
}

impl SoundEffects {
    /// Reads and decode-checks the sample up front so a bad asset fails the
    /// process at startup rather than on the first trigger. When muted, no
    /// output device is opened.
    pub fn new(path: &Path, mute: bool) -> Result<Self, SoundError> {
        let click = fs::read(path).map_err(|source| SoundError::MissingAsset {
            path: path.to_path_buf(),
            source,
        })?;
        Decoder::new(Cursor::new(click.clone())).map_err(|source| SoundError::UnreadableAsset {
            path: path.to_path_buf(),
            source,
        })?;
        let output = if mute {
            Output::Disabled
        } else {
            let (stream, handle) =
                OutputStream::try_default().map_err(SoundError::NoOutputDevice)?;
            Output::Enabled {
                _stream: stream,
                handle,
            }
        };
        Ok(Self { output, click })
    }

    /// An inert player whose `play_click` does nothing.
    pub fn disabled() -> Self {
        Self {
            output: Output::Disabled,
            click: Vec::new(),
        }
    }

    pub fn play_click(&self) {
        let Output::Enabled { handle, .. } = &self.output else {
            return;
        };
        let sink = match Sink::try_new(handle) {
            Ok(sink) => sink,
            Err(e) => {
                log::warn!("could not open a sink for the click sample: {}", e);
                return;
            }
        };
        // Decoding was validated at construction.
        let Ok(source) = Decoder::new(Cursor::new(self.click.clone())) else {
            return;
        };
        sink.append(source);
        sink.detach();
    }
}
