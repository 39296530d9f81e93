//! Audio ingestion: normalize any input into an on-disk waveform path.
//!
//! The recognition stage only consumes files, so in-memory buffers are
//! spilled to a temp WAV first. Temp files are owned by the returned
//! [`IngestedAudio`] and deleted when it is dropped, on success and error
//! paths alike.

use crate::audio::wav;
use crate::error::{Result, VoxbridgeError};
use std::path::{Path, PathBuf};
use tempfile::TempPath;

/// A reference to an audio resource, exactly one representation at a time.
#[derive(Debug, Clone)]
pub enum WaveformHandle {
    /// Raw 16-bit mono samples with their sample rate.
    Samples { sample_rate: u32, samples: Vec<i16> },
    /// A path to an existing waveform file.
    File(PathBuf),
}

impl WaveformHandle {
    /// Convenience constructor for file-backed input.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        WaveformHandle::File(path.into())
    }
}

/// A normalized, file-backed audio input.
///
/// Holds the temp-file guard when the input was a buffer; dropping this
/// value removes the temp file.
#[derive(Debug)]
pub struct IngestedAudio {
    path: PathBuf,
    _temp: Option<TempPath>,
}

impl IngestedAudio {
    /// Path to the waveform file, valid for the lifetime of `self`.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Normalize `handle` into a waveform file on local storage.
///
/// Buffers are written to a freshly allocated temp WAV (fully finalized
/// before the path is handed out); existing paths pass through without
/// re-encoding.
pub fn ingest(handle: WaveformHandle) -> Result<IngestedAudio> {
    match handle {
        WaveformHandle::File(path) => Ok(IngestedAudio { path, _temp: None }),
        WaveformHandle::Samples {
            sample_rate,
            samples,
        } => {
            let file = tempfile::Builder::new()
                .prefix("voxbridge-ingest-")
                .suffix(".wav")
                .tempfile()
                .map_err(VoxbridgeError::Io)?;
            wav::write_wav_to(file.as_file(), &samples, sample_rate)?;
            let temp_path = file.into_temp_path();
            Ok(IngestedAudio {
                path: temp_path.to_path_buf(),
                _temp: Some(temp_path),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_handle_passes_through_unchanged() {
        let handle = WaveformHandle::from_path("/data/clips/0001.wav");
        let ingested = ingest(handle).unwrap();
        assert_eq!(ingested.path(), Path::new("/data/clips/0001.wav"));
    }

    #[test]
    fn buffer_round_trips_through_temp_file() {
        let samples: Vec<i16> = (0..3200).map(|i| ((i * 13) % 251) as i16).collect();
        let handle = WaveformHandle::Samples {
            sample_rate: 16000,
            samples: samples.clone(),
        };

        let ingested = ingest(handle).unwrap();
        assert!(ingested.path().exists());

        let (read_back, rate) = wav::read_wav(ingested.path()).unwrap();
        assert_eq!(rate, 16000);
        assert_eq!(read_back, samples);
    }

    #[test]
    fn temp_file_is_removed_on_drop() {
        let handle = WaveformHandle::Samples {
            sample_rate: 16000,
            samples: vec![0i16; 160],
        };
        let ingested = ingest(handle).unwrap();
        let path = ingested.path().to_path_buf();
        assert!(path.exists());

        drop(ingested);
        assert!(!path.exists());
    }

    #[test]
    fn passthrough_does_not_delete_caller_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keep.wav");
        wav::write_wav(&path, &[1, 2, 3], 16000).unwrap();

        let ingested = ingest(WaveformHandle::File(path.clone())).unwrap();
        drop(ingested);
        assert!(path.exists());
    }
}
