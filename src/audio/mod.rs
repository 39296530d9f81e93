//! Audio ingestion and WAV file I/O.

pub mod ingest;
pub mod wav;

pub use ingest::{IngestedAudio, WaveformHandle, ingest};
