//! Default configuration constants for voxbridge.
//!
//! Shared constants used across configuration types and CLI defaults,
//! kept in one place to eliminate duplication.

/// Audio sample rate in Hz used for all intermediate waveforms.
///
/// 16kHz is the standard for speech recognition and is what the demo
/// corpus ships at.
pub const SAMPLE_RATE: u32 = 16000;

/// Fixed source language for the recognition and translation stages.
///
/// The pipeline always transcribes Mandarin Chinese; only the target
/// language varies.
pub const SOURCE_LANGUAGE: &str = "zh";

/// Default recognizer model size.
pub const DEFAULT_MODEL: &str = "tiny";

/// Default number of samples processed in a batch run.
pub const DEFAULT_NUM_EXAMPLES: usize = 5;

/// Default batch input directory.
pub const DEFAULT_IN_DIR: &str = "data/processed/asr/commonvoice_demo/wav16k";

/// Default batch output directory.
pub const DEFAULT_OUT_DIR: &str = "outputs";

/// Default reference transcript file for WER scoring.
pub const DEFAULT_REF_TRANS: &str = "data/raw/asr/commonvoice_demo/transcripts.txt";

/// Default accumulated audio duration for corpus extraction, in seconds.
///
/// 1800s = 30 minutes, enough for a demo-sized recognition corpus.
pub const DEFAULT_CORPUS_SECS: f64 = 1800.0;

/// Filename of the transcript index written by the corpus extractor.
pub const TRANSCRIPT_INDEX: &str = "transcripts.txt";
