//! Command-line interface for voxbridge
//!
//! Provides argument parsing using clap derive macros.

use crate::defaults;
use crate::lang::LanguageTarget;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Chinese speech to translated speech (ASR -> MT -> TTS)
#[derive(Parser, Debug)]
#[command(name = "voxbridge", version, about = "Chinese speech to translated speech")]
pub struct Cli {
    /// Subcommand to execute (default: batch run)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Input audio directory for the batch run
    #[arg(long, value_name = "DIR", default_value = defaults::DEFAULT_IN_DIR)]
    pub in_dir: PathBuf,

    /// Output audio directory for the batch run
    #[arg(long, value_name = "DIR", default_value = defaults::DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Recognizer model size (e.g. tiny, base, small)
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Target language code (en, fr, de)
    #[arg(long, value_name = "LANG", default_value = "en", value_parser = parse_language)]
    pub target_lang: LanguageTarget,

    /// Maximum number of samples to process
    #[arg(long, value_name = "N", default_value_t = defaults::DEFAULT_NUM_EXAMPLES)]
    pub num_ex: usize,

    /// Reference transcript file (`id|text` per line) for WER scoring
    #[arg(long, value_name = "PATH", default_value = defaults::DEFAULT_REF_TRANS)]
    pub ref_trans: PathBuf,
}

/// Parse a target language code, listing the supported set on failure.
fn parse_language(s: &str) -> Result<LanguageTarget, String> {
    s.parse::<LanguageTarget>().map_err(|_| {
        let supported: Vec<&str> = LanguageTarget::ALL.iter().map(|l| l.code()).collect();
        format!("'{}' (supported: {})", s, supported.join(", "))
    })
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate a single audio file and print both transcripts
    Translate {
        /// Input WAV file
        audio: PathBuf,

        /// Target language code (en, fr, de)
        #[arg(long, value_name = "LANG", default_value = "en", value_parser = parse_language)]
        target_lang: LanguageTarget,

        /// Output WAV path (default: next to the input, `<stem>_<lang>.wav`)
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,

        /// Recognizer model size override
        #[arg(long, value_name = "MODEL")]
        model: Option<String>,
    },

    /// Download a bounded-duration speech corpus subset
    ExtractCorpus {
        /// URL of the JSON clip manifest
        #[arg(long, value_name = "URL")]
        manifest: String,

        /// Directory receiving wav/ and transcripts.txt
        #[arg(long, value_name = "DIR", default_value = "data/raw/asr/commonvoice_demo")]
        out_dir: PathBuf,

        /// Target accumulated audio duration in seconds
        #[arg(long, value_name = "SECONDS", default_value_t = defaults::DEFAULT_CORPUS_SECS)]
        target_secs: f64,
    },

    /// List supported target languages
    Languages,
}
