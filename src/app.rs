//! Application entry points: build services from config and run commands.
//!
//! This is the composition root. Model services are constructed once per
//! process, wrapped in `Arc`, and injected into the pipeline; nothing
//! else in the crate touches backend selection.

use crate::audio::WaveformHandle;
use crate::batch::{BatchOptions, run_batch};
use crate::config::{Config, SttBackend};
use crate::corpus::{CorpusOptions, extract_corpus};
use crate::error::Result;
use crate::lang::LanguageTarget;
use crate::mt::{HttpTranslator, Translator};
use crate::pipeline::Pipeline;
use crate::stt::{HttpRecognizer, SpeechRecognizer, WhisperConfig, WhisperRecognizer};
use crate::tts::{HttpSynthesizer, SpeechSynthesizer};
use std::path::PathBuf;
use std::sync::Arc;

/// Build the pipeline from configuration, applying the CLI model override.
pub fn build_pipeline(config: &Config, model_override: Option<&str>) -> Result<Pipeline> {
    let model = model_override.unwrap_or(&config.stt.model);

    let recognizer: Arc<dyn SpeechRecognizer> = match config.stt.backend {
        SttBackend::Http => Arc::new(HttpRecognizer::new(
            &config.stt.endpoint,
            model,
            &config.stt.language,
        )),
        SttBackend::Whisper => {
            let whisper_config = WhisperConfig {
                model_path: config.stt.model_dir.join(format!("ggml-{}.bin", model)),
                language: config.stt.language.clone(),
            };
            Arc::new(WhisperRecognizer::new(whisper_config)?)
        }
    };
    log::info!("Recognizer ready: {}", recognizer.model_name());

    let translator: Arc<dyn Translator> =
        Arc::new(HttpTranslator::new(&config.mt.endpoint, &config.mt.source_lang));
    let synthesizer: Arc<dyn SpeechSynthesizer> =
        Arc::new(HttpSynthesizer::new(&config.tts.endpoint));

    Ok(Pipeline::new(recognizer, translator, synthesizer))
}

/// Run the batch command over an input directory.
#[allow(clippy::too_many_arguments)]
pub async fn run_batch_command(
    config: Config,
    in_dir: PathBuf,
    out_dir: PathBuf,
    model: Option<String>,
    target: LanguageTarget,
    num_ex: usize,
    ref_trans: PathBuf,
) -> Result<()> {
    let pipeline = build_pipeline(&config, model.as_deref())?;

    let options = BatchOptions {
        input_dir: in_dir,
        output_dir: out_dir,
        target,
        num_examples: num_ex,
        reference_file: Some(ref_trans),
    };

    let summary = run_batch(&pipeline, &options).await?;
    log::info!(
        "Batch finished: {} processed, {} failed",
        summary.processed,
        summary.failed
    );
    Ok(())
}

/// Run the pipeline over a single file and print the transcripts.
pub async fn run_translate_command(
    config: Config,
    audio: PathBuf,
    target: LanguageTarget,
    out: Option<PathBuf>,
    model: Option<String>,
) -> Result<()> {
    let pipeline = build_pipeline(&config, model.as_deref())?;

    let out_wav = out.unwrap_or_else(|| {
        let stem = audio
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "out".to_string());
        audio.with_file_name(format!("{}_{}.wav", stem, target.code()))
    });

    let transcript = pipeline
        .run_to(WaveformHandle::File(audio), target, &out_wav)
        .await?;

    println!("ASR ({}): {}", crate::defaults::SOURCE_LANGUAGE, transcript.source_text);
    println!("MT ({}): {}", target.code(), transcript.translated_text);
    println!("TTS -> {}", out_wav.display());
    Ok(())
}

/// Run the corpus extraction command.
pub async fn run_extract_corpus_command(
    manifest: String,
    out_dir: PathBuf,
    target_secs: f64,
) -> Result<()> {
    let options = CorpusOptions {
        manifest_url: manifest,
        out_dir,
        target_secs,
        progress: true,
    };
    let summary = extract_corpus(&options).await?;
    println!(
        "Extracted {} clips ({:.2} minutes)",
        summary.clips,
        summary.total_secs / 60.0
    );
    Ok(())
}

/// Print the supported target languages.
pub fn run_languages_command() {
    println!("Supported target languages:");
    for lang in LanguageTarget::ALL {
        println!("  {}  {}  ({})", lang.code(), lang.label(), lang.synthesis_model());
    }
}
