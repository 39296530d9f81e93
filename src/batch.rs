//! Batch runner: one pipeline invocation per input waveform.
//!
//! Walks an input directory in filename order, processes up to a
//! configured number of files, writes each synthesis under a per-language
//! output directory, and scores recognized text against a reference index
//! when one is supplied. A failing file is logged and skipped; the batch
//! keeps going.

use crate::audio::WaveformHandle;
use crate::error::Result;
use crate::lang::LanguageTarget;
use crate::metrics::BatchResult;
use crate::pipeline::Pipeline;
use crate::reference::ReferenceIndex;
use std::path::{Path, PathBuf};

/// Options for one batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub target: LanguageTarget,
    /// Maximum number of files to process.
    pub num_examples: usize,
    /// Optional `id|text` reference transcript file for WER scoring.
    pub reference_file: Option<PathBuf>,
}

/// Summary of a completed batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Files processed successfully.
    pub processed: usize,
    /// Files that failed and were skipped.
    pub failed: usize,
    /// Output waveforms written, in processing order.
    pub outputs: Vec<PathBuf>,
    /// Aggregate WER over reference-matched files, when any matched.
    pub wer: Option<f64>,
}

/// List the `.wav` files in `dir`, sorted by filename for determinism.
fn list_wav_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"))
        })
        .collect();
    files.sort();
    Ok(files)
}

/// Run the pipeline over up to `num_examples` files from the input dir.
///
/// Output layout: `<output_dir>/<lang>/<identifier>_<lang>.wav` where the
/// identifier is the input filename without extension. Terminates when the
/// cap is reached or the directory is exhausted, whichever comes first.
pub async fn run_batch(pipeline: &Pipeline, options: &BatchOptions) -> Result<BatchSummary> {
    let reference = match &options.reference_file {
        Some(path) if path.exists() => {
            let index = ReferenceIndex::load(path)?;
            log::info!(
                "Loaded {} reference transcripts from {}",
                index.len(),
                path.display()
            );
            Some(index)
        }
        Some(path) => {
            log::warn!("Reference transcript file not found: {}", path.display());
            None
        }
        None => None,
    };

    let lang_dir = options.output_dir.join(options.target.code());
    std::fs::create_dir_all(&lang_dir)?;

    let wav_files = list_wav_files(&options.input_dir)?;
    let total = options.num_examples.min(wav_files.len());

    let mut summary = BatchSummary::default();
    let mut scores = BatchResult::new();

    for (i, wav_path) in wav_files.iter().take(total).enumerate() {
        let identifier = wav_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let out_wav = lang_dir.join(format!("{}_{}.wav", identifier, options.target.code()));

        log::info!(
            "[{}/{}] {} -> {}",
            i + 1,
            total,
            wav_path.display(),
            out_wav.display()
        );

        let transcript = match pipeline
            .run_to(
                WaveformHandle::File(wav_path.clone()),
                options.target,
                &out_wav,
            )
            .await
        {
            Ok(transcript) => transcript,
            Err(e) => {
                log::warn!("Skipping {}: {}", wav_path.display(), e);
                summary.failed += 1;
                continue;
            }
        };

        log::info!("  ASR: {}", transcript.source_text);
        log::info!("  MT ({}): {}", options.target, transcript.translated_text);

        if let Some(index) = &reference
            && let Some(reference_text) = index.get(&identifier)
        {
            scores.push(reference_text, &transcript.source_text);
        }

        summary.processed += 1;
        summary.outputs.push(out_wav);
    }

    if !scores.is_empty() {
        summary.wer = scores.wer();
        if let Some(wer) = summary.wer {
            log::info!("WER (ASR only) over {} pairs: {:.2}", scores.len(), wer);
        }
    }

    Ok(summary)
}
