//! Corpus extractor: materialize a bounded-duration speech subset.
//!
//! Standalone data-prep utility, independent of the serving pipeline.
//! Streams clips listed in a remote JSON manifest until the accumulated
//! audio duration reaches a threshold, writing indexed waveforms plus a
//! `transcripts.txt` index of `<index>|<normalized transcript>` lines.
//! Re-running truncates the index and overwrites clips; there is no
//! resume support.

use crate::audio::wav;
use crate::defaults;
use crate::error::{Result, VoxbridgeError};
use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// One record in the corpus manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestEntry {
    /// Download URL of the clip (WAV).
    pub url: String,
    /// Spoken sentence.
    pub sentence: String,
}

/// Options for one extraction run.
#[derive(Debug, Clone)]
pub struct CorpusOptions {
    /// URL of a JSON array of [`ManifestEntry`] records.
    pub manifest_url: String,
    /// Directory receiving `wav/` and the transcript index.
    pub out_dir: PathBuf,
    /// Stop once this much audio has been accumulated.
    pub target_secs: f64,
    /// Show a progress bar.
    pub progress: bool,
}

/// Summary of a completed extraction.
#[derive(Debug)]
pub struct CorpusSummary {
    pub clips: usize,
    pub total_secs: f64,
}

/// Trim and lowercase a transcript for the index file.
fn normalize_transcript(sentence: &str) -> String {
    sentence.trim().to_lowercase()
}

async fn fetch_manifest(client: &reqwest::Client, url: &str) -> Result<Vec<ManifestEntry>> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| VoxbridgeError::Download {
            message: format!("Failed to fetch manifest {}: {}", url, e),
        })?;

    if !response.status().is_success() {
        return Err(VoxbridgeError::Download {
            message: format!("Manifest fetch returned {}", response.status()),
        });
    }

    response
        .json::<Vec<ManifestEntry>>()
        .await
        .map_err(|e| VoxbridgeError::Download {
            message: format!("Failed to parse manifest: {}", e),
        })
}

/// Stream one clip to `path`.
async fn download_clip(client: &reqwest::Client, url: &str, path: &Path) -> Result<()> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| VoxbridgeError::Download {
            message: format!("Failed to start download of {}: {}", url, e),
        })?;

    if !response.status().is_success() {
        return Err(VoxbridgeError::Download {
            message: format!("Clip download of {} returned {}", url, response.status()),
        });
    }

    let mut stream = response.bytes_stream();
    let mut file = std::fs::File::create(path)?;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| VoxbridgeError::Download {
            message: format!("Failed to read download chunk: {}", e),
        })?;
        file.write_all(&chunk)?;
    }
    file.sync_all()?;
    Ok(())
}

/// Run the extraction until the duration threshold is met or the manifest
/// is exhausted, whichever comes first.
pub async fn extract_corpus(options: &CorpusOptions) -> Result<CorpusSummary> {
    let client = reqwest::Client::new();
    let manifest = fetch_manifest(&client, &options.manifest_url).await?;
    log::info!(
        "Manifest lists {} clips; extracting up to {:.0}s of audio",
        manifest.len(),
        options.target_secs
    );

    let wav_dir = options.out_dir.join("wav");
    std::fs::create_dir_all(&wav_dir)?;

    // Truncate on re-run so repeated extractions never append duplicates
    let index_path = options.out_dir.join(defaults::TRANSCRIPT_INDEX);
    let mut index = std::fs::File::create(&index_path)?;

    let pb = if options.progress {
        let pb = ProgressBar::new(options.target_secs.ceil() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}s/{len}s ({eta})")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        Some(pb)
    } else {
        None
    };

    let mut total_secs = 0.0f64;
    let mut clips = 0usize;

    for (i, entry) in manifest.iter().enumerate() {
        let clip_path = wav_dir.join(format!("{:04}.wav", i));
        download_clip(&client, &entry.url, &clip_path).await?;

        let duration = wav::wav_duration_secs(&clip_path)?;
        writeln!(index, "{:04}|{}", i, normalize_transcript(&entry.sentence))?;

        total_secs += duration;
        clips += 1;

        if let Some(pb) = &pb {
            pb.set_position(total_secs.min(options.target_secs) as u64);
        }

        if total_secs >= options.target_secs {
            break;
        }
    }

    index.sync_all()?;
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    log::info!(
        "Extracted {} clips, {:.2} minutes of audio",
        clips,
        total_secs / 60.0
    );
    Ok(CorpusSummary { clips, total_secs })
}
