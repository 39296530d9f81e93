//! WAV read/write helpers.
//!
//! All intermediate waveforms are 16-bit PCM mono. Stereo input is
//! downmixed on read and more than two channels is an error; sample
//! rates are preserved as-is, with [`resample`] available for backends
//! that need a fixed rate.

use crate::error::{Result, VoxbridgeError};
use std::io::{Seek, Write};
use std::path::Path;

/// Read a WAV file as 16-bit mono samples plus its sample rate.
///
/// Stereo input is downmixed by channel averaging.
pub fn read_wav(path: &Path) -> Result<(Vec<i16>, u32)> {
    let mut reader = hound::WavReader::open(path).map_err(|e| VoxbridgeError::Audio {
        message: format!("Failed to parse WAV file {}: {}", path.display(), e),
    })?;

    let spec = reader.spec();
    let raw_samples: Vec<i16> = reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| VoxbridgeError::Audio {
            message: format!("Failed to read WAV samples from {}: {}", path.display(), e),
        })?;

    let samples = match spec.channels {
        1 => raw_samples,
        2 => raw_samples
            .chunks_exact(2)
            .map(|chunk| {
                let left = chunk[0] as i32;
                let right = chunk[1] as i32;
                ((left + right) / 2) as i16
            })
            .collect(),
        n => {
            return Err(VoxbridgeError::Audio {
                message: format!("Unsupported channel count {} in {}", n, path.display()),
            });
        }
    };

    Ok((samples, spec.sample_rate))
}

/// Simple linear interpolation resampling.
pub fn resample(samples: &[i16], from_rate: u32, to_rate: u32) -> Vec<i16> {
    if from_rate == to_rate {
        return samples.to_vec();
    }

    let ratio = from_rate as f64 / to_rate as f64;
    let output_len = (samples.len() as f64 / ratio).ceil() as usize;

    (0..output_len)
        .map(|i| {
            let source_pos = i as f64 * ratio;
            let source_idx = source_pos.floor() as usize;
            let fraction = source_pos - source_idx as f64;

            if source_idx + 1 >= samples.len() {
                samples[source_idx]
            } else {
                let left = samples[source_idx] as f64;
                let right = samples[source_idx + 1] as f64;
                (left + (right - left) * fraction) as i16
            }
        })
        .collect()
}

/// Duration in seconds of a WAV file, from its header.
pub fn wav_duration_secs(path: &Path) -> Result<f64> {
    let reader = hound::WavReader::open(path).map_err(|e| VoxbridgeError::Audio {
        message: format!("Failed to parse WAV file {}: {}", path.display(), e),
    })?;
    let spec = reader.spec();
    Ok(reader.duration() as f64 / spec.sample_rate as f64)
}

/// Write 16-bit mono samples to a WAV file at `path`.
///
/// The file is fully flushed and finalized before this returns, so the
/// path is safe to hand to a downstream reader.
pub fn write_wav(path: &Path, samples: &[i16], sample_rate: u32) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_wav_to(std::io::BufWriter::new(file), samples, sample_rate)
}

/// Write 16-bit mono samples to any seekable writer.
pub fn write_wav_to<W: Write + Seek>(writer: W, samples: &[i16], sample_rate: u32) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut wav_writer =
        hound::WavWriter::new(writer, spec).map_err(|e| VoxbridgeError::Audio {
            message: format!("Failed to create WAV writer: {}", e),
        })?;
    for &sample in samples {
        wav_writer
            .write_sample(sample)
            .map_err(|e| VoxbridgeError::Audio {
                message: format!("Failed to write WAV sample: {}", e),
            })?;
    }
    wav_writer.finalize().map_err(|e| VoxbridgeError::Audio {
        message: format!("Failed to finalize WAV file: {}", e),
    })?;
    Ok(())
}
