//! The recognition → translation → synthesis pipeline.
//!
//! A thin, strictly sequential orchestration of three injected services.
//! Any stage failure aborts the run and propagates; there are no retries
//! and no partial results. Each invocation owns its intermediate files:
//! ingest temp files are removed when the run ends, on every exit path.

use crate::audio::{WaveformHandle, ingest};
use crate::error::{Result, VoxbridgeError};
use crate::lang::LanguageTarget;
use crate::mt::Translator;
use crate::stt::SpeechRecognizer;
use crate::tts::SpeechSynthesizer;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The text pair produced by one pipeline run, immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptPair {
    /// Recognized source-language text, whitespace-trimmed.
    pub source_text: String,
    /// Translated target-language text.
    pub translated_text: String,
}

/// Full result of a pipeline run that allocated its own output file.
#[derive(Debug)]
pub struct PipelineOutput {
    pub transcript: TranscriptPair,
    /// Path of the synthesized waveform; the caller owns the file.
    pub audio_path: PathBuf,
}

/// Sequential ASR → MT → TTS pipeline over injected services.
pub struct Pipeline {
    recognizer: Arc<dyn SpeechRecognizer>,
    translator: Arc<dyn Translator>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
}

impl Pipeline {
    pub fn new(
        recognizer: Arc<dyn SpeechRecognizer>,
        translator: Arc<dyn Translator>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
    ) -> Self {
        Self {
            recognizer,
            translator,
            synthesizer,
        }
    }

    /// Run the pipeline, writing the synthesized waveform to `out_wav`.
    pub async fn run_to(
        &self,
        input: WaveformHandle,
        target: LanguageTarget,
        out_wav: &Path,
    ) -> Result<TranscriptPair> {
        // Ingest guard lives until the end of this call; temp input files
        // are deleted even when a later stage fails.
        let audio = ingest(input)?;

        let raw_text = self.recognizer.recognize(audio.path()).await?;
        let source_text = raw_text.trim().to_string();
        log::debug!("ASR ({}): {}", self.recognizer.model_name(), source_text);

        let translated_text = self.translator.translate(&source_text, target).await?;
        log::debug!("MT ({}): {}", target, translated_text);

        self.synthesizer
            .synthesize(&translated_text, target, out_wav)
            .await?;
        log::debug!("TTS -> {}", out_wav.display());

        Ok(TranscriptPair {
            source_text,
            translated_text,
        })
    }

    /// Run the pipeline into a freshly allocated output file.
    ///
    /// On success the output path is returned to the caller, who owns the
    /// file from then on; a failed run removes it.
    pub async fn run(
        &self,
        input: WaveformHandle,
        target: LanguageTarget,
    ) -> Result<PipelineOutput> {
        // The guard owns the output file until the run succeeds, so any
        // stage failure deletes it on drop.
        let out_path = tempfile::Builder::new()
            .prefix("voxbridge-out-")
            .suffix(".wav")
            .tempfile()
            .map_err(VoxbridgeError::Io)?
            .into_temp_path();

        let transcript = self.run_to(input, target, &out_path).await?;

        let audio_path = out_path
            .keep()
            .map_err(|e| VoxbridgeError::Other(format!("Failed to persist output file: {}", e)))?;
        Ok(PipelineOutput {
            transcript,
            audio_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::wav;
    use crate::mt::MockTranslator;
    use crate::stt::MockRecognizer;
    use crate::tts::MockSynthesizer;
    use std::sync::Mutex;

    // Serializes the tests that create or count voxbridge-out-* files in
    // the shared temp dir.
    static TEMP_OUT_LOCK: Mutex<()> = Mutex::new(());

    fn temp_out_files() -> Vec<PathBuf> {
        std::fs::read_dir(std::env::temp_dir())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.file_name()
                    .to_string_lossy()
                    .starts_with("voxbridge-out-")
            })
            .map(|e| e.path())
            .collect()
    }

    fn stub_pipeline(recognized: &str, translated: &str) -> Pipeline {
        Pipeline::new(
            Arc::new(MockRecognizer::new("stub").with_response(recognized)),
            Arc::new(MockTranslator::new().with_response(translated)),
            Arc::new(MockSynthesizer::new()),
        )
    }

    fn input_wav(dir: &Path) -> PathBuf {
        let path = dir.join("input.wav");
        wav::write_wav(&path, &vec![0i16; 1600], 16000).unwrap();
        path
    }

    #[tokio::test]
    async fn run_to_returns_trimmed_source_and_translated_text() {
        let dir = tempfile::tempdir().unwrap();
        let input = input_wav(dir.path());
        let out = dir.path().join("out.wav");

        let pipeline = stub_pipeline("  你好世界 \n", "hello world");
        let transcript = pipeline
            .run_to(
                WaveformHandle::File(input),
                LanguageTarget::English,
                &out,
            )
            .await
            .unwrap();

        assert_eq!(transcript.source_text, "你好世界");
        assert_eq!(transcript.translated_text, "hello world");
        assert!(out.exists());
        assert!(std::fs::metadata(&out).unwrap().len() > 0);
    }

    #[tokio::test]
    async fn run_allocates_existing_nonempty_output() {
        let _guard = TEMP_OUT_LOCK.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let input = input_wav(dir.path());

        let pipeline = stub_pipeline("источник", "quelle");
        let output = pipeline
            .run(WaveformHandle::File(input), LanguageTarget::German)
            .await
            .unwrap();

        assert!(output.audio_path.exists());
        assert!(std::fs::metadata(&output.audio_path).unwrap().len() > 0);
        std::fs::remove_file(&output.audio_path).unwrap();
    }

    #[tokio::test]
    async fn failed_run_removes_allocated_output_file() {
        let _guard = TEMP_OUT_LOCK.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let input = input_wav(dir.path());
        let before = temp_out_files();

        let pipeline = Pipeline::new(
            Arc::new(MockRecognizer::new("stub").with_failure()),
            Arc::new(MockTranslator::new()),
            Arc::new(MockSynthesizer::new()),
        );
        let result = pipeline
            .run(WaveformHandle::File(input), LanguageTarget::English)
            .await;
        assert!(matches!(result, Err(VoxbridgeError::Recognition { .. })));

        let leaked: Vec<_> = temp_out_files()
            .into_iter()
            .filter(|p| !before.contains(p))
            .collect();
        assert!(leaked.is_empty(), "orphaned output files: {leaked:?}");
    }

    #[tokio::test]
    async fn buffer_input_runs_through_the_ingest_path() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.wav");

        let pipeline = stub_pipeline("转写", "transcript");
        let transcript = pipeline
            .run_to(
                WaveformHandle::Samples {
                    sample_rate: 16000,
                    samples: vec![0i16; 160],
                },
                LanguageTarget::English,
                &out,
            )
            .await
            .unwrap();

        assert_eq!(transcript.source_text, "转写");
        assert!(out.exists());
    }

    #[tokio::test]
    async fn recognizer_failure_aborts_before_synthesis() {
        let dir = tempfile::tempdir().unwrap();
        let input = input_wav(dir.path());
        let out = dir.path().join("out.wav");

        let pipeline = Pipeline::new(
            Arc::new(MockRecognizer::new("stub").with_failure()),
            Arc::new(MockTranslator::new()),
            Arc::new(MockSynthesizer::new()),
        );
        let result = pipeline
            .run_to(WaveformHandle::File(input), LanguageTarget::English, &out)
            .await;

        assert!(matches!(result, Err(VoxbridgeError::Recognition { .. })));
        assert!(!out.exists(), "no partial output on failure");
    }

    #[tokio::test]
    async fn translator_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let input = input_wav(dir.path());
        let out = dir.path().join("out.wav");

        let pipeline = Pipeline::new(
            Arc::new(MockRecognizer::new("stub").with_response("text")),
            Arc::new(MockTranslator::new().with_failure()),
            Arc::new(MockSynthesizer::new()),
        );
        let result = pipeline
            .run_to(WaveformHandle::File(input), LanguageTarget::French, &out)
            .await;

        assert!(matches!(result, Err(VoxbridgeError::Translation { .. })));
    }
}
