//! Interview assistant: the completion gateway behind both API operations.
//!
//! Formats the transcript, builds the task prompt, and relays the completion
//! service's text. Holds no per-request state; the client handle is created
//! once at startup and shared read-only.

use std::sync::Arc;

use tracing::warn;

use crate::config::Settings;
use crate::llm::{self, prompts, CompletionClient, CompletionRequest};
use crate::transcript::{format_transcript, TranscriptEntry};
use crate::FieldnotesError;

// Analysis wants short, focused suggestions.
const ANALYSIS_TEMPERATURE: f32 = 0.5;
const ANALYSIS_MAX_TOKENS: u32 = 150;

// Summaries run longer and should stay close to the transcript.
const SUMMARY_TEMPERATURE: f32 = 0.3;
const SUMMARY_MAX_TOKENS: u32 = 500;

/// Result of an analysis request.
#[derive(Debug, PartialEq)]
pub enum AnalysisOutcome {
    /// Transcript was empty; the completion service was not called.
    Skipped,
    /// Trimmed suggestion text from the completion service.
    Suggestions(String),
}

/// The gateway both HTTP operations go through.
pub struct Assistant {
    client: Option<Arc<dyn CompletionClient>>,
}

impl Assistant {
    /// Build the assistant from settings. A missing API key leaves the
    /// client unset; both operations then report a configuration error
    /// instead of calling out.
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        if settings.llm.api_key.trim().is_empty() {
            warn!("OPENAI_API_KEY is not set; analysis and summary requests will be rejected");
            return Ok(Self { client: None });
        }

        let client = llm::build_client(settings)?;
        Ok(Self {
            client: Some(client),
        })
    }

    /// Build an assistant around an existing completion client.
    pub fn with_client(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Build an assistant with no completion client configured.
    pub fn unconfigured() -> Self {
        Self { client: None }
    }

    /// Suggest 1-2 follow-up questions or emerging themes for the interview
    /// so far. An empty transcript is not an error: the operation is skipped
    /// without touching the completion service.
    pub async fn analyze(
        &self,
        context: &str,
        transcript: &[TranscriptEntry],
    ) -> crate::Result<AnalysisOutcome> {
        let client = self.client()?;

        if transcript.is_empty() {
            return Ok(AnalysisOutcome::Skipped);
        }

        let formatted = format_transcript(transcript);
        let prompt = prompts::build_analysis_prompt(context, &formatted);

        let text = client
            .complete(CompletionRequest {
                system: prompts::ANALYSIS_SYSTEM_PROMPT,
                prompt: &prompt,
                temperature: ANALYSIS_TEMPERATURE,
                max_tokens: ANALYSIS_MAX_TOKENS,
            })
            .await
            .map_err(|e| FieldnotesError::Upstream(format!("{e:#}")))?;

        Ok(AnalysisOutcome::Suggestions(text.trim().to_string()))
    }

    /// Summarize the full interview as bold-titled key points. An empty
    /// transcript is an input error here.
    pub async fn summarize(
        &self,
        context: &str,
        transcript: &[TranscriptEntry],
    ) -> crate::Result<String> {
        let client = self.client()?;

        if transcript.is_empty() {
            return Err(FieldnotesError::EmptyTranscript);
        }

        let formatted = format_transcript(transcript);
        let prompt = prompts::build_summary_prompt(context, &formatted);

        let text = client
            .complete(CompletionRequest {
                system: prompts::SUMMARY_SYSTEM_PROMPT,
                prompt: &prompt,
                temperature: SUMMARY_TEMPERATURE,
                max_tokens: SUMMARY_MAX_TOKENS,
            })
            .await
            .map_err(|e| FieldnotesError::Upstream(format!("{e:#}")))?;

        Ok(text.trim().to_string())
    }

    fn client(&self) -> crate::Result<&Arc<dyn CompletionClient>> {
        self.client
            .as_ref()
            .ok_or(FieldnotesError::ClientNotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use anyhow::Result;
    use async_trait::async_trait;

    #[derive(Default)]
    struct StubClient {
        reply: String,
        fail_with: Option<String>,
        calls: AtomicUsize,
        last_system: Mutex<Option<String>>,
        last_prompt: Mutex<Option<String>>,
    }

    impl StubClient {
        fn replying(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                ..Default::default()
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                fail_with: Some(message.to_string()),
                ..Default::default()
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn last_prompt(&self) -> String {
            self.last_prompt
                .lock()
                .expect("lock last prompt")
                .clone()
                .expect("a prompt was sent")
        }

        fn last_system(&self) -> String {
            self.last_system
                .lock()
                .expect("lock last system")
                .clone()
                .expect("a system message was sent")
        }
    }

    #[async_trait]
    impl CompletionClient for StubClient {
        async fn complete(&self, request: CompletionRequest<'_>) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_system.lock().expect("lock last system") =
                Some(request.system.to_string());
            *self.last_prompt.lock().expect("lock last prompt") =
                Some(request.prompt.to_string());

            match &self.fail_with {
                Some(message) => Err(anyhow::anyhow!("{message}")),
                None => Ok(self.reply.clone()),
            }
        }
    }

    fn entry(speaker: &str, text: &str, timestamp: &str) -> TranscriptEntry {
        TranscriptEntry {
            speaker: speaker.to_string(),
            text: text.to_string(),
            timestamp: timestamp.to_string(),
        }
    }

    #[tokio::test]
    async fn analyze_skips_empty_transcript_without_calling_service() {
        let stub = Arc::new(StubClient::replying("unused"));
        let assistant = Assistant::with_client(stub.clone());

        let outcome = assistant.analyze("ctx", &[]).await.expect("analyze");

        assert_eq!(outcome, AnalysisOutcome::Skipped);
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn analyze_relays_trimmed_suggestions() {
        let stub = Arc::new(StubClient::replying("  X \n"));
        let assistant = Assistant::with_client(stub.clone());
        let transcript = vec![entry("interviewer", "Tell me more", "00:01")];

        let outcome = assistant
            .analyze("usability test", &transcript)
            .await
            .expect("analyze");

        assert_eq!(outcome, AnalysisOutcome::Suggestions("X".to_string()));
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn analyze_embeds_formatted_transcript_and_context_in_prompt() {
        let stub = Arc::new(StubClient::replying("ok"));
        let assistant = Assistant::with_client(stub.clone());
        let transcript = vec![entry("interviewer", "Tell me more", "00:01")];

        assistant
            .analyze("usability test", &transcript)
            .await
            .expect("analyze");

        let prompt = stub.last_prompt();
        assert!(prompt.contains("[00:01] INTERVIEWER: Tell me more"));
        assert!(prompt.contains("usability test"));
        assert_eq!(stub.last_system(), prompts::ANALYSIS_SYSTEM_PROMPT);
    }

    #[tokio::test]
    async fn summarize_rejects_empty_transcript_without_calling_service() {
        let stub = Arc::new(StubClient::replying("unused"));
        let assistant = Assistant::with_client(stub.clone());

        let err = assistant
            .summarize("ctx", &[])
            .await
            .expect_err("summarize should fail");

        assert!(matches!(err, FieldnotesError::EmptyTranscript));
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn summarize_relays_trimmed_summary() {
        let stub = Arc::new(StubClient::replying("  X "));
        let assistant = Assistant::with_client(stub.clone());
        let transcript = vec![entry("participant", "The export was slow", "00:04")];

        let summary = assistant
            .summarize("perf study", &transcript)
            .await
            .expect("summarize");

        assert_eq!(summary, "X");
        assert_eq!(stub.last_system(), prompts::SUMMARY_SYSTEM_PROMPT);
        assert!(stub.last_prompt().contains("[00:04] PARTICIPANT: The export was slow"));
    }

    #[tokio::test]
    async fn from_settings_without_key_rejects_requests() {
        // Settings::default() never reads the environment, so the key is empty.
        let assistant = Assistant::from_settings(&Settings::default()).expect("build assistant");
        let transcript = vec![entry("interviewer", "Hello", "00:00")];

        let err = assistant
            .analyze("ctx", &transcript)
            .await
            .expect_err("analyze should fail");

        assert!(matches!(err, FieldnotesError::ClientNotConfigured));
    }

    #[tokio::test]
    async fn unconfigured_assistant_reports_configuration_error() {
        let assistant = Assistant::unconfigured();
        let transcript = vec![entry("interviewer", "Hello", "00:00")];

        let analyze_err = assistant
            .analyze("ctx", &transcript)
            .await
            .expect_err("analyze should fail");
        let summarize_err = assistant
            .summarize("ctx", &transcript)
            .await
            .expect_err("summarize should fail");

        assert!(matches!(analyze_err, FieldnotesError::ClientNotConfigured));
        assert!(matches!(summarize_err, FieldnotesError::ClientNotConfigured));
    }

    #[tokio::test]
    async fn upstream_failure_carries_error_text() {
        let stub = Arc::new(StubClient::failing("connection reset"));
        let assistant = Assistant::with_client(stub.clone());
        let transcript = vec![entry("interviewer", "Hello", "00:00")];

        let err = assistant
            .analyze("ctx", &transcript)
            .await
            .expect_err("analyze should fail");

        match err {
            FieldnotesError::Upstream(message) => {
                assert!(message.contains("connection reset"));
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
        assert_eq!(stub.call_count(), 1);
    }
}
