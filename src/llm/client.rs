use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::openai::OpenAiClient;

/// One completion call: role-tagged prompt text plus sampling parameters.
pub struct CompletionRequest<'a> {
    pub system: &'a str,
    pub prompt: &'a str,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// A text-completion service: send role-tagged messages and sampling
/// parameters, receive generated text. The backend depends on this contract
/// only, not on any particular provider's transport details.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String>;
}

/// Build the completion client from runtime settings.
pub fn build_client(settings: &Settings) -> Result<Arc<dyn CompletionClient>> {
    Ok(Arc::new(OpenAiClient::from_settings(settings)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn client_requires_api_key() {
        let settings = Settings::default();

        let err = match build_client(&settings) {
            Ok(_) => panic!("expected client creation to fail"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("API key is missing"));
    }
}
