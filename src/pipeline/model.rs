use crate::pipeline::traits::{ModelClient, ModelPart};
use anyhow::{Context, Result};
use async_openai::types::{
    ChatCompletionRequestMessageContentPartImageArgs,
    ChatCompletionRequestMessageContentPartTextArgs, ChatCompletionRequestUserMessageArgs,
    ChatCompletionRequestUserMessageContentPart, CreateChatCompletionRequestArgs, ImageUrlArgs,
};
use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

/// Long-lived model connection, constructed once at startup and injected into
/// the pipeline. Sends one user message whose content is the part list;
/// images travel as base64 data URLs.
pub struct OpenAiModelClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiModelClient {
    pub fn new(api_key: &str, model: &str) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        let client = Client::with_config(config);
        Self {
            client,
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl ModelClient for OpenAiModelClient {
    async fn generate(&self, parts: &[ModelPart]) -> Result<String> {
        let mut content: Vec<ChatCompletionRequestUserMessageContentPart> = Vec::new();
        for part in parts {
            match part {
                ModelPart::Text(text) => content.push(
                    ChatCompletionRequestMessageContentPartTextArgs::default()
                        .text(text.clone())
                        .build()?
                        .into(),
                ),
                ModelPart::Image { bytes, mime } => {
                    let data_url = format!("data:{};base64,{}", mime, BASE64.encode(bytes));
                    content.push(
                        ChatCompletionRequestMessageContentPartImageArgs::default()
                            .image_url(ImageUrlArgs::default().url(data_url).build()?)
                            .build()?
                            .into(),
                    );
                }
            }
        }

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([ChatCompletionRequestUserMessageArgs::default()
                .content(content)
                .build()?
                .into()])
            .build()?;

        let response = self.client.chat().create(request).await?;
        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .context("model response missing content")
    }
}
