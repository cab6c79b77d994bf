//! OpenAI-compatible chat-completion client
//!
//! One request per call: no retry, no streaming.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::LlmConfig;
use crate::error::{Error, Result};

use super::llm::LlmProvider;

/// Client for `POST {base_url}/chat/completions`
pub struct ChatCompletionClient {
    /// HTTP client
    client: Client,
    /// Configuration
    config: LlmConfig,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    /// Some gateways report failures in a 200 body
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

impl ChatCompletionClient {
    /// Create a new client from config
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(2)
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl LlmProvider for ChatCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| Error::llm("No API key configured (set OPENROUTER_API_KEY)"))?;

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        tracing::debug!(
            "Sending {} char prompt to {} ({})",
            prompt.chars().count(),
            self.config.model,
            self.config.base_url
        );

        let response = self
            .client
            .post(self.endpoint("chat/completions"))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::llm(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::llm(format!("HTTP {} - {}", status, body)));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::llm(format!("Failed to parse completion response: {}", e)))?;

        if let Some(err) = parsed.error {
            return Err(Error::llm(err.message));
        }

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| Error::llm("Completion response contained no message content"))
    }

    async fn health_check(&self) -> Result<bool> {
        match self.client.get(self.endpoint("models")).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    fn name(&self) -> &str {
        "openai-compatible"
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::State,
        http::{HeaderMap, StatusCode},
        routing::{get, post},
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured {
        body: Arc<Mutex<Option<Value>>>,
        auth: Arc<Mutex<Option<String>>>,
    }

    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn config_for(base_url: String) -> LlmConfig {
        LlmConfig {
            base_url,
            api_key: Some("sk-test".to_string()),
            timeout_secs: 5,
            ..LlmConfig::default()
        }
    }

    async fn answering_stub(answer: &'static str) -> (String, Captured) {
        let captured = Captured::default();
        let router = Router::new()
            .route(
                "/chat/completions",
                post(
                    move |State(captured): State<Captured>,
                          headers: HeaderMap,
                          Json(body): Json<Value>| async move {
                        *captured.auth.lock().unwrap() = headers
                            .get("authorization")
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string);
                        *captured.body.lock().unwrap() = Some(body);
                        Json(json!({
                            "choices": [{"message": {"role": "assistant", "content": answer}}]
                        }))
                    },
                ),
            )
            .route("/models", get(|| async { Json(json!({"data": []})) }))
            .with_state(captured.clone());

        (spawn_stub(router).await, captured)
    }

    #[tokio::test]
    async fn test_complete_sends_wire_format() {
        let (base_url, captured) = answering_stub("Paris").await;
        let client = ChatCompletionClient::new(&config_for(base_url)).unwrap();

        let answer = client.complete("What is the capital?").await.unwrap();
        assert_eq!(answer, "Paris");

        let body = captured.body.lock().unwrap().clone().unwrap();
        assert_eq!(body["model"], "openai/gpt-oss-20b");
        assert_eq!(body["max_tokens"], 1000);
        assert_eq!(body["temperature"], 0.0);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "What is the capital?");
        assert_eq!(body["messages"].as_array().unwrap().len(), 1);

        let auth = captured.auth.lock().unwrap().clone();
        assert_eq!(auth.as_deref(), Some("Bearer sk-test"));
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url() {
        let (base_url, _captured) = answering_stub("ok").await;
        let client = ChatCompletionClient::new(&config_for(format!("{}/", base_url))).unwrap();
        assert_eq!(client.complete("hi").await.unwrap(), "ok");
    }

    #[tokio::test]
    async fn test_http_error_status_is_llm_error() {
        let router = Router::new().route(
            "/chat/completions",
            post(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({"error": {"message": "No auth credentials found"}})),
                )
            }),
        );
        let base_url = spawn_stub(router).await;
        let client = ChatCompletionClient::new(&config_for(base_url)).unwrap();

        let err = client.complete("q").await.unwrap_err();
        match err {
            Error::Llm(msg) => {
                assert!(msg.contains("401"));
                assert!(msg.contains("No auth credentials found"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_choices_is_llm_error() {
        let router = Router::new().route(
            "/chat/completions",
            post(|| async { Json(json!({"choices": []})) }),
        );
        let base_url = spawn_stub(router).await;
        let client = ChatCompletionClient::new(&config_for(base_url)).unwrap();

        assert!(matches!(client.complete("q").await, Err(Error::Llm(_))));
    }

    #[tokio::test]
    async fn test_error_body_with_ok_status_is_llm_error() {
        let router = Router::new().route(
            "/chat/completions",
            post(|| async { Json(json!({"error": {"message": "Rate limit exceeded"}})) }),
        );
        let base_url = spawn_stub(router).await;
        let client = ChatCompletionClient::new(&config_for(base_url)).unwrap();

        let err = client.complete("q").await.unwrap_err();
        assert!(err.to_string().contains("Rate limit exceeded"));
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_request() {
        let mut config = config_for("http://127.0.0.1:9".to_string());
        config.api_key = None;
        let client = ChatCompletionClient::new(&config).unwrap();

        let err = client.complete("q").await.unwrap_err();
        assert!(err.to_string().contains("OPENROUTER_API_KEY"));
    }

    #[tokio::test]
    async fn test_health_check() {
        let (base_url, _captured) = answering_stub("ok").await;
        let client = ChatCompletionClient::new(&config_for(base_url)).unwrap();
        assert!(client.health_check().await.unwrap());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let closed = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        let client = ChatCompletionClient::new(&config_for(closed)).unwrap();
        assert!(!client.health_check().await.unwrap());
    }
}
