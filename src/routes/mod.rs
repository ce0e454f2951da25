//! HTTP routes
//!
//! Dispatch, first match wins:
//! 1. `/globals.css` serves the bundled stylesheet or the embedded fallback
//! 2. `/api/...` goes to the chat-completions proxy, anything unknown is 404
//! 3. every other path renders the page shell

use std::any::Any;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Json, Response},
    routing::{any, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tower_http::catch_panic::CatchPanicLayer;

use crate::assets::FALLBACK_CSS;
use crate::chat::CompletionResponse;
use crate::conversation::ChatMessage;
use crate::providers::ProviderError;
use crate::render::render_document;
use crate::AppState;

pub const HTML_CONTENT_TYPE: &str = "text/html;charset=UTF-8";
pub const CSS_CONTENT_TYPE: &str = "text/css";

/// Failures of the completions proxy. All of them surface to the caller as
/// the same generic JSON 500.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("Inference failed: {0}")]
    Provider(#[from] ProviderError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("API Error: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Internal Server Error" })),
        )
            .into_response()
    }
}

#[derive(Debug, Deserialize)]
struct ProxyRequest {
    #[serde(default)]
    messages: Option<Vec<ChatMessage>>,
}

async fn stylesheet(State(state): State<AppState>, uri: Uri) -> Response {
    if let Some(assets) = &state.assets {
        match assets.fetch(uri.path()).await {
            Ok(Some(asset)) => {
                return ([(header::CONTENT_TYPE, asset.content_type)], asset.body).into_response();
            }
            Ok(None) => tracing::warn!("Stylesheet missing from assets, serving fallback CSS"),
            Err(e) => tracing::warn!("Assets not available ({}), serving fallback CSS", e),
        }
    }

    ([(header::CONTENT_TYPE, CSS_CONTENT_TYPE)], FALLBACK_CSS).into_response()
}

async fn completions(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CompletionResponse>, ApiError> {
    let request: ProxyRequest = serde_json::from_slice(&body)?;
    let messages = request.messages.unwrap_or_default();

    tracing::debug!(count = messages.len(), model = %state.config.model, "Forwarding chat completion");

    let reply = state.inference.run(&state.config.model, &messages).await?;

    Ok(Json(CompletionResponse::assistant(reply)))
}

async fn api_not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

async fn page(uri: Uri) -> Response {
    let html = render_document(uri.path());
    ([(header::CONTENT_TYPE, HTML_CONTENT_TYPE)], html).into_response()
}

/// A handler that panics (e.g. while rendering) still answers with a plain 500
fn internal_error(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_default();
    tracing::error!("SSR Error: {}", details);
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/globals.css", any(stylesheet))
        .route(
            "/api/chat/completions",
            // Transcripts are resent whole on every turn and have no size cap.
            post(completions)
                .fallback(api_not_found)
                .layer(DefaultBodyLimit::disable()),
        )
        .route("/api/", any(api_not_found))
        .route("/api/*rest", any(api_not_found))
        .fallback(page)
        .layer(CatchPanicLayer::custom(internal_error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::assets::{Asset, AssetError, AssetStore};
    use crate::chat::{ChatSession, HttpCompletionsClient, ERROR_REPLY};
    use crate::config::{Config, DEFAULT_MODEL};
    use crate::conversation::Role;
    use crate::providers::Inference;

    /// Replies with the last message's content and remembers what it was sent
    #[derive(Default)]
    struct EchoInference {
        calls: Mutex<Vec<(String, Vec<ChatMessage>)>>,
    }

    #[async_trait]
    impl Inference for EchoInference {
        async fn run(
            &self,
            model: &str,
            messages: &[ChatMessage],
        ) -> Result<Option<String>, ProviderError> {
            self.calls
                .lock()
                .unwrap()
                .push((model.to_string(), messages.to_vec()));
            Ok(messages.last().map(|m| format!("echo: {}", m.content)))
        }
    }

    struct FailingInference;

    #[async_trait]
    impl Inference for FailingInference {
        async fn run(&self, _: &str, _: &[ChatMessage]) -> Result<Option<String>, ProviderError> {
            Err(ProviderError::InvalidResponse("upstream down".into()))
        }
    }

    struct BrokenAssets;

    #[async_trait]
    impl AssetStore for BrokenAssets {
        async fn fetch(&self, _: &str) -> Result<Option<Asset>, AssetError> {
            Err(AssetError::Io(std::io::Error::other("disk gone")))
        }
    }

    struct EmptyAssets;

    #[async_trait]
    impl AssetStore for EmptyAssets {
        async fn fetch(&self, _: &str) -> Result<Option<Asset>, AssetError> {
            Ok(None)
        }
    }

    struct BundledAssets;

    #[async_trait]
    impl AssetStore for BundledAssets {
        async fn fetch(&self, path: &str) -> Result<Option<Asset>, AssetError> {
            assert_eq!(path, "/globals.css");
            Ok(Some(Asset {
                content_type: CSS_CONTENT_TYPE,
                body: b"/* bundled */".to_vec(),
            }))
        }
    }

    fn state_with(inference: Arc<dyn Inference>, assets: Option<Arc<dyn AssetStore>>) -> AppState {
        AppState {
            config: Config::default(),
            inference,
            assets,
        }
    }

    fn app(state: AppState) -> Router {
        router().with_state(state)
    }

    fn echo_app() -> Router {
        app(state_with(Arc::new(EchoInference::default()), None))
    }

    async fn send(router: Router, method: Method, uri: &str, body: &str) -> (StatusCode, Option<String>, String) {
        let response = router
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_home_page() {
        let (status, content_type, html) = send(echo_app(), Method::GET, "/", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some(HTML_CONTENT_TYPE));
        assert!(html.contains("Welcome to Hassio Frontend"));
        assert!(html.contains("Edge Computing"));
        assert!(html.contains("AI-Powered Chat"));
    }

    #[tokio::test]
    async fn test_unknown_page_renders_home() {
        let (status, content_type, html) = send(echo_app(), Method::GET, "/settings", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some(HTML_CONTENT_TYPE));
        assert!(html.contains("Modern UI"));
    }

    #[tokio::test]
    async fn test_chat_page() {
        let (status, content_type, html) = send(echo_app(), Method::GET, "/chat", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some(HTML_CONTENT_TYPE));
        assert!(html.contains("AI Chat Assistant"));
        assert!(html.contains("Start a conversation"));
    }

    #[tokio::test]
    async fn test_stylesheet_fallback_without_assets() {
        let (status, content_type, css) = send(echo_app(), Method::GET, "/globals.css", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some(CSS_CONTENT_TYPE));
        assert_eq!(css, FALLBACK_CSS);
    }

    #[tokio::test]
    async fn test_stylesheet_fallback_when_assets_fail() {
        let router = app(state_with(
            Arc::new(EchoInference::default()),
            Some(Arc::new(BrokenAssets)),
        ));
        let (status, content_type, css) = send(router, Method::GET, "/globals.css", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some(CSS_CONTENT_TYPE));
        assert_eq!(css, FALLBACK_CSS);
    }

    #[tokio::test]
    async fn test_stylesheet_fallback_when_asset_missing() {
        let router = app(state_with(
            Arc::new(EchoInference::default()),
            Some(Arc::new(EmptyAssets)),
        ));
        let (status, content_type, css) = send(router, Method::GET, "/globals.css", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some(CSS_CONTENT_TYPE));
        assert_eq!(css, FALLBACK_CSS);
    }

    #[tokio::test]
    async fn test_stylesheet_from_assets() {
        let router = app(state_with(
            Arc::new(EchoInference::default()),
            Some(Arc::new(BundledAssets)),
        ));
        let (_, content_type, css) = send(router, Method::GET, "/globals.css", "").await;
        assert_eq!(content_type.as_deref(), Some(CSS_CONTENT_TYPE));
        assert_eq!(css, "/* bundled */");
    }

    #[tokio::test]
    async fn test_completions_forwards_messages() {
        let inference = Arc::new(EchoInference::default());
        let router = app(state_with(inference.clone(), None));

        let (status, content_type, body) = send(
            router,
            Method::POST,
            "/api/chat/completions",
            r#"{"messages":[{"role":"user","content":"hi"}]}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["choices"][0]["message"]["role"], "assistant");
        assert_eq!(json["choices"][0]["message"]["content"], "echo: hi");

        let calls = inference.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, DEFAULT_MODEL);
        assert_eq!(
            calls[0].1,
            vec![ChatMessage {
                role: "user".into(),
                content: "hi".into()
            }]
        );
    }

    #[tokio::test]
    async fn test_completions_missing_messages_defaults_to_empty() {
        let inference = Arc::new(EchoInference::default());
        let router = app(state_with(inference.clone(), None));

        let (status, _, body) = send(router, Method::POST, "/api/chat/completions", "{}").await;

        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["choices"][0]["message"]["role"], "assistant");
        assert!(json["choices"][0]["message"].get("content").is_none());
        assert!(inference.calls.lock().unwrap()[0].1.is_empty());
    }

    #[tokio::test]
    async fn test_completions_accepts_large_transcript() {
        let inference = Arc::new(EchoInference::default());
        let router = app(state_with(inference.clone(), None));

        let long = "x".repeat(64 * 1024);
        let messages: Vec<_> = (0..48)
            .map(|_| json!({ "role": "user", "content": long }))
            .collect();
        let body = json!({ "messages": messages }).to_string();
        assert!(body.len() > 3 * 1024 * 1024);

        let (status, _, body) = send(router, Method::POST, "/api/chat/completions", &body).await;

        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["choices"][0]["message"]["content"], format!("echo: {long}"));
        assert_eq!(inference.calls.lock().unwrap()[0].1.len(), 48);
    }

    #[tokio::test]
    async fn test_completions_invalid_json() {
        let (status, _, body) =
            send(echo_app(), Method::POST, "/api/chat/completions", "not json").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"], "Internal Server Error");
    }

    #[tokio::test]
    async fn test_completions_upstream_failure() {
        let router = app(state_with(Arc::new(FailingInference), None));
        let (status, _, body) = send(
            router,
            Method::POST,
            "/api/chat/completions",
            r#"{"messages":[]}"#,
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"], "Internal Server Error");
    }

    #[tokio::test]
    async fn test_completions_wrong_method_is_not_found() {
        let (status, _, body) = send(echo_app(), Method::GET, "/api/chat/completions", "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Not Found");
    }

    #[tokio::test]
    async fn test_unknown_api_path_is_not_found() {
        for uri in ["/api/", "/api/unknown", "/api/chat/other", "/api/chat/completions/"] {
            let (status, _, _) = send(echo_app(), Method::POST, uri, "{}").await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_panic_becomes_internal_error() {
        let response = internal_error(Box::new("render blew up"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"Internal Server Error");
    }

    #[tokio::test]
    async fn test_chat_session_against_running_server() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, echo_app()).await.unwrap();
        });

        let client = HttpCompletionsClient::with_client(
            format!("http://{}", addr),
            reqwest::Client::builder().no_proxy().build().unwrap(),
        );
        let mut session = ChatSession::new();

        assert!(session.send("hello", &client).await);
        assert!(session.send("again", &client).await);

        let messages = session.messages();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[1].content, "echo: hello");
        assert_eq!(messages[3].role, Role::Assistant);
        assert_eq!(messages[3].content, "echo: again");
    }

    #[tokio::test]
    async fn test_chat_session_recovers_from_server_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let router = app(state_with(Arc::new(FailingInference), None));
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let client = HttpCompletionsClient::with_client(
            format!("http://{}", addr),
            reqwest::Client::builder().no_proxy().build().unwrap(),
        );
        let mut session = ChatSession::new();

        assert!(session.send("hello", &client).await);
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[1].content, ERROR_REPLY);
        assert!(!session.is_loading());
    }
}
