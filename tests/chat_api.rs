use agent_switchboard::openrouter::{Choice, ResponseMessage, Usage};
use agent_switchboard::orchestrator::{SupervisorWorkflow, SUPERVISOR_PROMPT};
use agent_switchboard::server::{router, AppState, ChatResponse};
use agent_switchboard::{
    CompletionRequest, CompletionResponse, Error, LlmClient, ModelConfig, Result, Role,
};
use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// Answers the supervisor with a fixed label and echoes everything else
struct StubClient {
    label: &'static str,
    fail_specialist: bool,
    calls: Mutex<usize>,
}

impl StubClient {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            fail_specialist: false,
            calls: Mutex::new(0),
        }
    }

    fn failing_specialist(label: &'static str) -> Self {
        Self {
            fail_specialist: true,
            ..Self::new(label)
        }
    }

    fn calls(&self) -> usize {
        *self.calls.lock()
    }
}

fn reply(text: String) -> CompletionResponse {
    CompletionResponse {
        id: "gen-stub".to_string(),
        model: "stub".to_string(),
        choices: vec![Choice {
            index: 0,
            message: ResponseMessage {
                role: Role::Assistant,
                content: Some(text),
            },
            finish_reason: Some("stop".to_string()),
        }],
        usage: Some(Usage {
            prompt_tokens: 8,
            completion_tokens: 4,
            total_tokens: 12,
        }),
    }
}

#[async_trait]
impl LlmClient for StubClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        *self.calls.lock() += 1;
        if request.system_prompt() == Some(SUPERVISOR_PROMPT) {
            return Ok(reply(self.label.to_string()));
        }
        if self.fail_specialist {
            return Err(Error::openrouter("Request failed with status 502: bad gateway"));
        }
        let user = request.user_prompt().unwrap_or_default();
        Ok(reply(format!("answer to: {}", user)))
    }

    fn client_type(&self) -> &str {
        "stub"
    }

    fn endpoint(&self) -> &str {
        "memory://stub"
    }
}

fn app(client: Arc<StubClient>) -> Router {
    let workflow = SupervisorWorkflow::new(client, ModelConfig::new("stub-model"));
    router(AppState::new(workflow))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn chat_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_root_lists_agents() {
    let response = app(Arc::new(StubClient::new("CODER")))
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "message": "🤖 Multi-Agent Chatbot API",
            "agents": ["🔬 Scientist", "🎨 Creative", "💻 Coder"],
            "docs": "/docs"
        })
    );
}

#[tokio::test]
async fn test_health() {
    let response = app(Arc::new(StubClient::new("CODER")))
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_chat_routes_to_specialist() {
    let client = Arc::new(StubClient::new("CREATIVE"));
    let response = app(client.clone())
        .oneshot(chat_request(json!({ "message": "Write a poem about the moon" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: ChatResponse = serde_json::from_value(body_json(response).await).unwrap();
    assert_eq!(body.agent_used, "CREATIVE");
    assert_eq!(body.response, "🎨 answer to: Write a poem about the moon");
    assert_eq!(client.calls(), 2);
}

#[tokio::test]
async fn test_chat_unrecognized_label_uses_scientist() {
    let response = app(Arc::new(StubClient::new("no idea")))
        .oneshot(chat_request(json!({ "message": "Explain photosynthesis" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["agent_used"], "SCIENTIST");
    assert_eq!(body["response"], "🔬 answer to: Explain photosynthesis");
}

#[tokio::test]
async fn test_blank_message_is_bad_request() {
    let client = Arc::new(StubClient::new("CODER"));
    let response = app(client.clone())
        .oneshot(chat_request(json!({ "message": "   " })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "detail": "Message cannot be empty" })
    );
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn test_upstream_failure_is_internal_error() {
    let client = Arc::new(StubClient::failing_specialist("CODER"));
    let response = app(client.clone())
        .oneshot(chat_request(json!({ "message": "Fix my loop" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let detail = body_json(response).await["detail"].as_str().unwrap().to_string();
    assert!(detail.contains("status 502"), "{detail}");
    assert_eq!(client.calls(), 2);
}

#[tokio::test]
async fn test_missing_message_field_is_rejected() {
    let client = Arc::new(StubClient::new("CODER"));
    let response = app(client.clone())
        .oneshot(chat_request(json!({ "text": "hello" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let response = app(Arc::new(StubClient::new("CODER")))
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("origin", "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}
