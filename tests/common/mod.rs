// Shared test helpers: a scripted generation backend

#![allow(dead_code)]

use async_trait::async_trait;
use inference_gateway::config::AppConfig;
use inference_gateway::error::{GatewayError, Result};
use inference_gateway::gateway::{
    GenerationBackend, GenerationRequest, GenerationResponse, InferenceRouter,
};
use inference_gateway::models::ToolCall;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Behavior {
    /// Answer with `text`, echoing the tool calls.
    Reply(String, Vec<ToolCall>),
    /// Answer after sleeping.
    Slow(String, Duration),
    Fail(String),
    /// Never answer.
    Hang,
}

pub struct MockBackend {
    behavior: Mutex<Behavior>,
    calls: AtomicUsize,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl MockBackend {
    pub fn new(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            behavior: Mutex::new(behavior),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn replying(text: &str) -> Arc<Self> {
        Self::new(Behavior::Reply(text.to_string(), Vec::new()))
    }

    pub fn failing() -> Arc<Self> {
        Self::new(Behavior::Fail("connection refused".to_string()))
    }

    pub fn set_behavior(&self, behavior: Behavior) {
        *self.behavior.lock() = behavior;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.requests.lock().last().cloned()
    }
}

#[async_trait]
impl GenerationBackend for MockBackend {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().push(request);

        let behavior = self.behavior.lock().clone();
        match behavior {
            Behavior::Reply(text, tool_calls) => Ok(GenerationResponse { text, tool_calls }),
            Behavior::Slow(text, delay) => {
                tokio::time::sleep(delay).await;
                Ok(GenerationResponse {
                    text,
                    tool_calls: Vec::new(),
                })
            }
            Behavior::Fail(reason) => Err(GatewayError::BackendUnavailable(reason)),
            Behavior::Hang => std::future::pending().await,
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

pub fn router_with(backend: Arc<MockBackend>, config: &AppConfig) -> InferenceRouter {
    InferenceRouter::from_config(config, backend)
}

pub fn router(backend: Arc<MockBackend>) -> InferenceRouter {
    router_with(backend, &AppConfig::default())
}
