// Test doubles shared by unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::transport::ApiResponse;
use crate::api::{ApiRequest, Transport};
use crate::error::{PostieError, Result};

/// Transport that replays scripted outcomes and records every request.
#[derive(Default)]
pub struct StubTransport {
    outcomes: Mutex<VecDeque<Result<ApiResponse>>>,
    calls: Mutex<Vec<ApiRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a 200 response with the given body.
    pub fn respond_with(self, body: &str) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse::ok(body)));
        self
    }

    /// Queue a failure.
    pub fn fail_with(self, error: PostieError) -> Self {
        self.outcomes.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse> {
        self.calls.lock().unwrap().push(request.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(PostieError::Other("no scripted response".to_string())))
    }
}

pub const POST_ONE: &str =
    r#"[{"id":1,"userId":1,"title":"Test title!","body":"Test body!"}]"#;

pub const USER_ONE: &str = r#"[{"id":1,"name":"Test user","email":"test@example.com"}]"#;
