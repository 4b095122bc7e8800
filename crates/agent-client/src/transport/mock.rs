use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use serde_json::Value;

use super::HttpTransport;
use crate::errors::TransportError;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

/// A transport that answers with pre-configured responses and records every request
#[derive(Default, Clone)]
pub struct MockTransport {
    responses: Arc<Mutex<VecDeque<Result<Value, TransportError>>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that answers with each of `responses` in turn
    pub fn with_responses<I>(responses: I) -> Self
    where
        I: IntoIterator<Item = Result<Value, TransportError>>,
    {
        let mock = Self::new();
        for response in responses {
            mock.push_response(response);
        }
        mock
    }

    pub fn push_response(&self, response: Result<Value, TransportError>) {
        lock(&self.responses).push_back(response);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    fn respond(&self, request: RecordedRequest) -> Result<Value, TransportError> {
        lock(&self.requests).push(request);
        // Null once the scripted responses run out
        lock(&self.responses).pop_front().unwrap_or(Ok(Value::Null))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(&self, path: &str) -> Result<Value, TransportError> {
        self.respond(RecordedRequest {
            method: "GET",
            path: path.to_string(),
            body: None,
        })
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
        self.respond(RecordedRequest {
            method: "POST",
            path: path.to_string(),
            body: Some(body.clone()),
        })
    }
}
