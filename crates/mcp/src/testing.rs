// Test doubles shared by the tool, dispatcher and server tests

use crate::backend::Backend;
use async_trait::async_trait;
use pkgdocs_sdk::{SdkError, SdkResult};
use serde_json::Value;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum BackendCall {
    Documentation { package_name: String, query: String },
    Packages { query: String, max_results: u32 },
}

enum Reply {
    Json(Value),
    Status(u16, String),
}

/// Backend that answers every call with a fixed reply and records the calls.
pub(crate) struct StubBackend {
    reply: Reply,
    calls: Mutex<Vec<BackendCall>>,
}

impl StubBackend {
    pub(crate) fn ok(body: Value) -> Self {
        Self {
            reply: Reply::Json(body),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn status(status: u16, body: &str) -> Self {
        Self {
            reply: Reply::Status(status, body.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn answer(&self, call: BackendCall) -> SdkResult<Value> {
        self.calls.lock().unwrap().push(call);
        match &self.reply {
            Reply::Json(body) => Ok(body.clone()),
            Reply::Status(status, body) => Err(SdkError::Api {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

#[async_trait]
impl Backend for StubBackend {
    async fn fetch_documentation(&self, package_name: &str, query: &str) -> SdkResult<Value> {
        self.answer(BackendCall::Documentation {
            package_name: package_name.to_string(),
            query: query.to_string(),
        })
    }

    async fn fetch_packages(&self, query: &str, max_results: u32) -> SdkResult<Value> {
        self.answer(BackendCall::Packages {
            query: query.to_string(),
            max_results,
        })
    }
}
