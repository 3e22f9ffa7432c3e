//! In-crate fake dispatcher that records every request it receives.

use super::Telegram;
use crate::context::DeploymentContext;
use crate::dispatch::Dispatch;
use crate::error::Result;
use crate::request::{Request, Upload};
use serde_json::{Map, Value, json};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub(crate) struct Recorded {
    pub method: String,
    pub fields: Map<String, Value>,
    pub uploads: Vec<Upload>,
}

impl Recorded {
    pub fn body(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    pub fn upload_names(&self) -> Vec<&str> {
        self.uploads.iter().map(|u| u.name.as_str()).collect()
    }
}

pub(crate) struct RecordingDispatcher {
    reply: Value,
    calls: Mutex<Vec<Recorded>>,
}

impl RecordingDispatcher {
    /// Answers every call with `true`, the result of most setters.
    pub fn new() -> Arc<Self> {
        Self::replying(json!(true))
    }

    pub fn replying(reply: Value) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn bot(self: &Arc<Self>) -> Telegram {
        Telegram::with_dispatcher(DeploymentContext::new("T"), self.clone())
    }

    pub fn calls(&self) -> Vec<Recorded> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last(&self) -> Recorded {
        self.calls().pop().expect("no call was recorded")
    }
}

#[async_trait::async_trait]
impl Dispatch for RecordingDispatcher {
    async fn dispatch(&self, method: &str, request: Request) -> Result<Value> {
        let (fields, uploads) = request.into_parts()?;
        self.calls.lock().unwrap().push(Recorded {
            method: method.to_string(),
            fields,
            uploads,
        });
        Ok(self.reply.clone())
    }
}

/// A minimal private-chat text message as the API returns it.
pub(crate) fn message_json(chat_id: i64, message_id: i32) -> Value {
    json!({
        "message_id": message_id,
        "date": 1_700_000_000,
        "chat": {"id": chat_id, "type": "private", "first_name": "Ann"},
        "from": {"id": chat_id, "is_bot": false, "first_name": "Ann"},
        "text": "hello"
    })
}
