use crate::error::Result;
use crate::request::Request;
use serde_json::Value;

/// Sends one API method call and returns the raw `result` payload.
///
/// The HTTP transport is the production implementation. Anything else that
/// answers method calls (a local fake in tests, a recording proxy) can stand
/// in for it.
#[async_trait::async_trait]
pub trait Dispatch: Send + Sync {
    async fn dispatch(&self, method: &str, request: Request) -> Result<Value>;
}
