//! The typed operation surface.
//!
//! One async method per Bot API method, grouped by area in the submodules.
//! Every method builds a [`Request`] (required fields, then the extra bag,
//! then normalized text) and hands it to the dispatcher.

mod bot;
mod business;
mod chat;
mod edit;
mod forum;
mod inline;
mod media;
mod messages;
mod payments;
mod stickers;
mod users;

#[cfg(test)]
pub(crate) mod testing;

pub use edit::EditTarget;

use crate::context::DeploymentContext;
use crate::dispatch::Dispatch;
use crate::error::{Error, Result};
use crate::request::Request;
use crate::transport::HttpDispatcher;
use serde::de::DeserializeOwned;
use std::sync::Arc;

#[derive(Clone)]
pub struct Telegram {
    dispatcher: Arc<dyn Dispatch>,
    context: Arc<DeploymentContext>,
}

impl Telegram {
    /// Client talking HTTP to the API described by `context`.
    pub fn new(context: DeploymentContext) -> Self {
        let context = Arc::new(context);
        let dispatcher = Arc::new(HttpDispatcher::new(context.clone()));
        Self {
            dispatcher,
            context,
        }
    }

    pub fn with_dispatcher(context: DeploymentContext, dispatcher: Arc<dyn Dispatch>) -> Self {
        Self {
            dispatcher,
            context: Arc::new(context),
        }
    }

    pub fn context(&self) -> &DeploymentContext {
        &self.context
    }

    /// Dispatches `request` as `method` and decodes the result.
    pub async fn call<R: DeserializeOwned>(&self, method: &str, request: Request) -> Result<R> {
        let value = self.dispatcher.dispatch(method, request).await?;
        serde_json::from_value(value).map_err(|source| Error::InvalidResponse {
            method: method.to_string(),
            source,
        })
    }
}

impl std::fmt::Debug for Telegram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Telegram")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}
