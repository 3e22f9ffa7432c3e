//! HTTP transport for the Bot API.
//!
//! Requests without local files go out as a JSON body. Requests with uploads
//! become a multipart form: string fields are sent verbatim, every other
//! field as its JSON encoding, and each upload as a file part.

use crate::context::DeploymentContext;
use crate::dispatch::Dispatch;
use crate::error::{Error, Result};
use crate::input_file::LocalFile;
use crate::request::{Request, Upload};
use crate::types::ApiResponse;
use reqwest::multipart::{Form, Part};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct HttpDispatcher {
    http: reqwest::Client,
    context: Arc<DeploymentContext>,
}

impl HttpDispatcher {
    pub fn new(context: Arc<DeploymentContext>) -> Self {
        Self::with_client(context, reqwest::Client::new())
    }

    /// Uses a preconfigured client, e.g. one with a timeout or proxy.
    pub fn with_client(context: Arc<DeploymentContext>, http: reqwest::Client) -> Self {
        Self { http, context }
    }

    pub fn context(&self) -> &DeploymentContext {
        &self.context
    }
}

#[async_trait::async_trait]
impl Dispatch for HttpDispatcher {
    async fn dispatch(&self, method: &str, request: Request) -> Result<Value> {
        let url = self.context.method_url(method)?;
        let (fields, uploads) = request.into_parts()?;
        debug!(
            method,
            fields = fields.len(),
            uploads = uploads.len(),
            "Calling Bot API"
        );

        let builder = self.http.post(url);
        let builder = if uploads.is_empty() {
            builder.json(&fields)
        } else {
            builder.multipart(build_form(fields, uploads).await?)
        };

        // The URL embeds the token.
        let network = |source: reqwest::Error| Error::Network {
            method: method.to_string(),
            source: source.without_url(),
        };
        let resp = builder.send().await.map_err(network)?;
        let status = resp.status();
        let body = resp.bytes().await.map_err(network)?;

        let envelope: ApiResponse<Value> =
            serde_json::from_slice(&body).map_err(|source| Error::InvalidResponse {
                method: method.to_string(),
                source,
            })?;

        if envelope.ok {
            debug!(method, %status, "Bot API call succeeded");
            return Ok(envelope.result.unwrap_or(Value::Null));
        }

        let error_code = envelope
            .error_code
            .unwrap_or_else(|| i32::from(status.as_u16()));
        let description = envelope
            .description
            .unwrap_or_else(|| "Unknown error".to_string());
        warn!(method, error_code, %description, "Bot API returned an error");
        Err(Error::Api {
            error_code,
            description,
            parameters: envelope.parameters,
        })
    }
}

async fn build_form(fields: Map<String, Value>, uploads: Vec<Upload>) -> Result<Form> {
    let mut form = Form::new();
    for (key, value) in fields {
        let text = match value {
            Value::String(s) => s,
            other => other.to_string(),
        };
        form = form.text(key, text);
    }
    for upload in uploads {
        let file_name = upload.file.file_name();
        let data = match upload.file {
            LocalFile::Path(path) => {
                tokio::fs::read(&path)
                    .await
                    .map_err(|source| Error::Upload {
                        path: path.display().to_string(),
                        source,
                    })?
            }
            LocalFile::Memory { data, .. } => data,
        };
        form = form.part(upload.name, Part::bytes(data).file_name(file_name));
    }
    Ok(form)
}
