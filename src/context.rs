use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

pub const DEFAULT_API_ROOT: &str = "https://api.telegram.org";

/// Path prefix selecting the kind of account the token belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiMode {
    #[default]
    Bot,
    User,
}

impl ApiMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bot => "bot",
            Self::User => "user",
        }
    }
}

impl fmt::Display for ApiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where and as whom the client talks to the API. Fixed once the client is
/// built; shared read-only between concurrent calls.
#[derive(Clone, PartialEq, Eq)]
pub struct DeploymentContext {
    pub api_root: Url,
    pub api_mode: ApiMode,
    pub token: String,
    pub test_env: bool,
}

impl DeploymentContext {
    /// Context for the hosted production API.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            api_root: Url::parse(DEFAULT_API_ROOT).expect("default API root is a valid URL"),
            api_mode: ApiMode::Bot,
            token: token.into(),
            test_env: false,
        }
    }

    pub fn with_api_root(mut self, api_root: Url) -> Self {
        self.api_root = api_root;
        self
    }

    pub fn with_api_mode(mut self, api_mode: ApiMode) -> Self {
        self.api_mode = api_mode;
        self
    }

    pub fn with_test_env(mut self, test_env: bool) -> Self {
        self.test_env = test_env;
        self
    }

    /// `{mode}{token}` optionally followed by `/test`.
    pub(crate) fn credentials_segment(&self) -> String {
        let test = if self.test_env { "/test" } else { "" };
        format!("{}{}{}", self.api_mode, self.token, test)
    }

    /// Endpoint for one API method. Appended to the root, so a root with a
    /// path prefix (a reverse-proxied local server) keeps it.
    pub fn method_url(&self, method: &str) -> Result<Url> {
        let url = format!(
            "{}/{}/{method}",
            self.api_root.as_str().trim_end_matches('/'),
            self.credentials_segment()
        );
        Url::parse(&url).map_err(|source| Error::InvalidUrl { url, source })
    }
}

// The token is a credential; keep it out of logs and panic messages.
impl fmt::Debug for DeploymentContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeploymentContext")
            .field("api_root", &self.api_root.as_str())
            .field("api_mode", &self.api_mode)
            .field("token", &"***")
            .field("test_env", &self.test_env)
            .finish()
    }
}
