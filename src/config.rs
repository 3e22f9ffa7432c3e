use crate::context::{ApiMode, DEFAULT_API_ROOT, DeploymentContext};
use crate::error::ConfigError;
use crate::transport::HttpDispatcher;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub bot_token: String,
    #[serde(default = "default_api_root")]
    pub api_root: Url,
    #[serde(default)]
    pub api_mode: ApiMode,
    #[serde(default)]
    pub test_env: bool,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_api_root() -> Url {
    Url::parse(DEFAULT_API_ROOT).expect("default API root is a valid URL")
}

const fn default_timeout() -> u64 {
    30
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = config_file_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn load_from_path(config_path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(config_path).map_err(|e| {
            ConfigError::Invalid(format!(
                "Cannot read config at {}: {}",
                config_path.display(),
                e
            ))
        })?;
        let config: Self = toml::from_str(&contents).map_err(|e| {
            ConfigError::Invalid(format!("Invalid TOML in {}: {}", config_path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.bot_token.is_empty() {
            anyhow::bail!("bot_token must not be empty");
        }
        if !matches!(self.api_root.scheme(), "http" | "https") {
            anyhow::bail!("api_root must be an http or https URL");
        }
        if self.timeout_seconds == 0 || self.timeout_seconds > 3600 {
            anyhow::bail!("timeout_seconds must be between 1 and 3600");
        }
        Ok(())
    }

    pub fn deployment_context(&self) -> DeploymentContext {
        DeploymentContext::new(self.bot_token.clone())
            .with_api_root(self.api_root.clone())
            .with_api_mode(self.api_mode)
            .with_test_env(self.test_env)
    }

    /// Transport with the configured request timeout.
    pub fn dispatcher(&self) -> anyhow::Result<HttpDispatcher> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_seconds))
            .build()?;
        Ok(HttpDispatcher::with_client(
            Arc::new(self.deployment_context()),
            http,
        ))
    }
}

fn config_file_path() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| ConfigError::Invalid("Cannot determine home directory".to_string()))?;
    Ok(home.join(".config").join("tgcall").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("config.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn load_valid_config() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(
            tmp.path(),
            r#"
            bot_token = "123:ABC"
            api_root = "http://localhost:8081"
            api_mode = "user"
            test_env = true
            timeout_seconds = 120
            "#,
        );
        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.bot_token, "123:ABC");
        assert_eq!(config.api_root.as_str(), "http://localhost:8081/");
        assert_eq!(config.api_mode, ApiMode::User);
        assert!(config.test_env);
        assert_eq!(config.timeout_seconds, 120);
    }

    #[test]
    fn defaults_apply() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(tmp.path(), r#"bot_token = "tok""#);
        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.api_root.as_str(), "https://api.telegram.org/");
        assert_eq!(config.api_mode, ApiMode::Bot);
        assert!(!config.test_env);
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn empty_token_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(tmp.path(), r#"bot_token = """#);
        let err = Config::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("bot_token"));
    }

    #[test]
    fn missing_token_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(tmp.path(), "timeout_seconds = 10");
        let err = Config::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid TOML"));
    }

    #[test]
    fn non_http_api_root_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(
            tmp.path(),
            r#"
            bot_token = "tok"
            api_root = "ftp://example.com"
            "#,
        );
        let err = Config::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("api_root"));
    }

    #[test]
    fn timeout_bounds() {
        let tmp = tempfile::tempdir().unwrap();
        for (timeout, ok) in [(0, false), (1, true), (3600, true), (3601, false)] {
            let path = write_config(
                tmp.path(),
                &format!("bot_token = \"tok\"\ntimeout_seconds = {timeout}"),
            );
            assert_eq!(Config::load_from_path(&path).is_ok(), ok, "timeout {timeout}");
        }
    }

    #[test]
    fn unreadable_path_reports_location() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("absent.toml");
        let err = Config::load_from_path(&missing).unwrap_err();
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn context_carries_every_setting() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(
            tmp.path(),
            r#"
            bot_token = "T"
            api_root = "http://localhost:8081"
            test_env = true
            "#,
        );
        let ctx = Config::load_from_path(&path).unwrap().deployment_context();
        assert_eq!(
            ctx.method_url("getMe").unwrap().as_str(),
            "http://localhost:8081/botT/test/getMe"
        );
    }
}
