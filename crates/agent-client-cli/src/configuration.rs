use std::path::Path;
use std::time::Duration;

use agent_client::TransportConfig;
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{to_env_var, ConfigError, ENV_PREFIX};

#[derive(Debug, Deserialize)]
pub struct ServiceSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatSettings {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub system_prompt: Option<String>,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            system_prompt: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub service: ServiceSettings,
    #[serde(default)]
    pub chat: ChatSettings,
}

impl Settings {
    /// Load settings from defaults, an optional TOML file, then the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("service.host", default_host())?
            .set_default("service.timeout_secs", default_timeout_secs() as i64)?
            .set_default("chat.model", default_model())?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Self = config.try_deserialize()?;
        settings.validate()?;
        tracing::debug!(
            host = %settings.service.host,
            model = %settings.chat.model,
            "loaded settings"
        );
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.service.host.trim().is_empty() {
            return Err(ConfigError::Invalid {
                env_var: to_env_var("service.host"),
                reason: "host must not be empty".to_string(),
            });
        }
        if self.service.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                env_var: to_env_var("service.timeout_secs"),
                reason: "timeout must be at least one second".to_string(),
            });
        }
        if self.chat.model.trim().is_empty() {
            return Err(ConfigError::Invalid {
                env_var: to_env_var("chat.model"),
                reason: "model must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn transport_config(&self) -> TransportConfig {
        let config = TransportConfig::new(self.service.host.clone())
            .with_timeout(Duration::from_secs(self.service.timeout_secs));
        match &self.service.token {
            Some(token) => config.with_token(token.clone()),
            None => config,
        }
    }
}

fn default_host() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout_secs() -> u64 {
    600
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use std::io::Write;

    fn clean_env() {
        for (key, _) in env::vars() {
            if key.starts_with("AGENT_CLIENT_") {
                env::remove_var(&key);
            }
        }
    }

    #[test]
    #[serial]
    fn test_default_settings() {
        clean_env();

        let settings = Settings::load(None).unwrap();
        assert_eq!(settings.service.host, "http://localhost:3000");
        assert_eq!(settings.service.token, None);
        assert_eq!(settings.service.timeout_secs, 600);
        assert_eq!(settings.chat.model, "gpt-4o");
        assert_eq!(settings.chat.system_prompt, None);
    }

    #[test]
    #[serial]
    fn test_environment_override() {
        clean_env();
        env::set_var("AGENT_CLIENT_SERVICE__HOST", "https://agent.example.com");
        env::set_var("AGENT_CLIENT_SERVICE__TOKEN", "secret-token");
        env::set_var("AGENT_CLIENT_SERVICE__TIMEOUT_SECS", "30");
        env::set_var("AGENT_CLIENT_CHAT__MODEL", "gpt-test");

        let settings = Settings::load(None).unwrap();
        assert_eq!(settings.service.host, "https://agent.example.com");
        assert_eq!(settings.service.token.as_deref(), Some("secret-token"));
        assert_eq!(settings.service.timeout_secs, 30);
        assert_eq!(settings.chat.model, "gpt-test");

        // Clean up
        clean_env();
    }

    #[test]
    #[serial]
    fn test_file_then_environment() {
        clean_env();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(
            br#"[service]
host = "https://file.example.com"

[chat]
model = "file-model"
system_prompt = "Be terse."
"#,
        )
        .unwrap();
        env::set_var("AGENT_CLIENT_CHAT__MODEL", "env-model");

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.service.host, "https://file.example.com");
        assert_eq!(settings.chat.model, "env-model");
        assert_eq!(settings.chat.system_prompt.as_deref(), Some("Be terse."));

        clean_env();
    }

    #[test]
    #[serial]
    fn test_empty_host_rejected() {
        clean_env();
        env::set_var("AGENT_CLIENT_SERVICE__HOST", "");

        match Settings::load(None) {
            Err(ConfigError::Invalid { env_var, .. }) => {
                assert_eq!(env_var, "AGENT_CLIENT_SERVICE__HOST")
            }
            other => panic!("Expected invalid host, got {:?}", other),
        }

        clean_env();
    }

    #[test]
    #[serial]
    fn test_zero_timeout_rejected() {
        clean_env();
        env::set_var("AGENT_CLIENT_SERVICE__TIMEOUT_SECS", "0");

        match Settings::load(None) {
            Err(ConfigError::Invalid { env_var, .. }) => {
                assert_eq!(env_var, "AGENT_CLIENT_SERVICE__TIMEOUT_SECS")
            }
            other => panic!("Expected invalid timeout, got {:?}", other),
        }

        clean_env();
    }

    #[test]
    #[serial]
    fn test_unparseable_timeout() {
        clean_env();
        env::set_var("AGENT_CLIENT_SERVICE__TIMEOUT_SECS", "not-a-number");

        let result = Settings::load(None);
        assert!(matches!(result, Err(ConfigError::Load(_))));

        clean_env();
    }

    #[test]
    #[serial]
    fn test_missing_config_file() {
        clean_env();
        let result = Settings::load(Some(Path::new("/nonexistent/agent-client.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_transport_config_conversion() {
        let settings = Settings {
            service: ServiceSettings {
                host: "https://agent.example.com".to_string(),
                token: Some("tok".to_string()),
                timeout_secs: 15,
            },
            chat: ChatSettings::default(),
        };

        let transport = settings.transport_config();
        assert_eq!(transport.host, "https://agent.example.com");
        assert_eq!(transport.token.as_deref(), Some("tok"));
        assert_eq!(transport.timeout, Duration::from_secs(15));
    }
}
