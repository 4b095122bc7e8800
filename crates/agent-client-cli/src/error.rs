use thiserror::Error;

pub const ENV_PREFIX: &str = "AGENT_CLIENT";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid setting {env_var}: {reason}")]
    Invalid { env_var: String, reason: String },

    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

/// Map a settings key such as `service.host` to the environment variable that sets it.
pub fn to_env_var(field: &str) -> String {
    format!("{}_{}", ENV_PREFIX, field.replace('.', "__").to_uppercase())
}
