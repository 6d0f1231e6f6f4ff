use std::env;

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError};

use crate::settings::types::{Environment, Settings};

pub mod types;

pub fn get_settings(env_file_name: &str) -> Result<Settings, String> {
    dotenvy::from_filename(env_file_name).ok();

    let environment =
        Environment::try_from(env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "production".into()))
            .map_err(|e| format!("Failed to parse APP_ENVIRONMENT: {}", e))?;
    build_settings(environment)
}

pub fn get_test_settings() -> Settings {
    build_settings(Environment::Testing).expect("Error on getting settings.")
}

fn build_settings(environment: Environment) -> Result<Settings, String> {
    let builder = base_defaults(Config::builder())
        .and_then(|builder| match environment {
            Environment::Testing => testing_defaults(builder),
            Environment::Development => development_defaults(builder),
            Environment::Production => production_defaults(builder),
        })
        .map_err(|e| e.to_string())?;

    builder
        // E.g. 'APP_APPLICATION__PORT=5001' sets 'Settings.application.port'
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .and_then(|settings| settings.try_deserialize::<Settings>())
        .map_err(|e| format!("Failed to build settings: {}", e))
}

type Builder = ConfigBuilder<DefaultState>;

fn base_defaults(builder: Builder) -> Result<Builder, ConfigError> {
    builder
        .set_default("application.port", 5000_i64)?
        .set_default("application.max_log_files", 14_i64)?
        .set_default("application.max_login_attempts", 5_i64)?
        .set_default("application.login_attempts_cool_time_seconds", 3600_i64)
}

fn testing_defaults(builder: Builder) -> Result<Builder, ConfigError> {
    development_defaults(builder)?
        .set_default("database.url", "sqlite::memory:")?
        .set_default("redis.url", "redis://127.0.0.1:6379")?
        .set_default(
            "secret.hmac_secret",
            "testing-hmac-secret-that-is-long-enough-for-a-cookie-signing-key-0123456789",
        )?
        .set_default("email.host", "localhost")?
        .set_default("email.host_user", "")?
        .set_default("email.host_user_password", "")?
        .set_default("email.sender", "AI Tool Directory <noreply@localhost>")
}

fn development_defaults(builder: Builder) -> Result<Builder, ConfigError> {
    builder
        .set_default("application.protocol", "http")?
        .set_default("application.host", "127.0.0.1")?
        .set_default("application.base_url", "http://127.0.0.1")?
        .set_default("application.frontend_url", "https://localhost:3000")?
        .set_default("debug", true)
}

fn production_defaults(builder: Builder) -> Result<Builder, ConfigError> {
    builder
        .set_default("application.protocol", "https")?
        .set_default("application.host", "0.0.0.0")?
        .set_default("application.base_url", "")?
        .set_default("application.frontend_url", "https://localhost:3000")?
        .set_default("debug", false)
}
