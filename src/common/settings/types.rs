use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
    pub debug: bool,
    pub redis: RedisSettings,
    pub secret: SecretSettings,
    pub email: EmailSettings,
}

impl Settings {
    /// Origin that links sent by email point at.
    pub fn web_address(&self) -> String {
        if self.debug {
            format!("{}:{}", self.application.base_url, self.application.port)
        } else {
            self.application.base_url.clone()
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub port: u16,
    pub host: String,
    pub base_url: String,
    pub frontend_url: String,
    pub protocol: String,
    pub max_log_files: usize,
    pub max_login_attempts: u64,
    pub login_attempts_cool_time_seconds: u64,
}

#[derive(Deserialize, Clone, Debug)]
pub struct DatabaseSettings {
    pub url: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct RedisSettings {
    pub url: String,
}

#[derive(Deserialize, Clone)]
pub struct SecretSettings {
    pub hmac_secret: String,
}

impl std::fmt::Debug for SecretSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretSettings")
            .field("hmac_secret", &"[redacted]")
            .finish()
    }
}

#[derive(Deserialize, Clone)]
pub struct EmailSettings {
    pub host: String,
    pub host_user: String,
    pub host_user_password: String,
    pub sender: String,
}

impl std::fmt::Debug for EmailSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailSettings")
            .field("host", &self.host)
            .field("host_user", &self.host_user)
            .field("host_user_password", &"[redacted]")
            .field("sender", &self.sender)
            .finish()
    }
}

#[derive(Debug, PartialEq)]
pub enum Environment {
    Testing,
    Development,
    Production,
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "testing" => Ok(Self::Testing),
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(format!("{} is not a supported environment.", other)),
        }
    }
}
