use deadpool_redis::{Config, CreatePoolError, Pool, Runtime};

use crate::settings::types::Settings;

/// Pool used for login throttling counters. Sessions have their own store.
pub fn init_redis_pool(settings: &Settings) -> Result<Pool, CreatePoolError> {
    Config::from_url(&settings.redis.url).create_pool(Some(Runtime::Tokio1))
}
