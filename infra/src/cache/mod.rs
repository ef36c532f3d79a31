//! Redis client and the access-token cache built on it.

mod redis_client;
mod token_cache;

pub use redis_client::RedisClient;
pub use token_cache::RedisTokenCache;
