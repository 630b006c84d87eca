// src/infrastructure/security/mod.rs
pub mod memory_token_store;
pub mod password;
pub mod redis_token_store;

pub use memory_token_store::InMemoryTokenStore;
pub use password::BcryptPasswordHasher;
pub use redis_token_store::RedisTokenStore;
