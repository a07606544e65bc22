// src/infrastructure/repositories/mod.rs
mod error;
mod memory;
mod postgres_article;

pub use error::map_sqlx;
pub use memory::InMemoryArticleRepository;
pub use postgres_article::PostgresArticleRepository;
