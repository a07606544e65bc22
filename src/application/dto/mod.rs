pub mod articles;
pub mod auth;

pub use articles::{ArticleDto, ArticleResponse, ArticlesResponse, MessageResponse};
pub use auth::{AuthTokenDto, UserDto};
