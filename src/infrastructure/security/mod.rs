pub mod auth_clients;
pub mod otp;
pub mod session_store;
pub mod token;

pub use auth_clients::{BearerAuthClient, SessionAuthClient};
pub use otp::InMemoryOtpChallengeStore;
pub use session_store::InMemorySessionStore;
pub use token::HmacTokenManager;
