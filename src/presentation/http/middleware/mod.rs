pub mod authorize;
pub mod inject;

pub use authorize::{CurrentUser, require_user};
pub use inject::{AuthClientHandle, inject_dependencies};
