// src/presentation/http/cookies.rs
use axum::http::{HeaderMap, header};

/// Attributes of the session cookie.
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub max_age_secs: i64,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "pressroom_session".to_string(),
            secure: false,
            max_age_secs: 60 * 60 * 24 * 7,
        }
    }
}

impl CookieConfig {
    pub fn build_set_cookie(&self, value: &str) -> String {
        let mut cookie = format!(
            "{}={}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
            self.name, value, self.max_age_secs
        );
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }

    pub fn build_delete_cookie(&self) -> String {
        format!("{}=; HttpOnly; Path=/; Max-Age=0", self.name)
    }
}

/// Extract a cookie value from the request headers.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(header::COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;
            (key == name).then(|| value.to_string())
        })
}
