use std::env;

/// Session token and cookie configuration.
///
/// Loaded once at startup and injected into the token codec and the
/// cookie-setting handlers; request handlers never read the environment
/// directly.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    /// HMAC signing secret.
    pub secret: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    /// Identity cookie lifetime in days.
    pub cookie_expires_in: i64,
    /// Mark the identity cookie `Secure` (production only).
    pub secure_cookie: bool,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            expires_in: env::var("JWT_EXPIRES_IN")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2_592_000), // 30 days
            cookie_expires_in: env::var("JWT_COOKIE_EXPIRES_IN")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            secure_cookie: env::var("APP_ENV")
                .map(|e| e == "production")
                .unwrap_or(false),
        }
    }
}
