use std::env;

/// How bearer tokens are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStrategy {
    /// 32 random bytes, hex encoded
    Random,
    /// `<user id>-<counter>`, reproducible across runs
    Sequential,
}

impl std::str::FromStr for TokenStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random" => Ok(TokenStrategy::Random),
            "sequential" => Ok(TokenStrategy::Sequential),
            _ => Err(format!("Unknown token strategy: {}", s)),
        }
    }
}

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    /// Seeded admin account, always user "1"
    pub admin_name: String,
    pub admin_email: String,
    pub admin_password: String,
    pub token_strategy: TokenStrategy,
    /// HMAC key for the order JWTs returned by POST /api/order
    pub order_signing_secret: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            admin_name: "常用名字".to_string(),
            admin_email: "a@jwt.com".to_string(),
            admin_password: "admin".to_string(),
            token_strategy: TokenStrategy::Random,
            order_signing_secret: "jwt-pizza-mock-secret".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let token_strategy = match env::var("TOKEN_STRATEGY") {
            Ok(value) => value.parse().unwrap_or_else(|e: String| {
                tracing::warn!(error = %e, "Falling back to random tokens");
                TokenStrategy::Random
            }),
            Err(_) => defaults.token_strategy,
        };

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            admin_name: env::var("ADMIN_NAME").unwrap_or(defaults.admin_name),
            admin_email: env::var("ADMIN_EMAIL").unwrap_or(defaults.admin_email),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
            token_strategy,
            order_signing_secret: env::var("ORDER_SIGNING_SECRET")
                .unwrap_or(defaults.order_signing_secret),
        }
    }
}
