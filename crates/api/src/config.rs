/// Origins allowed in development: the Vite dev-server ports.
pub const DEV_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:5174"];

/// Runtime environment, from `NODE_ENV`.
///
/// Anything other than `production` (including an unset variable) is
/// development; deployments set `NODE_ENV=production`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Development,
    Production,
}

impl RuntimeEnv {
    /// Classify a `NODE_ENV` value.
    pub fn from_node_env(value: Option<&str>) -> Self {
        match value {
            Some("production") => RuntimeEnv::Production,
            _ => RuntimeEnv::Development,
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, RuntimeEnv::Production)
    }
}

/// Server configuration loaded from environment variables.
///
/// Read exactly once at startup; components receive this struct (or data
/// derived from it) instead of consulting the environment themselves.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Runtime environment (default: development).
    pub env: RuntimeEnv,
    /// The single allowed frontend origin in production, if configured.
    pub frontend_url: Option<String>,
    /// MongoDB connection string (default: [`jje_db::DEFAULT_URI`]).
    pub mongodb_uri: String,
    /// Listen port (default: `5000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                          |
    /// |------------------------|----------------------------------|
    /// | `NODE_ENV`             | development unless `production`  |
    /// | `FRONTEND_URL`         | unset                            |
    /// | `MONGODB_URI`          | `mongodb://localhost:27017/jje`  |
    /// | `PORT`                 | `5000`                           |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                             |
    pub fn from_env() -> Self {
        let env = RuntimeEnv::from_node_env(std::env::var("NODE_ENV").ok().as_deref());

        let frontend_url = std::env::var("FRONTEND_URL").ok().filter(|s| !s.is_empty());

        let mongodb_uri =
            std::env::var("MONGODB_URI").unwrap_or_else(|_| jje_db::DEFAULT_URI.into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            env,
            frontend_url,
            mongodb_uri,
            port,
            request_timeout_secs,
        }
    }

    /// The set of origins permitted to make credentialed cross-origin
    /// requests, derived once at startup.
    ///
    /// Development: the fixed [`DEV_ORIGINS`] list. Production: the
    /// configured `FRONTEND_URL`, or an empty set when none is configured
    /// (see [`OriginPolicy`](crate::policy::OriginPolicy) for how the
    /// empty set is treated).
    pub fn allowed_origins(&self) -> Vec<String> {
        match self.env {
            RuntimeEnv::Production => self.frontend_url.iter().cloned().collect(),
            RuntimeEnv::Development => DEV_ORIGINS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
