/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3001`).
    pub port: u16,
    /// Upstream API token. Empty means no credential is sent; submissions
    /// will be rejected by the upstream itself.
    pub replicate_api_key: String,
    /// Upstream base URL (default: `https://api.replicate.com`).
    pub replicate_api_url: String,
    /// Allowed browser origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// Hosting-domain suffix that is always allowed as an origin
    /// (default: `.vercel.app`). Empty disables the suffix rule.
    pub cors_origin_suffix: String,
    /// HTTP request timeout in seconds (default: `330`). Must exceed the
    /// five-minute polling ceiling or long generations get cut off.
    pub request_timeout_secs: u64,
    /// Expose the `GET /debug` diagnostic endpoint (default: `false`).
    pub expose_debug: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                       |
    /// |------------------------|-------------------------------|
    /// | `HOST`                 | `0.0.0.0`                     |
    /// | `PORT`                 | `3001`                        |
    /// | `REPLICATE_API_KEY`    | *(empty)*                     |
    /// | `REPLICATE_API_URL`    | `https://api.replicate.com`   |
    /// | `CORS_ORIGINS`         | the three localhost dev ports |
    /// | `CORS_ORIGIN_SUFFIX`   | `.vercel.app`                 |
    /// | `REQUEST_TIMEOUT_SECS` | `330`                         |
    /// | `DEBUG_ENDPOINT`       | `false`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3001".into())
            .parse()
            .expect("PORT must be a valid u16");

        let replicate_api_key = std::env::var("REPLICATE_API_KEY").unwrap_or_default();

        let replicate_api_url = std::env::var("REPLICATE_API_URL")
            .unwrap_or_else(|_| "https://api.replicate.com".into());

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| {
                "http://localhost:3000,http://localhost:5173,http://localhost:5177".into()
            })
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let cors_origin_suffix =
            std::env::var("CORS_ORIGIN_SUFFIX").unwrap_or_else(|_| ".vercel.app".into());

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "330".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let expose_debug: bool = std::env::var("DEBUG_ENDPOINT")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("DEBUG_ENDPOINT must be true or false");

        Self {
            host,
            port,
            replicate_api_key,
            replicate_api_url,
            cors_origins,
            cors_origin_suffix,
            request_timeout_secs,
            expose_debug,
        }
    }
}
