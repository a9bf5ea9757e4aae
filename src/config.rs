use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Port the ingress server binds.
    /// Set via RELAY_PORT env var. Default: 8080.
    pub port: u16,
    /// Destination endpoint for forwarded requests (RELAY_ENDPOINT_URL).
    /// Optional at load time: when unset, approved records fail with a
    /// configuration error before any network call is attempted.
    pub endpoint_url: Option<String>,
    /// Total timeout for one downstream request, in seconds.
    /// Set via RELAY_HTTP_TIMEOUT_SECS env var. Default: 10.
    pub http_timeout_secs: u64,
}

pub fn load() -> anyhow::Result<Config> {
    dotenvy::dotenv().ok();

    let endpoint_url = std::env::var("RELAY_ENDPOINT_URL")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    if endpoint_url.is_none() {
        eprintln!("⚠️  RELAY_ENDPOINT_URL is not set — approved records cannot be forwarded until it is.");
    }

    Ok(Config {
        port: std::env::var("RELAY_PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .unwrap_or(8080),
        endpoint_url,
        http_timeout_secs: std::env::var("RELAY_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10),
    })
}
