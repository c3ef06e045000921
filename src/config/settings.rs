use anyhow::{Context, Result};

/// Settings for the hosted data service gateway.
#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub base_url: String,
    pub api_key_env: &'static str,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            base_url: base_url_from_env(),
            api_key_env: "FF_HUB_API_KEY",
            user_agent: "FFTournamentHub/1.0",
            timeout_secs: 30,
        }
    }
}

impl GatewaySettings {
    /// The anon API key is never baked into the binary.
    pub fn api_key(&self) -> Result<String> {
        std::env::var(self.api_key_env)
            .with_context(|| format!("Missing data service API key in ${}", self.api_key_env))
    }
}

fn base_url_from_env() -> String {
    std::env::var("FF_HUB_BASE_URL")
        .unwrap_or_else(|_| "https://xegpartxomzpaskqxkva.supabase.co".to_string())
}

#[derive(Debug, Clone)]
pub struct CacheSettings {
    pub dir: String,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            dir: "cache".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub gateway: GatewaySettings,
    pub cache: CacheSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
