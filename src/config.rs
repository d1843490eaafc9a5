//! Store Configuration
//!
//! Endpoint and anon key for the remote store, supplied at build time.

/// Connection settings for the hosted table API
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub url: String,
    pub anon_key: String,
}

impl StoreConfig {
    /// Read `MENU_STORE_URL` / `MENU_STORE_ANON_KEY` baked in at compile
    /// time, falling back to the local development endpoint.
    pub fn from_build_env() -> Self {
        Self {
            url: option_env!("MENU_STORE_URL")
                .unwrap_or("http://localhost:54321")
                .to_string(),
            anon_key: option_env!("MENU_STORE_ANON_KEY").unwrap_or("").to_string(),
        }
    }
}
