//! Application state shared across handlers.

use std::sync::Arc;

use driftline_core::session::SigningKey;

use crate::config::SiteConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The signing key is built
/// once from configuration at startup and injected everywhere the session
/// layer needs it; nothing reads the secret from the environment at
/// request time.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    signing_key: SigningKey,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Site configuration; the session signing key is derived
    ///   from its validated secret
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        let signing_key = SigningKey::new(config.session_secret.clone());
        Self {
            inner: Arc::new(AppStateInner {
                config,
                signing_key,
            }),
        }
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the session signing key.
    #[must_use]
    pub fn signing_key(&self) -> &SigningKey {
        &self.inner.signing_key
    }
}
