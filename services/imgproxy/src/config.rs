use std::fmt::{Debug, Formatter};

use log::debug;

use super::constants::*;
use imgsign_core::{utils::Redact, Context};

/// Config carries all the configuration needed to build imgproxy URLs.
#[derive(Clone, Default)]
pub struct Config {
    /// `endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`IMGPROXY_ENDPOINT`]
    pub endpoint: Option<String>,
    /// Hex encoded `key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`IMGPROXY_KEY`]
    pub key: Option<String>,
    /// Hex encoded `salt` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`IMGPROXY_SALT`]
    pub salt: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set hex encoded key
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set hex encoded salt
    pub fn with_salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = Some(salt.into());
        self
    }

    /// Load config from env.
    ///
    /// Fields that are already set are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(IMGPROXY_ENDPOINT) {
            debug!("load endpoint from env {IMGPROXY_ENDPOINT}");
            self.endpoint.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(IMGPROXY_KEY) {
            debug!("load key from env {IMGPROXY_KEY}");
            self.key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(IMGPROXY_SALT) {
            debug!("load salt from env {IMGPROXY_SALT}");
            self.salt.get_or_insert(v);
        }

        self
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("key", &Redact::from(&self.key))
            .field("salt", &Redact::from(&self.salt))
            .finish()
    }
}
