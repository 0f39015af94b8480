use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::errors::{AppError, ConfigResult};
use crate::domain::images::AllowedOrigins;
use crate::domain::ratings::RouteContext;

pub const DEFAULT_AMO_CDN: &str = "https://addons.cdn.mozilla.net";
pub const DEFAULT_FALLBACK_ICON: &str = "/static/img/icons/default-64.png";

/// Front-end settings the display logic depends on. Loaded once by the host
/// page and passed in; nothing here is read from ambient state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FrontendConfig {
    pub amo_cdn: String,
    /// Origins images may be served from
    pub allowed_origins: Vec<String>,
    pub fallback_icon: String,
    pub client_app: String,
    pub lang: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            amo_cdn: DEFAULT_AMO_CDN.to_string(),
            allowed_origins: vec![DEFAULT_AMO_CDN.to_string()],
            fallback_icon: DEFAULT_FALLBACK_ICON.to_string(),
            client_app: "firefox".to_string(),
            lang: "en-US".to_string(),
        }
    }
}

static DEFAULT_CONFIG: Lazy<FrontendConfig> = Lazy::new(FrontendConfig::default);

impl FrontendConfig {
    /// Process-wide defaults
    pub fn global_default() -> &'static FrontendConfig {
        &DEFAULT_CONFIG
    }

    /// Parses and validates; missing keys take their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| AppError::Config(format!("invalid config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.allowed_origins.is_empty() {
            return Err(AppError::Config("allowedOrigins must not be empty".to_string()));
        }
        if self.lang.is_empty() || self.client_app.is_empty() {
            return Err(AppError::Config("lang and clientApp are required".to_string()));
        }
        self.allowed_origins().map(|_| ())
    }

    pub fn allowed_origins(&self) -> ConfigResult<AllowedOrigins> {
        AllowedOrigins::new(&self.allowed_origins)
    }

    pub fn route_context(&self, src: Option<&str>) -> RouteContext {
        let route = RouteContext::new(&self.lang, &self.client_app);
        match src {
            Some(src) => route.with_src(src),
            None => route,
        }
    }
}
