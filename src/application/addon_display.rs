use crate::config::FrontendConfig;
use crate::domain::{
    addon::{Addon, GroupedRatings},
    errors::AppResult,
    images::{AllowedOrigins, PreviewOptions, get_addon_icon_url, get_preview_image},
    logging::LogComponent,
    messages::{EnglishCatalog, MessageCatalog},
    ratings::{AddonMetaSummary, RatingsByStarModel},
};
use crate::{log_debug, log_error};

/// Entry point for rendering layers: binds the configured origin policy,
/// message catalog and route to the pure display functions.
pub struct AddonDisplayService {
    config: FrontendConfig,
    origins: AllowedOrigins,
    catalog: Box<dyn MessageCatalog>,
}

impl AddonDisplayService {
    pub fn new(config: FrontendConfig, catalog: Box<dyn MessageCatalog>) -> AppResult<Self> {
        config.validate()?;
        let origins = config.allowed_origins()?;
        log_debug!(
            LogComponent::Application("AddonDisplay"),
            "allowed origins: {}",
            origins.origins().join(", ")
        );
        Ok(Self { config, origins, catalog })
    }

    /// Default config and untranslated English.
    pub fn with_defaults() -> AppResult<Self> {
        Self::new(FrontendConfig::global_default().clone(), Box::new(EnglishCatalog))
    }

    pub fn config(&self) -> &FrontendConfig {
        &self.config
    }

    pub fn preview_image(&self, addon: Option<&Addon>, options: PreviewOptions) -> AppResult<Option<String>> {
        get_preview_image(addon, options, &self.origins).inspect_err(|e| {
            log_error!(LogComponent::Application("AddonDisplay"), "preview image: {}", e);
        })
    }

    pub fn icon_url(&self, addon: Option<&Addon>) -> String {
        get_addon_icon_url(addon, &self.origins, &self.config.fallback_icon)
    }

    pub fn ratings_by_star(
        &self,
        addon: Option<&Addon>,
        grouped: Option<&GroupedRatings>,
        has_error: bool,
        src: Option<&str>,
    ) -> AppResult<RatingsByStarModel> {
        let route = self.config.route_context(src);
        RatingsByStarModel::build(addon, grouped, has_error, &route, self.catalog.as_ref())
    }

    pub fn meta_summary(&self, addon: Option<&Addon>, src: Option<&str>) -> AppResult<AddonMetaSummary> {
        AddonMetaSummary::build(addon, src, self.catalog.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::addon::{ImageSize, Preview};

    #[test]
    fn uses_configured_origins() {
        let config = FrontendConfig {
            allowed_origins: vec!["https://cdn.example".to_string()],
            ..Default::default()
        };
        let service = AddonDisplayService::new(config, Box::new(EnglishCatalog)).unwrap();
        let addon = Addon::new(1, "a").with_previews(vec![Preview::new(
            "https://cdn.example/full/12345.png",
            ImageSize::new(720, 520),
        )]);
        assert_eq!(
            service.preview_image(Some(&addon), PreviewOptions::default()).unwrap().as_deref(),
            Some("https://cdn.example/full/12345.png")
        );
        assert_eq!(service.icon_url(Some(&addon)), service.config().fallback_icon);
    }

    #[test]
    fn rejects_invalid_config() {
        let config = FrontendConfig { allowed_origins: Vec::new(), ..Default::default() };
        assert!(AddonDisplayService::new(config, Box::new(EnglishCatalog)).is_err());
    }
}
