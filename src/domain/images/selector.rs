use serde::{Deserialize, Serialize};

use super::origin::OriginPolicy;
use crate::domain::addon::{Addon, Preview};
use crate::domain::errors::{AppError, ImageResult};
use crate::domain::logging::LogComponent;
use crate::log_debug;

/// Width of the "standard" full-size preview.
pub const STANDARD_PREVIEW_WIDTH: u32 = 720;

/// Which preview image to pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreviewOptions {
    /// Read `image_url` rather than `thumbnail_url`.
    pub full: bool,
    /// Prefer a preview whose full image is [`STANDARD_PREVIEW_WIDTH`] wide.
    pub use_standard_size: bool,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self { full: true, use_standard_size: false }
    }
}

impl PreviewOptions {
    pub fn thumbnail() -> Self {
        Self { full: false, use_standard_size: false }
    }

    pub fn standard_size() -> Self {
        Self { full: true, use_standard_size: true }
    }

    /// There is no standard thumbnail size, so that combination is rejected.
    pub fn validate(&self) -> ImageResult<()> {
        if self.use_standard_size && !self.full {
            return Err(AppError::InvalidOptions(
                "Currently there is no 'standard' thumbnail size; \
                 useStandardSize requires full to be true"
                    .to_string(),
            ));
        }
        Ok(())
    }

    fn url_of<'a>(&self, preview: &'a Preview) -> &'a str {
        if self.full { preview.image_url.as_str() } else { preview.thumbnail_url.as_str() }
    }
}

/// Picks the image URL to represent an add-on.
///
/// Only one preview is ever considered: the first standard-size one when
/// `use_standard_size` is set and such a preview exists, otherwise the first
/// preview. If that preview's URL is empty or rejected by `policy`, the result
/// is `None`; later previews are not tried.
pub fn get_preview_image(
    addon: Option<&Addon>,
    options: PreviewOptions,
    policy: &dyn OriginPolicy,
) -> ImageResult<Option<String>> {
    options.validate()?;

    let Some(previews) = addon.map(|a| a.previews.as_slice()).filter(|p| !p.is_empty()) else {
        return Ok(None);
    };

    let standard = if options.use_standard_size {
        previews
            .iter()
            .position(|p| p.image_size.width() == STANDARD_PREVIEW_WIDTH)
    } else {
        None
    };
    let index = standard.unwrap_or(0);
    let url = options.url_of(&previews[index]);

    if url.is_empty() {
        log_debug!(LogComponent::Domain("PreviewImage"), "preview {} has no url", index);
        return Ok(None);
    }
    if !policy.is_allowed(url) {
        log_debug!(
            LogComponent::Domain("PreviewImage"),
            "preview {} rejected by origin policy: {}",
            index,
            url
        );
        return Ok(None);
    }

    Ok(Some(url.to_string()))
}
