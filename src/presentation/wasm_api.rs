//! JavaScript bindings. Everything crosses the boundary as JSON strings so
//! the JS side can pass API payloads through untouched.

use std::cell::RefCell;

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

use crate::application::AddonDisplayService;
use crate::config::FrontendConfig;
use crate::domain::{
    addon::{Addon, GroupedRatings},
    errors::AppError,
    images::PreviewOptions,
    logging::LogComponent,
    messages::EnglishCatalog,
};
use crate::log_info;

thread_local! {
    static SERVICE: RefCell<Option<AddonDisplayService>> = const { RefCell::new(None) };
}

fn to_js(error: AppError) -> JsValue {
    js_sys::Error::new(&error.to_string()).into()
}

/// `None`, empty and `"null"` all mean "no value yet".
fn parse_optional<T: DeserializeOwned>(json: Option<String>, what: &str) -> Result<Option<T>, JsValue> {
    match json.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => serde_json::from_str::<Option<T>>(raw)
            .map_err(|e| to_js(AppError::Validation(format!("{what}: {e}")))),
    }
}

fn with_service<R>(f: impl FnOnce(&AddonDisplayService) -> Result<R, AppError>) -> Result<R, JsValue> {
    SERVICE.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            *slot = Some(AddonDisplayService::with_defaults().map_err(to_js)?);
        }
        match slot.as_ref() {
            Some(service) => f(service).map_err(to_js),
            None => Err(to_js(AppError::Config("display service unavailable".to_string()))),
        }
    })
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| to_js(AppError::Validation(e.to_string())))
}

/// Replace the default configuration.
#[wasm_bindgen]
pub fn configure(config_json: &str) -> Result<(), JsValue> {
    let config = FrontendConfig::from_json(config_json).map_err(to_js)?;
    let service = AddonDisplayService::new(config, Box::new(EnglishCatalog)).map_err(to_js)?;
    SERVICE.with(|cell| *cell.borrow_mut() = Some(service));
    log_info!(LogComponent::Presentation("WASM"), "configuration updated");
    Ok(())
}

/// Throws when `useStandardSize` is set without `full`.
#[wasm_bindgen(js_name = getPreviewImage)]
pub fn get_preview_image(addon_json: Option<String>, options_json: Option<String>) -> Result<Option<String>, JsValue> {
    let addon: Option<Addon> = parse_optional(addon_json, "addon")?;
    let options: PreviewOptions = parse_optional(options_json, "options")?.unwrap_or_default();
    with_service(|service| service.preview_image(addon.as_ref(), options))
}

#[wasm_bindgen(js_name = getAddonIconUrl)]
pub fn get_addon_icon_url(addon_json: Option<String>) -> Result<String, JsValue> {
    let addon: Option<Addon> = parse_optional(addon_json, "addon")?;
    with_service(|service| Ok(service.icon_url(addon.as_ref())))
}

/// Row model for the star breakdown, as JSON.
#[wasm_bindgen(js_name = ratingsByStar)]
pub fn ratings_by_star(
    addon_json: Option<String>,
    grouped_json: Option<String>,
    has_error: bool,
    src: Option<String>,
) -> Result<String, JsValue> {
    let addon: Option<Addon> = parse_optional(addon_json, "addon")?;
    let grouped: Option<GroupedRatings> = parse_optional(grouped_json, "groupedRatings")?;
    let model = with_service(|service| {
        service.ratings_by_star(addon.as_ref(), grouped.as_ref(), has_error, src.as_deref())
    })?;
    to_json(&model)
}

/// Metadata card summary, as JSON.
#[wasm_bindgen(js_name = addonMeta)]
pub fn addon_meta(addon_json: Option<String>, src: Option<String>) -> Result<String, JsValue> {
    let addon: Option<Addon> = parse_optional(addon_json, "addon")?;
    let summary = with_service(|service| service.meta_summary(addon.as_ref(), src.as_deref()))?;
    to_json(&summary)
}
