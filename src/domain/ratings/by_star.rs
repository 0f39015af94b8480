use serde::Serialize;
use strum::IntoEnumIterator;

use super::review_url::{ReviewListQuery, RouteContext, review_list_url};
use crate::domain::addon::{Addon, AddonId, GroupedRatings, StarRating};
use crate::domain::errors::AppResult;
use crate::domain::messages::MessageCatalog;

/// Rounds half towards positive infinity, like the browser's `Math.round`.
/// `value - floor` is exact, so values just below a tie are not pushed over it.
pub(crate) fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Share of all ratings that fall in one star bucket, as a whole percentage.
pub fn bar_width_percent(star_count: u64, total_count: Option<u64>) -> u32 {
    match total_count {
        Some(total) if total > 0 => round_half_up(star_count as f64 / total as f64 * 100.0) as u32,
        _ => 0,
    }
}

/// Anything short of a full bar gets square right corners.
pub fn is_partial_bar(width: u32) -> bool {
    width < 100
}

/// Hover title of a star row. An unknown count leaves a blank in the text.
pub fn link_title(star: StarRating, count: Option<u64>, catalog: &dyn MessageCatalog) -> String {
    let count = count.map(|c| c.to_string()).unwrap_or_default();
    catalog.gettext(&format!("Read all {} {}-star reviews", count, star.word()))
}

/// The add-on whose grouped ratings must be fetched, if any.
pub fn needs_grouped_ratings(addon: Option<&Addon>, grouped: Option<&GroupedRatings>, has_error: bool) -> Option<AddonId> {
    match (addon, grouped) {
        (Some(addon), None) if !has_error => Some(addon.id),
        _ => None,
    }
}

/// Key under which fetch errors for this component are tracked.
pub fn error_handler_id(addon: Option<&Addon>) -> String {
    addon.map(|a| format!("addon-{}", a.id)).unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum BarState {
    /// Placeholder frame while data loads
    Loading,
    /// Frame with no value bar (count unknown)
    Empty,
    Value { width: u32, partial: bool },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowLink {
    pub title: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StarRow {
    pub star: StarRating,
    /// `None` while loading
    pub star_label: Option<String>,
    /// `None` while loading or when the fetch failed
    pub count_text: Option<String>,
    pub bar: BarState,
    pub link: Option<RowLink>,
}

/// Display state of the five-row star breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingsByStarModel {
    pub loading: bool,
    pub has_error: bool,
    pub rows: Vec<StarRow>,
}

impl RatingsByStarModel {
    pub fn build(
        addon: Option<&Addon>,
        grouped: Option<&GroupedRatings>,
        has_error: bool,
        route: &RouteContext,
        catalog: &dyn MessageCatalog,
    ) -> AppResult<Self> {
        let loading = (addon.is_none() || grouped.is_none()) && !has_error;

        let rows = StarRating::iter()
            .map(|star| -> AppResult<StarRow> {
                let star_count = if has_error { None } else { grouped.and_then(|g| g.count(star)) };

                let count_text = if loading || has_error {
                    None
                } else {
                    Some(catalog.format_number(star_count.unwrap_or(0) as f64))
                };

                let bar = match (loading, star_count) {
                    (true, _) => BarState::Loading,
                    (false, None) => BarState::Empty,
                    (false, Some(count)) => {
                        let width = bar_width_percent(count, addon.and_then(Addon::rating_count));
                        BarState::Value { width, partial: is_partial_bar(width) }
                    }
                };

                let link = match addon {
                    Some(addon) if !loading => Some(RowLink {
                        title: link_title(star, star_count, catalog),
                        href: route.absolute(&review_list_url(&ReviewListQuery {
                            addon_slug: &addon.slug,
                            score: Some(star.as_ref()),
                            src: route.src.as_deref(),
                            ..Default::default()
                        })?),
                    }),
                    _ => None,
                };

                Ok(StarRow {
                    star,
                    star_label: (!loading).then(|| catalog.format_number(star.value() as f64)),
                    count_text,
                    bar,
                    link,
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self { loading, has_error, rows })
    }
}
