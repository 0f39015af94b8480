use serde::Serialize;

use super::by_star::round_half_up;
use super::review_url::{ReviewListQuery, review_list_url};
use crate::domain::addon::Addon;
use crate::domain::errors::AppResult;
use crate::domain::messages::{MessageCatalog, sprintf};

/// `4.56 -> 4.6`; missing, zero and NaN averages become `0`.
pub fn round_to_one_digit(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v != 0.0 && !v.is_nan() => round_half_up(v * 10.0) / 10.0,
        _ => 0.0,
    }
}

/// One cell of the metadata card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataItem {
    /// `None` while the add-on is loading, `Some("")` when there is nothing to count
    pub content: Option<String>,
    pub title: String,
    /// When set, both content and title link here
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingItem {
    pub average_rating: Option<f64>,
    pub title: String,
}

/// Users / reviews / stars summary shown at the top of an add-on page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddonMetaSummary {
    pub users: MetadataItem,
    pub reviews: MetadataItem,
    pub rating: RatingItem,
}

impl AddonMetaSummary {
    pub fn build(addon: Option<&Addon>, src: Option<&str>, catalog: &dyn MessageCatalog) -> AppResult<Self> {
        let average_rating = addon.and_then(|a| a.ratings).map(|r| r.average);
        let rating_count = addon.and_then(Addon::rating_count).filter(|&count| count > 0);

        let users = match addon {
            None => MetadataItem { content: None, title: catalog.gettext("Users"), link: None },
            Some(addon) => match addon.average_daily_users.filter(|&users| users > 0) {
                Some(users) => MetadataItem {
                    content: Some(catalog.format_number(users as f64)),
                    title: catalog.ngettext("User", "Users", users as f64),
                    link: None,
                },
                None => MetadataItem {
                    content: Some(String::new()),
                    title: catalog.gettext("No Users"),
                    link: None,
                },
            },
        };

        let reviews = match (addon, rating_count) {
            (None, _) => MetadataItem { content: None, title: catalog.gettext("Reviews"), link: None },
            (Some(addon), Some(count)) => MetadataItem {
                content: Some(catalog.format_number(count as f64)),
                title: catalog.ngettext("Review", "Reviews", count as f64),
                link: Some(review_list_url(&ReviewListQuery {
                    addon_slug: &addon.slug,
                    src,
                    ..Default::default()
                })?),
            },
            (Some(_), None) => MetadataItem {
                content: Some(String::new()),
                title: catalog.gettext("No Reviews"),
                link: None,
            },
        };

        let rounded = round_to_one_digit(average_rating);
        let rating_title = if rating_count.is_some() {
            let total = catalog.format_number(rounded);
            sprintf(
                &catalog.ngettext("%(total)s Star", "%(total)s Stars", rounded),
                &[("total", total.as_str())],
            )
        } else {
            catalog.gettext("Not rated yet")
        };

        Ok(Self {
            users,
            reviews,
            rating: RatingItem { average_rating, title: rating_title },
        })
    }
}
