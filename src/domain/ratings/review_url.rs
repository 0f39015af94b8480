use serde::{Deserialize, Serialize};

use crate::domain::errors::{AppError, AppResult};

/// Parameters of a review list link
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewListQuery<'a> {
    pub addon_slug: &'a str,
    pub review_id: Option<u64>,
    pub score: Option<&'a str>,
    pub src: Option<&'a str>,
}

/// `/addon/{slug}/reviews/[{id}/][?score=..&src=..]`
pub fn review_list_url(query: &ReviewListQuery<'_>) -> AppResult<String> {
    if query.addon_slug.is_empty() {
        return Err(AppError::Validation("addonSlug is required".to_string()));
    }

    let mut url = format!("/addon/{}/reviews/", query.addon_slug);
    if let Some(id) = query.review_id {
        url.push_str(&format!("{id}/"));
    }

    let params: Vec<String> = [("score", query.score), ("src", query.src)]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .filter(|v| !v.is_empty())
                .map(|v| format!("{}={}", key, urlencoding::encode(v)))
        })
        .collect();
    if !params.is_empty() {
        url.push('?');
        url.push_str(&params.join("&"));
    }

    Ok(url)
}

/// Where the page lives: site language, client application and the `src`
/// query parameter to carry through links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteContext {
    pub lang: String,
    pub client_app: String,
    #[serde(default)]
    pub src: Option<String>,
}

impl RouteContext {
    pub fn new(lang: &str, client_app: &str) -> Self {
        Self { lang: lang.to_string(), client_app: client_app.to_string(), src: None }
    }

    pub fn with_src(mut self, src: &str) -> Self {
        self.src = Some(src.to_string());
        self
    }

    /// Prefixes an app-relative path with `/{lang}/{client_app}`.
    pub fn absolute(&self, path: &str) -> String {
        format!("/{}/{}{}", self.lang, self.client_app, path)
    }
}
