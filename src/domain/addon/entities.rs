pub use super::value_objects::{AddonId, ImageSize, StarRating};
use serde::{Deserialize, Serialize};

/// One preview image of an add-on: a full image and its thumbnail
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preview {
    pub image_url: String,
    pub thumbnail_url: String,
    pub image_size: ImageSize,
    pub thumbnail_size: ImageSize,
}

impl Preview {
    pub fn new(image_url: &str, image_size: ImageSize) -> Self {
        Self {
            image_url: image_url.to_string(),
            image_size,
            ..Default::default()
        }
    }

    pub fn with_thumbnail(mut self, thumbnail_url: &str, thumbnail_size: ImageSize) -> Self {
        self.thumbnail_url = thumbnail_url.to_string();
        self.thumbnail_size = thumbnail_size;
        self
    }
}

/// Aggregate rating of an add-on
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddonRatings {
    pub average: f64,
    pub count: u64,
}

/// Add-on as normalized by the data layer. Only the fields the display
/// logic reads are modelled; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Addon {
    pub id: AddonId,
    pub slug: String,
    #[serde(default)]
    pub previews: Vec<Preview>,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub ratings: Option<AddonRatings>,
    #[serde(default)]
    pub average_daily_users: Option<u64>,
}

impl Addon {
    pub fn new(id: u64, slug: &str) -> Self {
        Self {
            id: AddonId::from(id),
            slug: slug.to_string(),
            previews: Vec::new(),
            icon_url: None,
            ratings: None,
            average_daily_users: None,
        }
    }

    pub fn with_previews(mut self, previews: Vec<Preview>) -> Self {
        self.previews = previews;
        self
    }

    pub fn with_ratings(mut self, average: f64, count: u64) -> Self {
        self.ratings = Some(AddonRatings { average, count });
        self
    }

    /// Total number of ratings, `None` when the add-on carries no ratings record
    pub fn rating_count(&self) -> Option<u64> {
        self.ratings.map(|r| r.count)
    }
}

/// Number of ratings per star bucket, as returned by the grouped ratings
/// endpoint (`{"1": n, ..., "5": n}`). A bucket missing from the payload
/// stays `None` rather than counting as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupedRatings {
    #[serde(rename = "1")]
    pub one: Option<u64>,
    #[serde(rename = "2")]
    pub two: Option<u64>,
    #[serde(rename = "3")]
    pub three: Option<u64>,
    #[serde(rename = "4")]
    pub four: Option<u64>,
    #[serde(rename = "5")]
    pub five: Option<u64>,
}

impl GroupedRatings {
    /// Counts ordered five stars down to one star
    pub fn from_counts([five, four, three, two, one]: [u64; 5]) -> Self {
        Self {
            one: Some(one),
            two: Some(two),
            three: Some(three),
            four: Some(four),
            five: Some(five),
        }
    }

    pub fn count(&self, star: StarRating) -> Option<u64> {
        match star {
            StarRating::Five => self.five,
            StarRating::Four => self.four,
            StarRating::Three => self.three,
            StarRating::Two => self.two,
            StarRating::One => self.one,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addon_parses_api_json() {
        let json = r#"{
            "id": 5,
            "slug": "ublock",
            "name": "ignored",
            "previews": [
                {"image_url": "https://cdn/full.png", "image_size": [720, 520]},
                {"thumbnail_url": "https://cdn/thumb.png", "thumbnail_size": [533, 400]}
            ],
            "ratings": {"average": 4.56, "count": 120}
        }"#;
        let addon: Addon = serde_json::from_str(json).unwrap();
        assert_eq!(addon.id.value(), 5);
        assert_eq!(addon.previews.len(), 2);
        assert_eq!(addon.previews[0].thumbnail_url, "");
        assert_eq!(addon.previews[1].image_size, ImageSize::default());
        assert_eq!(addon.rating_count(), Some(120));
        assert_eq!(addon.average_daily_users, None);
    }

    #[test]
    fn grouped_ratings_parse_numeric_keys() {
        let grouped: GroupedRatings =
            serde_json::from_str(r#"{"1": 2, "2": 0, "3": 4, "5": 10}"#).unwrap();
        assert_eq!(grouped.count(StarRating::Five), Some(10));
        assert_eq!(grouped.count(StarRating::Two), Some(0));
        assert_eq!(grouped.count(StarRating::Four), None);
        assert_eq!(GroupedRatings::from_counts([10, 0, 4, 0, 2]).count(StarRating::One), Some(2));
    }
}
