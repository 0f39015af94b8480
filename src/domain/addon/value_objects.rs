use derive_more::{Constructor, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// Pixel dimensions, serialized as `[width, height]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, From, Constructor, Serialize, Deserialize)]
pub struct ImageSize(u32, u32);

impl ImageSize {
    pub fn width(&self) -> u32 {
        self.0
    }

    pub fn height(&self) -> u32 {
        self.1
    }
}

/// Add-on identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into, Deref, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AddonId(u64);

impl AddonId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// One of the five star buckets. Iterates from five down to one, which is
/// the order rows are displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
pub enum StarRating {
    #[strum(serialize = "5")]
    #[serde(rename = "5")]
    Five,
    #[strum(serialize = "4")]
    #[serde(rename = "4")]
    Four,
    #[strum(serialize = "3")]
    #[serde(rename = "3")]
    Three,
    #[strum(serialize = "2")]
    #[serde(rename = "2")]
    Two,
    #[strum(serialize = "1")]
    #[serde(rename = "1")]
    One,
}

impl StarRating {
    pub fn value(&self) -> u8 {
        match self {
            Self::Five => 5,
            Self::Four => 4,
            Self::Three => 3,
            Self::Two => 2,
            Self::One => 1,
        }
    }

    /// English word used in link titles ("five-star reviews")
    pub fn word(&self) -> &'static str {
        match self {
            Self::Five => "five",
            Self::Four => "four",
            Self::Three => "three",
            Self::Two => "two",
            Self::One => "one",
        }
    }
}
