use std::fmt;

use serde::{Deserialize, Serialize};

/// One scraped product record. `category` holds the search query that
/// produced the row. `price_category` is derived over the full table at
/// dashboard load time and is never written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub title: String,
    pub price: f64,
    pub rating: Option<f64>,
    pub reviews: u32,
    pub link: String,
    pub category: String,
    #[serde(skip)]
    pub price_category: Option<PriceCategory>,
}

/// Equal-population price bucket over the collected set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceCategory {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl PriceCategory {
    pub const ALL: [PriceCategory; 4] = [
        PriceCategory::Q1,
        PriceCategory::Q2,
        PriceCategory::Q3,
        PriceCategory::Q4,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceCategory::Q1 => "Q1",
            PriceCategory::Q2 => "Q2",
            PriceCategory::Q3 => "Q3",
            PriceCategory::Q4 => "Q4",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Q1" => Some(PriceCategory::Q1),
            "Q2" => Some(PriceCategory::Q2),
            "Q3" => Some(PriceCategory::Q3),
            "Q4" => Some(PriceCategory::Q4),
            _ => None,
        }
    }
}

impl fmt::Display for PriceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
