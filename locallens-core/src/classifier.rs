//! Filename-based photo classifier.
//!
//! LocalLens does not look at pixels. An upload's "insight" is chosen from an
//! ordered keyword table matched against the lower-cased file name; the first
//! keyword found wins and anything unmatched falls back to [`Insight::Landmark`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// The insight categories LocalLens can report for an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Insight {
    HistoricalMonument,
    NativeFlower,
    FoodMenu,
    StreetSign,
    /// Fallback when no keyword matches.
    Landmark,
}

impl Insight {
    /// Human-readable sentence returned to clients and stored in the record log.
    pub fn message(self) -> &'static str {
        match self {
            Insight::HistoricalMonument => {
                "This appears to be a monument of historical significance."
            }
            Insight::NativeFlower => "This might be a native flower species.",
            Insight::FoodMenu => "This looks like a food menu.",
            Insight::StreetSign => "This might be a street or informational sign.",
            Insight::Landmark => "Possibly a local landmark or item of interest.",
        }
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Keyword rules in priority order. A name containing several keywords gets
/// the insight of the first one listed here.
pub const RULES: &[(&str, Insight)] = &[
    ("monument", Insight::HistoricalMonument),
    ("flower", Insight::NativeFlower),
    ("menu", Insight::FoodMenu),
    ("sign", Insight::StreetSign),
];

/// Classify an upload by its original file name.
///
/// Matching is case-insensitive; callers may pass the name as received.
///
/// ```
/// use locallens_core::{classify, Insight};
///
/// assert_eq!(classify("IMG_Flower_2023.jpg"), Insight::NativeFlower);
/// assert_eq!(classify("random.jpg"), Insight::Landmark);
/// ```
pub fn classify(file_name: &str) -> Insight {
    let name = file_name.to_lowercase();

    RULES
        .iter()
        .find(|(keyword, _)| name.contains(keyword))
        .map(|(_, insight)| *insight)
        .unwrap_or(Insight::Landmark)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_keyword_maps_to_its_insight() {
        assert_eq!(classify("old_monument.jpg"), Insight::HistoricalMonument);
        assert_eq!(classify("flower.png"), Insight::NativeFlower);
        assert_eq!(classify("lunch-menu.jpeg"), Insight::FoodMenu);
        assert_eq!(classify("stop_sign.jpg"), Insight::StreetSign);
    }

    #[test]
    fn test_fallback_for_unknown_names() {
        assert_eq!(classify("random.jpg"), Insight::Landmark);
        assert_eq!(classify(""), Insight::Landmark);
        assert_eq!(
            classify("random.jpg").message(),
            "Possibly a local landmark or item of interest."
        );
    }

    #[test]
    fn test_matching_ignores_case() {
        assert_eq!(classify("IMG_Flower_2023.jpg"), Insight::NativeFlower);
        assert_eq!(classify("MONUMENT.JPG"), Insight::HistoricalMonument);
        assert!(classify("IMG_Flower_2023.jpg")
            .message()
            .contains("native flower species"));
    }

    #[test]
    fn test_first_listed_keyword_wins() {
        // "monument" outranks "flower" regardless of position in the name
        assert_eq!(
            classify("flower_bed_by_monument.jpg"),
            Insight::HistoricalMonument
        );
        assert_eq!(classify("menu_sign.jpg"), Insight::FoodMenu);
        // "design" contains "sign"
        assert_eq!(classify("design.png"), Insight::StreetSign);
    }

    #[test]
    fn test_classification_is_deterministic() {
        for name in ["menu.png", "random.jpg", "Sign.JPG", "monument-flower"] {
            assert_eq!(classify(name), classify(name));
            assert_eq!(classify(name).message(), classify(name).message());
        }
    }

    #[test]
    fn test_menu_insight_mentions_menu() {
        assert!(classify("menu.png").message().contains("menu"));
    }
}
