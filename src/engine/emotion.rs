// src/engine/emotion.rs
//! Keyword-based emotion detection.
//!
//! Categories are checked in table order and the first one with any keyword
//! hit wins. Reordering [`KEYWORD_TABLE`] changes how multi-keyword messages
//! are classified.

use serde::{Deserialize, Serialize};

/// Emotional category a message is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionCategory {
    Anxious,
    Depressed,
    Angry,
    Overwhelmed,
    Confused,
    Hopeful,
    /// Fallback when nothing matches
    General,
}

impl EmotionCategory {
    /// All categories, in keyword-table order with `General` last.
    pub const ALL: [EmotionCategory; 7] = [
        EmotionCategory::Anxious,
        EmotionCategory::Depressed,
        EmotionCategory::Angry,
        EmotionCategory::Overwhelmed,
        EmotionCategory::Confused,
        EmotionCategory::Hopeful,
        EmotionCategory::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionCategory::Anxious => "anxious",
            EmotionCategory::Depressed => "depressed",
            EmotionCategory::Angry => "angry",
            EmotionCategory::Overwhelmed => "overwhelmed",
            EmotionCategory::Confused => "confused",
            EmotionCategory::Hopeful => "hopeful",
            EmotionCategory::General => "general",
        }
    }
}

impl std::fmt::Display for EmotionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EmotionCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        EmotionCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| format!("unknown emotion category: {}", s))
    }
}

// ── Keyword table ───────────────────────────────────────────────────────

/// (category, lowercase substring triggers), checked top to bottom.
pub const KEYWORD_TABLE: &[(EmotionCategory, &[&str])] = &[
    (
        EmotionCategory::Anxious,
        &["worried", "anxious", "nervous", "scared", "panic", "afraid", "fear"],
    ),
    (
        EmotionCategory::Depressed,
        &["sad", "depressed", "hopeless", "empty", "numb", "worthless", "alone"],
    ),
    (
        EmotionCategory::Angry,
        &["angry", "furious", "mad", "frustrated", "irritated", "rage"],
    ),
    (
        EmotionCategory::Overwhelmed,
        &["overwhelmed", "stressed", "too much", "can't cope", "drowning"],
    ),
    (
        EmotionCategory::Confused,
        &["confused", "lost", "don't know", "uncertain", "unsure"],
    ),
    (
        EmotionCategory::Hopeful,
        &["hopeful", "better", "improving", "positive", "good"],
    ),
];

/// Classify a message into an [`EmotionCategory`].
///
/// Plain substring matching on the lowercased text, so "mad" also fires
/// inside "made". Returns [`EmotionCategory::General`] when no keyword hits.
pub fn detect_emotion(utterance: &str) -> EmotionCategory {
    let lower = utterance.to_lowercase();

    KEYWORD_TABLE
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(category, _)| *category)
        .unwrap_or(EmotionCategory::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // detect_emotion tests
    // ============================================================================

    #[test]
    fn test_detects_each_category() {
        assert_eq!(detect_emotion("I feel so anxious and scared"), EmotionCategory::Anxious);
        assert_eq!(detect_emotion("everything feels empty"), EmotionCategory::Depressed);
        assert_eq!(detect_emotion("I'm furious at them"), EmotionCategory::Angry);
        assert_eq!(detect_emotion("work is too much lately"), EmotionCategory::Overwhelmed);
        assert_eq!(detect_emotion("I'm just unsure what's next"), EmotionCategory::Confused);
        assert_eq!(detect_emotion("things are improving"), EmotionCategory::Hopeful);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(detect_emotion("I AM WORRIED"), EmotionCategory::Anxious);
        assert_eq!(detect_emotion("Can't Cope anymore"), EmotionCategory::Overwhelmed);
    }

    #[test]
    fn test_no_match_is_general() {
        assert_eq!(detect_emotion(""), EmotionCategory::General);
        assert_eq!(detect_emotion("the weather today"), EmotionCategory::General);
    }

    #[test]
    fn test_first_match_wins_by_table_order() {
        // angry + anxious keywords: anxious is checked first
        assert_eq!(detect_emotion("I'm angry and nervous"), EmotionCategory::Anxious);
        // hopeful + depressed: depressed is checked first
        assert_eq!(detect_emotion("good days but mostly sad"), EmotionCategory::Depressed);
    }

    #[test]
    fn test_substring_not_word_boundary() {
        // "made" contains "mad"
        assert_eq!(detect_emotion("I made dinner"), EmotionCategory::Angry);
    }

    #[test]
    fn test_deterministic_across_calls() {
        let first = detect_emotion("stressed and confused");
        for _ in 0..20 {
            assert_eq!(detect_emotion("stressed and confused"), first);
        }
        assert_eq!(first, EmotionCategory::Overwhelmed);
    }

    // ============================================================================
    // Table and enum tests
    // ============================================================================

    #[test]
    fn test_table_order_is_fixed() {
        let order: Vec<_> = KEYWORD_TABLE.iter().map(|(c, _)| *c).collect();
        assert_eq!(order, EmotionCategory::ALL[..6].to_vec());
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for (_, keywords) in KEYWORD_TABLE {
            assert!(!keywords.is_empty());
            for kw in *keywords {
                assert_eq!(*kw, kw.to_lowercase());
            }
        }
    }

    #[test]
    fn test_from_str_roundtrip() {
        for category in EmotionCategory::ALL {
            assert_eq!(category.as_str().parse::<EmotionCategory>(), Ok(category));
        }
        assert_eq!("Anxious".parse::<EmotionCategory>(), Ok(EmotionCategory::Anxious));
        assert!("ecstatic".parse::<EmotionCategory>().is_err());
    }

    #[test]
    fn test_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&EmotionCategory::Overwhelmed).unwrap(),
            "\"overwhelmed\""
        );
    }
}
