// src/engine/intent.rs
//! Keyword intent classifier.
//!
//! Only feeds the instruction prompt's `Focus` line. Replies from
//! [`get_reply`](crate::engine::get_reply) always report
//! `exploring_feelings`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    SeekingSupport,
    Venting,
    SeekingAdvice,
    ExploringFeelings,
    ProblemSolving,
    /// Crisis path only
    Safety,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::SeekingSupport => "seeking_support",
            Intent::Venting => "venting",
            Intent::SeekingAdvice => "seeking_advice",
            Intent::ExploringFeelings => "exploring_feelings",
            Intent::ProblemSolving => "problem_solving",
            Intent::Safety => "safety",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// (intent, lowercase substring triggers), first match wins.
const INTENT_TABLE: &[(Intent, &[&str])] = &[
    (
        Intent::SeekingSupport,
        &["help", "support", "talk", "listen", "need someone", "be there"],
    ),
    (
        Intent::Venting,
        &["just need to say", "get this off my chest", "need to vent", "let it out"],
    ),
    (
        Intent::SeekingAdvice,
        &["what should", "how do i", "advice", "suggest", "recommend", "tell me"],
    ),
    (
        Intent::ExploringFeelings,
        &["feel", "feeling", "emotion", "experience", "going through"],
    ),
    (
        Intent::ProblemSolving,
        &["problem", "issue", "situation", "how to handle", "deal with"],
    ),
];

/// Classify what the user seems to want from the conversation.
pub fn classify_intent(utterance: &str) -> Intent {
    let lower = utterance.to_lowercase();

    INTENT_TABLE
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::ExploringFeelings)
}
