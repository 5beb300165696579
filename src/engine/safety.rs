// src/engine/safety.rs
// Crisis keyword scan and safety resources

use serde::Serialize;

/// Phrases indicating self-harm or suicide risk.
///
/// Matched as plain substrings of the lowercased message, no word boundaries.
/// Over-triggering is accepted here; missing a crisis is not.
pub const CRISIS_KEYWORDS: &[&str] = &[
    "suicide",
    "kill myself",
    "end my life",
    "want to die",
    "better off dead",
    "self-harm",
    "hurt myself",
    "cut myself",
    "overdose",
    "end it all",
];

/// Crisis lines, in the order they are shown.
pub const SAFETY_RESOURCES: &[&str] = &[
    "National Helpline: 988 (US)",
    "Crisis Text: Text HOME to 741741",
    "International: https://www.iasp.info/resources/Crisis_Centres/",
];

/// Shown verbatim whenever the scan triggers. Never randomized.
pub const CRISIS_MESSAGE: &str = "I'm deeply concerned by what you're sharing. Your safety is paramount. Please reach out to a support line immediately. There are professionals available 24/7 who can truly help.";

/// Outcome of [`check_safety`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafetyAlert {
    pub triggered: bool,
    pub message: &'static str,
    pub resources: &'static [&'static str],
}

impl SafetyAlert {
    fn clear() -> Self {
        Self {
            triggered: false,
            message: "",
            resources: &[],
        }
    }

    fn crisis() -> Self {
        Self {
            triggered: true,
            message: CRISIS_MESSAGE,
            resources: SAFETY_RESOURCES,
        }
    }

    /// Alert message followed by the resource list, one per line.
    pub fn render(&self) -> String {
        if !self.triggered {
            return String::new();
        }
        format!("{}\n\nResources:\n{}", self.message, self.resources.join("\n"))
    }
}

/// Scan a message for crisis language.
pub fn check_safety(utterance: &str) -> SafetyAlert {
    let lower = utterance.to_lowercase();

    if CRISIS_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        SafetyAlert::crisis()
    } else {
        SafetyAlert::clear()
    }
}
