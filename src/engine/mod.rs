// src/engine/mod.rs
//! Reply engine: crisis scan, emotion detection, fragment assembly.
//!
//! Everything here is synchronous and stateless per call. The only inputs
//! besides the message are the static tables and a [`Picker`].

pub mod composer;
pub mod emotion;
pub mod fragments;
pub mod intent;
pub mod picker;
pub mod safety;

pub use composer::{Composition, compose};
pub use emotion::{EmotionCategory, KEYWORD_TABLE, detect_emotion};
pub use intent::{Intent, classify_intent};
pub use picker::{Picker, SeededPicker, ThreadRngPicker};
pub use safety::{CRISIS_KEYWORDS, SAFETY_RESOURCES, SafetyAlert, check_safety};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Emotion label reported on the crisis path
pub const CRISIS_EMOTION: &str = "concern";

const WELCOME_MESSAGE: &str = "Hello, I'm Ohio Therapy. I'm here to listen and support you through whatever you're experiencing. This is a safe, judgment-free space. What's on your mind today?";

/// Greeting shown at the start of a conversation and after a reset.
pub fn get_welcome_message() -> &'static str {
    WELCOME_MESSAGE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Support,
    StandardCare,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Support => "support",
            Strategy::StandardCare => "standard_care",
        }
    }
}

// ═══════════════════════════════════════
// REPLY TYPES
// ═══════════════════════════════════════

/// Crisis override. Emotion detection and composition never ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrisisReply {
    pub alert: SafetyAlert,
}

/// Normal path: a composed reply for the detected emotion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardReply {
    pub emotion: EmotionCategory,
    pub composition: Composition,
}

/// Outcome of one engine call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Crisis(CrisisReply),
    Standard(StandardReply),
}

impl Reply {
    pub fn is_crisis(&self) -> bool {
        matches!(self, Reply::Crisis(_))
    }

    pub fn message(&self) -> String {
        match self {
            Reply::Crisis(c) => c.alert.render(),
            Reply::Standard(s) => s.composition.render(),
        }
    }

    pub fn emotion(&self) -> &'static str {
        match self {
            Reply::Crisis(_) => CRISIS_EMOTION,
            Reply::Standard(s) => s.emotion.as_str(),
        }
    }

    pub fn intent(&self) -> Intent {
        match self {
            Reply::Crisis(_) => Intent::Safety,
            Reply::Standard(_) => Intent::ExploringFeelings,
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            Reply::Crisis(_) => Strategy::Support,
            Reply::Standard(_) => Strategy::StandardCare,
        }
    }

    /// Flatten into the wire record the chat UI consumes.
    pub fn into_response(self) -> TherapistResponse {
        TherapistResponse {
            message: self.message(),
            emotion: self.emotion().to_string(),
            intent: self.intent().as_str().to_string(),
            is_crisis: self.is_crisis(),
            strategy: self.strategy(),
        }
    }
}

/// Flat response record, serialized as `{message, emotion, intent, isCrisis, strategy}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TherapistResponse {
    pub message: String,
    pub emotion: String,
    pub intent: String,
    pub is_crisis: bool,
    pub strategy: Strategy,
}

impl From<Reply> for TherapistResponse {
    fn from(reply: Reply) -> Self {
        reply.into_response()
    }
}

// ═══════════════════════════════════════
// ORCHESTRATION
// ═══════════════════════════════════════

/// Run the engine on one message with the given randomness source.
pub fn respond<P: Picker>(utterance: &str, picker: &mut P) -> Reply {
    let alert = check_safety(utterance);
    if alert.triggered {
        warn!("Crisis language detected, returning safety resources");
        return Reply::Crisis(CrisisReply { alert });
    }

    let emotion = detect_emotion(utterance);
    let composition = compose(emotion, picker);
    debug!(emotion = %emotion, chars = utterance.len(), "Composed reply");

    Reply::Standard(StandardReply {
        emotion,
        composition,
    })
}

/// Primary entry point: reply to `utterance` using the thread-local RNG.
///
/// Callers pass the raw input already trimmed. Total over all strings; the
/// empty string takes the `general` path.
pub fn get_reply(utterance: &str) -> TherapistResponse {
    respond(utterance, &mut ThreadRngPicker).into_response()
}

/// Engine bound to a specific picker, for callers that want reproducible
/// output across a conversation.
#[derive(Debug, Clone)]
pub struct ReplyEngine<P: Picker> {
    picker: P,
}

impl ReplyEngine<ThreadRngPicker> {
    pub fn new() -> Self {
        Self {
            picker: ThreadRngPicker,
        }
    }
}

impl Default for ReplyEngine<ThreadRngPicker> {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplyEngine<SeededPicker> {
    pub fn seeded(seed: u64) -> Self {
        Self {
            picker: SeededPicker::new(seed),
        }
    }
}

impl<P: Picker> ReplyEngine<P> {
    pub fn with_picker(picker: P) -> Self {
        Self { picker }
    }

    pub fn respond(&mut self, utterance: &str) -> Reply {
        respond(utterance, &mut self.picker)
    }

    pub fn reply(&mut self, utterance: &str) -> TherapistResponse {
        self.respond(utterance).into_response()
    }
}
