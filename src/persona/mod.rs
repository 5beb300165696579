// src/persona/mod.rs
// Persona text for Ohio Therapy.
// Only the instruction document lives here; reply fragments are in engine::fragments.

pub mod default;

pub use default::INSTRUCTION_TEMPLATE;

/// Display name used in the greeting and the instruction document
pub const PERSONA_NAME: &str = "Ohio Therapy";

/// Placeholder for the detected emotion
pub const EMOTION_PLACEHOLDER: &str = "{EMOTION}";
/// Placeholder for the conversation focus (intent)
pub const INTENT_PLACEHOLDER: &str = "{INTENT}";
/// Placeholder for the user's raw message
pub const MESSAGE_PLACEHOLDER: &str = "{USER_MESSAGE}";
