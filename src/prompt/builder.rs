// src/prompt/builder.rs

use crate::engine::{EmotionCategory, Intent, classify_intent, detect_emotion};
use crate::persona::{
    EMOTION_PLACEHOLDER, INSTRUCTION_TEMPLATE, INTENT_PLACEHOLDER, MESSAGE_PLACEHOLDER,
};

/// Fill the instruction document with context for one message.
///
/// Each placeholder is replaced at its first occurrence only, in the order
/// emotion, intent, message. Values are inserted literally.
pub fn build_instructions(user_message: &str, emotion: &str, intent: &str) -> String {
    render_template(INSTRUCTION_TEMPLATE, user_message, emotion, intent)
}

/// Same substitution over an arbitrary template.
pub fn render_template(template: &str, user_message: &str, emotion: &str, intent: &str) -> String {
    template
        .replacen(EMOTION_PLACEHOLDER, emotion, 1)
        .replacen(INTENT_PLACEHOLDER, intent, 1)
        .replacen(MESSAGE_PLACEHOLDER, user_message, 1)
}

/// Instruction context derived from a message by the keyword classifiers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct InstructionContext {
    pub emotion: EmotionCategory,
    pub intent: Intent,
    pub prompt: String,
}

/// Detect emotion and intent for `user_message` and render the document.
pub fn instructions_for(user_message: &str) -> InstructionContext {
    let emotion = detect_emotion(user_message);
    let intent = classify_intent(user_message);
    let prompt = build_instructions(user_message, emotion.as_str(), intent.as_str());

    InstructionContext {
        emotion,
        intent,
        prompt,
    }
}
