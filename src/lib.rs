// src/lib.rs

pub mod cli;
pub mod config;
pub mod conversation;
pub mod engine;
pub mod error;
pub mod persona;
pub mod prompt;
pub mod web;

pub use engine::{
    EmotionCategory, Reply, ReplyEngine, SafetyAlert, Strategy, TherapistResponse, check_safety,
    detect_emotion, get_reply, get_welcome_message,
};
pub use error::{Result, TherapyError};
