// src/prompt/mod.rs
// Instruction prompt rendering

pub mod builder;

pub use builder::{InstructionContext, build_instructions, instructions_for, render_template};
