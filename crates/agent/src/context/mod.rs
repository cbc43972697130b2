//! Conversation context: what the model sees on each round.
//!
//! - [`window`] — the retained exchanges, oldest first
//! - [`assembler`] — turns the window plus new text into upstream turns

pub mod assembler;
pub mod window;

pub use assembler::assemble;
pub use window::ConversationWindow;
