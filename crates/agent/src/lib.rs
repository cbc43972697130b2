//! The intent relay: the heart of SpeechIntent.
//!
//! Every request runs one round:
//!
//! 1. **Assemble** the upstream turns: fixed instruction, fixed
//!    acknowledgement, the retained exchange, then the caller's text
//! 2. **Send** them to the model via the configured provider
//! 3. **Sanitize** the raw reply down to plain punctuation and single spaces
//! 4. **Retain** the exchange as context for the next round
//!
//! A failed upstream call leaves the retained exchange untouched.

pub mod context;
pub mod prompt;
pub mod relay;
pub mod sanitize;

pub use context::{ConversationWindow, assemble};
pub use relay::{IntentRelay, RelayError};
pub use sanitize::sanitize_reply;
