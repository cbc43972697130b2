//! Context assembly — builds the turn sequence sent upstream.
//!
//! Layout, in order:
//!
//! 1. **Instruction** — [`INSTRUCTION_PROMPT`] as a user turn, never altered
//! 2. **Acknowledgement** — [`ACKNOWLEDGEMENT`] as a model turn, never altered
//! 3. **Retained exchanges** — user then model turn for each, oldest first
//! 4. **New text** — the caller's text as the final user turn
//!
//! Assembly is a pure function of the window and the text; the caller's
//! text is passed through verbatim.

use super::window::ConversationWindow;
use crate::prompt::{ACKNOWLEDGEMENT, INSTRUCTION_PROMPT};
use speechintent_core::message::Turn;

/// Assemble the upstream turns for one round.
pub fn assemble(window: &ConversationWindow, user_text: &str) -> Vec<Turn> {
    let mut turns = Vec::with_capacity(3 + 2 * window.len());

    turns.push(Turn::user(INSTRUCTION_PROMPT));
    turns.push(Turn::model(ACKNOWLEDGEMENT));

    for retained in window.iter() {
        turns.extend(retained.turns());
    }

    turns.push(Turn::user(user_text));
    turns
}
