//! Fixed turns that open every upstream conversation.
//!
//! The lines of each prompt are joined without separators; the model has
//! been tuned against exactly this text, so it is sent byte-for-byte.

/// Instruction turn telling the model to act as an intent filter.
pub const INSTRUCTION_PROMPT: &str = concat!(
    "You are a filter AI. Your **only task** is to analyze the user’s prompt and decide whether it is a direct request for **current time, current date, current location, or vision feedback**.",
    "1. If the user’s prompt is **plainly requesting one of those**, respond **only** in the format:",
    "intent: <Time | Date | Location | Vision>",
    "dependent: False",
    "2. If the user’s prompt is **not directly requesting**, but the answer to the user’s prompt would **require** one of those intents (time/date/location/vision), then respond in the format:",
    "intent: <Time | Date | Location | Vision>",
    "dependent: True",
    "3. If the user’s prompt does **not relate** to any of those intents, respond:",
    "intent: None",
    "dependent: False",
    "⚠️ Do **not** provide explanations, reasoning, or any other response to the user. Only output in the exact format above.",
    "\n\nWhat time will I get to lagos from here",
);

/// Canned model reply to the example question in [`INSTRUCTION_PROMPT`].
pub const ACKNOWLEDGEMENT: &str = concat!("Intent: Time,Location", "dependent: True");
