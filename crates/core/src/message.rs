//! Turn domain types.
//!
//! These are the value objects exchanged with the upstream model:
//! caller sends text → relay builds a sequence of [`Turn`]s → model replies →
//! the exchange is kept as a [`RetainedTurn`] for the next request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Text originating from the caller (or the fixed instruction prompt)
    User,
    /// Text originating from the language model
    Model,
}

impl Role {
    /// Wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One role-tagged text contribution to a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    /// Create a user-originated turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    /// Create a model-originated turn.
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

/// A completed exchange kept as context for the next request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetainedTurn {
    /// What the caller sent
    pub user_text: String,

    /// The sanitized model reply
    pub reply: String,

    /// When the exchange completed
    pub recorded_at: DateTime<Utc>,
}

impl RetainedTurn {
    pub fn new(user_text: impl Into<String>, reply: impl Into<String>) -> Self {
        Self {
            user_text: user_text.into(),
            reply: reply.into(),
            recorded_at: Utc::now(),
        }
    }

    /// The exchange as a user turn followed by a model turn.
    pub fn turns(&self) -> [Turn; 2] {
        [Turn::user(&self.user_text), Turn::model(&self.reply)]
    }
}

impl PartialEq for RetainedTurn {
    /// Timestamps are bookkeeping; two retained turns are equal when the
    /// exchanged text is.
    fn eq(&self, other: &Self) -> bool {
        self.user_text == other.user_text && self.reply == other.reply
    }
}

impl Eq for RetainedTurn {}
