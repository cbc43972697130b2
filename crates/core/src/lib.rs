//! # SpeechIntent Core
//!
//! Domain types, traits, and the provider error for the SpeechIntent relay.
//! This crate has **zero framework dependencies**; it defines the model
//! that the provider, agent and gateway crates implement against.
//!
//! ## Design Philosophy
//!
//! The upstream language model is reached through the [`Provider`] trait.
//! The Gemini client lives in `speechintent-providers`; tests substitute
//! scripted implementations.

pub mod error;
pub mod message;
pub mod provider;

// Re-export key types at crate root for ergonomics
pub use error::ProviderError;
pub use message::{RetainedTurn, Role, Turn};
pub use provider::{Provider, ProviderRequest, ProviderResponse};
