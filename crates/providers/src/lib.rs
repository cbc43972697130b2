//! Upstream provider implementations for SpeechIntent.
//!
//! All providers implement the `speechintent_core::Provider` trait.

pub mod gemini;

pub use gemini::GeminiProvider;
