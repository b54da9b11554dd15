//! Google Gemini API client.
//!
//! Implements `CompletionService` for Gemini models via the
//! Generative Language API (`generateContent`).

mod api;
mod client;
mod config;


pub use client::GeminiClient;
pub use config::{GeminiConfig, DEFAULT_MODEL, GEMINI_API_BASE};
