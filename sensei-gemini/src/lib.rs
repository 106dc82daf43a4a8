//! Sensei Gemini - Gemini generation client for CodeSensei
//!
//! This crate implements the `TextGenerator` trait against the hosted
//! Gemini `generateContent` endpoint: typed wire structures, a single
//! stateless HTTP call per generation, and classification of API
//! failures into the core error taxonomy.

mod client;
mod wire;

pub use client::GeminiClient;
