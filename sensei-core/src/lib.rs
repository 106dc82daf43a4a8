//! Sensei Core - Core library for CodeSensei
//!
//! This crate provides the building blocks for automated code review:
//! the review request and prompt builder, the text generation trait
//! with its error taxonomy, and configuration/secrets loading.

pub mod config;
pub mod error;
pub mod generator;
pub mod review;
pub mod secrets;

pub use config::Config;
pub use error::{Error, Result};
pub use generator::{GenerateError, TextGenerator};
pub use review::{run_review, ReviewRequest};
pub use secrets::Secrets;
