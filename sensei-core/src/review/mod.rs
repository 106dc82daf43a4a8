//! Review module for code review requests
//!
//! This module provides the review request type, the prompt builder
//! that wraps the user's code and description in the fixed reviewer
//! instructions, and the runner that drives a generation backend.

pub mod request;
pub mod runner;

pub use request::ReviewRequest;
pub use runner::run_review;
