//! # kintsugi
//!
//! Sentiment, emotion and resilience analysis for short journal entries.
//!
//! The local pipeline scores polarity against an embedded word list,
//! measures eight emotion categories, looks for growth-oriented reframing
//! and estimates confidence. An optional cultural-context step annotates
//! the result, and an optional language-model step enriches it.
//!
//! ## Quick Start
//!
//! ```rust
//! use kintsugi::sentiment::{analyze_local_sentiment, SentimentLabel};
//!
//! let result = analyze_local_sentiment("I completely failed the project, total disaster");
//! assert!(matches!(
//!     result.label,
//!     SentimentLabel::Negative | SentimentLabel::VeryNegative
//! ));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod ai;
pub mod api;
pub mod cli;
pub mod enrich;
pub mod journal;
pub mod sentiment;
pub mod utils;

pub use crate::cli::Cli;
pub use crate::enrich::SmartAnalyzer;

/// The current version of kintsugi.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
