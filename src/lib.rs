//! # placement-prep
//!
//! Offline job-description analysis for placement preparation.
//!
//! A job description is scanned against a fixed keyword table and turned into
//! a readiness report: grouped skills, a 0-100 readiness score, a round-wise
//! checklist, a study plan, likely interview questions and, when a company is
//! named, an expected interview loop. Reports are kept in a local history
//! where per-skill confidence can be adjusted, and a pre-ship checklist gates
//! the final proof-of-work submission.
//!
//! ## Quick Start
//!
//! ```rust
//! use placement_prep::analyze;
//!
//! let report = analyze("React and SQL", "Google", "SDE Intern");
//! assert_eq!(report.readiness_score, 65);
//! assert!(report.extracted_skills.contains_key("Web Development"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod analyzer;
pub mod cli;
pub mod data;
pub mod storage;
pub mod utils;

pub use crate::analyzer::analyze;
pub use crate::cli::Cli;

/// The current version of placement-prep.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
