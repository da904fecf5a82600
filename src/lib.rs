//! # Studyhall - Console Classroom Exercises
//!
//! Studyhall bundles two small interactive console programs into one binary:
//! a student grade tracker and a Magic 8-Ball fortune responder.
//!
//! ## Overview
//!
//! Both exercises are single-session and keep everything in memory. The grade
//! tracker collects numeric grades through a fixed menu and reports average,
//! letter grade, highest, and lowest on demand. The 8-Ball answers any
//! question with a random fortune from a fixed list.
//!
//! ## Core Concepts
//!
//! - **GradeBook**: the append-only list of grades entered during a session
//! - **Summary**: a read-only statistics snapshot derived from a book
//! - **Letter grade**: classification of an average into A through F
//!
//! ## Modules
//!
//! - [`gradebook`] - Grade collection, statistics, and letter-grade classification
//! - [`fortune`] - The Magic 8-Ball answer list and random draw
//! - [`prompt`] - Stdin helpers for interactive prompts
//! - [`ui`] - Colored output and formatting helpers
//!
//! ## Example
//!
//! ```
//! use studyhall::gradebook::{GradeBook, LetterGrade};
//!
//! let mut book = GradeBook::new();
//! book.add(95.0).expect("in range");
//! book.add(82.0).expect("in range");
//!
//! let summary = book.summary();
//! assert_eq!(summary.average, Some(88.5));
//! assert_eq!(summary.letter, Some(LetterGrade::B));
//! ```

// Re-export all public modules
pub mod fortune;
pub mod gradebook;
pub mod prompt;
pub mod ui;

/// Generate a UTC timestamp in ISO 8601 format: `YYYY-MM-DDTHH:MM:SSZ`
///
/// This function uses `chrono::Utc::now()` to ensure the timestamp is truly
/// in UTC, not local time with a misleading `Z` suffix.
pub fn utc_now_iso() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
