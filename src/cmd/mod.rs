//! Command handlers for the studyhall binary.

pub mod fortune;
pub mod grades;
