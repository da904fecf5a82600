//! Centralized UI formatting and color utilities
//!
//! This module provides a unified interface for colors and formatting
//! patterns used throughout the studyhall commands.

use colored::{ColoredString, Colorize};

use crate::gradebook::LetterGrade;

/// Returns a colored rendering of a letter grade.
///
/// Colors:
/// - A/B: green
/// - C/D: yellow
/// - F: red
pub fn letter_color(letter: LetterGrade) -> ColoredString {
    match letter {
        LetterGrade::A | LetterGrade::B => letter.to_string().green(),
        LetterGrade::C | LetterGrade::D => letter.to_string().yellow(),
        LetterGrade::F => letter.to_string().red(),
    }
}

/// Color scheme for status-related text output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success/acceptance
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Yellow for warnings
    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Red for errors
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for values echoed back to the user
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Bold for headings
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }
}

/// Common text formatting patterns
pub mod format {
    /// Format a separator line for sections
    pub fn separator(width: usize) -> String {
        "─".repeat(width)
    }

    /// Format a title centered between two full-width rules
    pub fn banner(title: &str, width: usize) -> String {
        let rule = "═".repeat(width);
        format!("{}\n{:^width$}\n{}", rule, title, rule, width = width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_color_all_letters() {
        letter_color(LetterGrade::A);
        letter_color(LetterGrade::B);
        letter_color(LetterGrade::C);
        letter_color(LetterGrade::D);
        letter_color(LetterGrade::F);
    }

    #[test]
    fn test_separator() {
        assert_eq!(format::separator(5), "─────");
        assert_eq!(format::separator(10), "──────────");
    }

    #[test]
    fn test_banner_centers_title() {
        let banner = format::banner("HI", 6);
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "══════");
        assert_eq!(lines[1], "  HI  ");
        assert_eq!(lines[2], "══════");
    }
}
