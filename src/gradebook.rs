//! Grade collection and report statistics.
//!
//! A [`GradeBook`] owns the grades entered during one session and answers
//! statistics queries over them. Queries on an empty book return `None`
//! rather than erroring, so callers decide how to render the no-data case.

use std::fmt;

use serde::Serialize;

/// Lowest grade accepted by [`GradeBook::add`].
pub const MIN_GRADE: f64 = 0.0;
/// Highest grade accepted by [`GradeBook::add`].
pub const MAX_GRADE: f64 = 100.0;

/// Why a grade was rejected.
///
/// Parsing raw input is the caller's job, so `NotANumber` is constructed by
/// the menu layer; `OutOfRange` comes from [`GradeBook::add`]. Both are
/// recoverable: the caller reports them and re-prompts.
#[derive(Debug, Clone, PartialEq)]
pub enum GradeError {
    /// Input string did not parse as a number.
    NotANumber(String),
    /// Parsed value falls outside `[MIN_GRADE, MAX_GRADE]`.
    OutOfRange(f64),
}

impl fmt::Display for GradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber(input) => write!(f, "'{}' is not a numeric value", input),
            Self::OutOfRange(value) => write!(
                f,
                "{} is outside the accepted range {:.0}-{:.0}",
                value, MIN_GRADE, MAX_GRADE
            ),
        }
    }
}

impl std::error::Error for GradeError {}

/// Letter classification of a numeric average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LetterGrade {
    /// 90 and above
    A,
    /// 80-89
    B,
    /// 70-79
    C,
    /// 60-69
    D,
    /// Below 60
    F,
}

impl LetterGrade {
    /// Converts a numeric average into a letter grade.
    ///
    /// | Average | Letter |
    /// |---------|--------|
    /// | >= 90   | A      |
    /// | >= 80   | B      |
    /// | >= 70   | C      |
    /// | >= 60   | D      |
    /// | < 60    | F      |
    ///
    /// Total over any real input; range enforcement happens in
    /// [`GradeBook::add`], not here.
    pub fn from_average(average: f64) -> Self {
        match average {
            avg if avg >= 90.0 => Self::A,
            avg if avg >= 80.0 => Self::B,
            avg if avg >= 70.0 => Self::C,
            avg if avg >= 60.0 => Self::D,
            _ => Self::F,
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::C => write!(f, "C"),
            Self::D => write!(f, "D"),
            Self::F => write!(f, "F"),
        }
    }
}

/// Derived snapshot of a book's statistics.
///
/// Every field is `None` exactly when the book is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Arithmetic mean of all grades
    pub average: Option<f64>,
    /// Letter classification of the average
    pub letter: Option<LetterGrade>,
    /// Highest grade entered
    pub highest: Option<f64>,
    /// Lowest grade entered
    pub lowest: Option<f64>,
}

/// Ordered collection of the grades entered during one session.
///
/// Append-only; entry order is preserved but carries no meaning.
#[derive(Debug, Default, Clone)]
pub struct GradeBook {
    grades: Vec<f64>,
}

impl GradeBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a grade.
    ///
    /// Rejects values outside `[0, 100]` without modifying the book.
    pub fn add(&mut self, value: f64) -> Result<(), GradeError> {
        if !(MIN_GRADE..=MAX_GRADE).contains(&value) {
            return Err(GradeError::OutOfRange(value));
        }
        self.grades.push(value);
        Ok(())
    }

    /// Grades in entry order.
    pub fn grades(&self) -> &[f64] {
        &self.grades
    }

    /// True when no grades have been entered.
    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    /// Number of grades entered.
    pub fn len(&self) -> usize {
        self.grades.len()
    }

    /// Arithmetic mean, or `None` when the book is empty.
    pub fn average(&self) -> Option<f64> {
        if self.grades.is_empty() {
            return None;
        }
        Some(self.grades.iter().sum::<f64>() / self.grades.len() as f64)
    }

    /// Highest grade entered so far.
    pub fn highest(&self) -> Option<f64> {
        self.grades.iter().copied().reduce(f64::max)
    }

    /// Lowest grade entered so far.
    pub fn lowest(&self) -> Option<f64> {
        self.grades.iter().copied().reduce(f64::min)
    }

    /// Snapshot of all statistics at once.
    pub fn summary(&self) -> Summary {
        Summary {
            average: self.average(),
            letter: self.average().map(LetterGrade::from_average),
            highest: self.highest(),
            lowest: self.lowest(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_matches_arithmetic_mean() {
        let mut book = GradeBook::new();
        for value in [95.0, 82.0, 71.0, 60.0] {
            book.add(value).unwrap();
        }
        assert_eq!(book.average(), Some(77.0));
    }

    #[test]
    fn test_average_empty_book() {
        assert_eq!(GradeBook::new().average(), None);
    }

    #[test]
    fn test_letter_grade_boundaries() {
        assert_eq!(LetterGrade::from_average(100.0), LetterGrade::A);
        assert_eq!(LetterGrade::from_average(90.0), LetterGrade::A);
        assert_eq!(LetterGrade::from_average(89.999), LetterGrade::B);
        assert_eq!(LetterGrade::from_average(80.0), LetterGrade::B);
        assert_eq!(LetterGrade::from_average(79.999), LetterGrade::C);
        assert_eq!(LetterGrade::from_average(70.0), LetterGrade::C);
        assert_eq!(LetterGrade::from_average(69.999), LetterGrade::D);
        assert_eq!(LetterGrade::from_average(60.0), LetterGrade::D);
        assert_eq!(LetterGrade::from_average(59.999), LetterGrade::F);
        assert_eq!(LetterGrade::from_average(0.0), LetterGrade::F);
    }

    #[test]
    fn test_letter_grade_total_outside_range() {
        assert_eq!(LetterGrade::from_average(105.0), LetterGrade::A);
        assert_eq!(LetterGrade::from_average(-5.0), LetterGrade::F);
    }

    #[test]
    fn test_highest_lowest_bound_all_elements() {
        let mut book = GradeBook::new();
        for value in [71.0, 95.0, 60.0, 82.0] {
            book.add(value).unwrap();
        }

        let highest = book.highest().unwrap();
        let lowest = book.lowest().unwrap();
        for &value in book.grades() {
            assert!(lowest <= value && value <= highest);
        }
        assert_eq!(highest, 95.0);
        assert_eq!(lowest, 60.0);
    }

    #[test]
    fn test_add_accepts_bounds() {
        let mut book = GradeBook::new();
        book.add(0.0).unwrap();
        book.add(100.0).unwrap();
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_add_rejects_out_of_range() {
        let mut book = GradeBook::new();
        book.add(50.0).unwrap();

        assert_eq!(book.add(105.0), Err(GradeError::OutOfRange(105.0)));
        assert_eq!(book.add(-1.0), Err(GradeError::OutOfRange(-1.0)));
        assert_eq!(book.grades(), &[50.0]);
    }

    #[test]
    fn test_summary_empty_book_all_none() {
        let summary = GradeBook::new().summary();
        assert_eq!(summary.average, None);
        assert_eq!(summary.letter, None);
        assert_eq!(summary.highest, None);
        assert_eq!(summary.lowest, None);
    }

    #[test]
    fn test_summary_idempotent() {
        let mut book = GradeBook::new();
        book.add(88.0).unwrap();
        assert_eq!(book.summary(), book.summary());
    }

    #[test]
    fn test_summary_end_to_end() {
        let mut book = GradeBook::new();
        for value in [95.0, 82.0, 71.0, 60.0] {
            book.add(value).unwrap();
        }

        let summary = book.summary();
        assert_eq!(summary.average, Some(77.0));
        assert_eq!(summary.letter, Some(LetterGrade::C));
        assert_eq!(summary.highest, Some(95.0));
        assert_eq!(summary.lowest, Some(60.0));
    }

    #[test]
    fn test_grade_error_messages() {
        let parse = GradeError::NotANumber("abc".to_string());
        assert!(parse.to_string().contains("abc"));

        let range = GradeError::OutOfRange(105.0);
        assert!(range.to_string().contains("105"));
    }
}
