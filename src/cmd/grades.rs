//! Grade tracker command: interactive menu session and batch report.

use anyhow::{anyhow, Result};
use serde::Serialize;

use studyhall::gradebook::{GradeBook, GradeError, Summary};
use studyhall::prompt;
use studyhall::ui;

const REPORT_WIDTH: usize = 20;

/// Run the interactive menu session until the user quits.
///
/// The session owns the only [`GradeBook`]; every menu action borrows it.
pub fn run_session() -> Result<()> {
    println!(
        "{}",
        ui::colors::heading(&ui::format::banner("STUDENT GRADE CALCULATOR", 32))
    );

    let mut book = GradeBook::new();

    loop {
        display_menu();
        let Some(choice) = prompt::read_line("Enter your choice (1-3): ")? else {
            break;
        };

        match choice.as_str() {
            "1" => add_grade(&mut book)?,
            "2" => display_report(&book),
            "3" => break,
            _ => println!(
                "{}",
                ui::colors::warning("Invalid choice. Please enter 1, 2, or 3.")
            ),
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// One-off report: load the given grades, print the report, exit.
pub fn run_batch(grades: &[f64], json: bool) -> Result<()> {
    let mut book = GradeBook::new();
    for &value in grades {
        book.add(value)
            .map_err(|err| anyhow!("rejected grade: {}", err))?;
    }

    if json {
        let report = JsonReport {
            generated_at: studyhall::utc_now_iso(),
            count: book.len(),
            grades: book.grades().to_vec(),
            summary: book.summary(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", ui::colors::heading("--- GRADE REPORT ---"));
        print_report(&book);
    }

    Ok(())
}

/// JSON shape for `grades --json`.
#[derive(Serialize)]
struct JsonReport {
    generated_at: String,
    count: usize,
    grades: Vec<f64>,
    summary: Summary,
}

fn display_menu() {
    println!();
    println!("{}", ui::colors::heading("--- MENU ---"));
    println!("1. Add a grade");
    println!("2. View grade report");
    println!("3. Quit");
}

/// Menu choice 1: prompt for a grade and record it.
///
/// Parse and range failures print a message and return to the menu; the
/// book is left untouched.
fn add_grade(book: &mut GradeBook) -> Result<()> {
    let Some(input) = prompt::read_line("Enter a grade (0-100): ")? else {
        return Ok(());
    };

    match parse_grade(&input).and_then(|value| book.add(value).map(|()| value)) {
        Ok(value) => println!(
            "{} Grade {} added successfully!",
            ui::colors::success("✓"),
            ui::colors::identifier(&value.to_string()),
        ),
        Err(GradeError::NotANumber(_)) => println!(
            "{}",
            ui::colors::error("Invalid input. Please enter a numeric value.")
        ),
        Err(GradeError::OutOfRange(_)) => println!(
            "{}",
            ui::colors::error("Please enter a grade between 0 and 100.")
        ),
    }

    Ok(())
}

/// Parsing raw input is the menu's job; the book only range-checks.
fn parse_grade(input: &str) -> Result<f64, GradeError> {
    input
        .parse::<f64>()
        .map_err(|_| GradeError::NotANumber(input.to_string()))
}

/// Menu choice 2: render the report for the current book.
fn display_report(book: &GradeBook) {
    println!();
    if book.is_empty() {
        println!("{}", ui::colors::warning("No grades to display."));
        return;
    }

    println!("{}", ui::colors::heading("--- GRADE REPORT ---"));
    println!("{}", ui::format::separator(REPORT_WIDTH));
    print_report(book);
}

/// Render report lines for a non-empty book, checking each summary field
/// before formatting it.
fn print_report(book: &GradeBook) {
    let summary = book.summary();

    let grades: Vec<String> = book.grades().iter().map(f64::to_string).collect();
    println!("Grades: {}", grades.join(", "));

    if let Some(average) = summary.average {
        println!("Average: {:.2}", average);
    }
    if let Some(letter) = summary.letter {
        println!("Letter Grade: {}", ui::letter_color(letter));
    }
    if let Some(highest) = summary.highest {
        println!("Highest: {}", highest);
    }
    if let Some(lowest) = summary.lowest {
        println!("Lowest: {}", lowest);
    }
}
