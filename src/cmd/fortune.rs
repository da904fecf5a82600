//! Magic 8-Ball command: interactive session or one-shot answer.

use anyhow::Result;
use dialoguer::Input;

use studyhall::fortune;
use studyhall::prompt;
use studyhall::ui;

const BALL_WIDTH: usize = 28;

/// Answer a single question, or run the interactive session when no
/// question was given and stdin is a terminal.
pub fn run(question: Option<String>) -> Result<()> {
    // The 8-Ball never reads the question; it only needs one to be asked.
    if question.is_some() {
        display_fortune(fortune::draw());
        return Ok(());
    }

    if !atty::is(atty::Stream::Stdin) {
        // Piped input: consume one question line and answer once.
        let _ = prompt::read_line("Ask the Magic 8-Ball a question: ")?;
        display_fortune(fortune::draw());
        return Ok(());
    }

    run_session()
}

fn run_session() -> Result<()> {
    println!(
        "{}",
        ui::colors::heading(&ui::format::banner("Welcome to the Magic 8-Ball!", BALL_WIDTH))
    );

    loop {
        let _question: String = Input::new()
            .with_prompt("Ask the Magic 8-Ball a question")
            .allow_empty(true)
            .interact_text()?;

        display_fortune(fortune::draw());

        if !prompt::confirm("Do you want to ask another question?")? {
            break;
        }
    }

    Ok(())
}

/// Display the fortune between rule lines.
fn display_fortune(answer: &str) {
    println!();
    println!("The Magic 8-Ball says:");
    println!("{}", ui::format::separator(BALL_WIDTH));
    println!("{}", ui::colors::identifier(answer));
    println!("{}", ui::format::separator(BALL_WIDTH));
    println!();
}
