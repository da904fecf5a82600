//! CLI entry point and command dispatch for studyhall.

mod cmd;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;

#[derive(Parser)]
#[command(name = "studyhall")]
#[command(version)]
#[command(about = "Console study-hall exercises", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    studyhall grades           Interactive grade tracker session\n    studyhall fortune          Ask the Magic 8-Ball a question"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Track student grades for one session
    ///
    /// With no arguments, runs the interactive menu session. Pass grades on
    /// the command line to print a one-off report instead.
    Grades {
        /// Grades to report on without entering the interactive session
        #[arg(value_name = "GRADE", allow_negative_numbers = true)]
        grades: Vec<f64>,
        /// Print the report as JSON (requires grades on the command line)
        #[arg(long, requires = "grades")]
        json: bool,
    },
    /// Ask the Magic 8-Ball a question
    Fortune {
        /// Question to ask; omit it for an interactive session
        question: Option<String>,
    },
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Grades { grades, json } => {
            if grades.is_empty() {
                cmd::grades::run_session()
            } else {
                cmd::grades::run_batch(&grades, json)
            }
        }
        Commands::Fortune { question } => cmd::fortune::run(question),
        Commands::Completion { shell } => cmd_completion(shell),
    }
}

fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "studyhall", &mut io::stdout());
    Ok(())
}
