use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "anagrep")]
#[command(about = "Find all sequential permutations of a pattern in a string", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand)]
enum Action {
    /// Search TEXT for substrings that are permutations of PATTERN
    Find {
        /// The string to search in
        text: String,
        /// The pattern whose permutations to look for
        pattern: String,
        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },
    /// Interactive pattern finder TUI
    Tui,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.action {
        Some(Action::Find {
            text,
            pattern,
            json,
        }) => commands::find::run(&text, &pattern, json)?,
        Some(Action::Tui) | None => commands::tui::run(),
    }
    Ok(())
}
