//! Interactive console (Read-Eval-Print Loop) mode.

use crate::console::{Console, ConsoleInput};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive console.
pub async fn run_repl(console: &mut Console, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info("Warden console - Type 'player: message' to chat, 'help' for commands")
    );
    println!();

    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::Editor(format!("Failed to initialize editor: {}", e)))?;

    let history_path = get_history_path();
    if let Some(path) = &history_path {
        let _ = editor.load_history(path);
    }

    loop {
        match editor.readline("warden> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match ConsoleInput::parse(line) {
                    Ok(ConsoleInput::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(input) => {
                        if let Err(e) = execute_input(input, console, formatter).await {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    if let Some(path) = &history_path {
        editor.save_history(path).ok();
    }

    Ok(())
}

/// Execute one parsed console line.
async fn execute_input(
    input: ConsoleInput,
    console: &mut Console,
    formatter: &Formatter,
) -> Result<()> {
    match input {
        ConsoleInput::Chat(event) => {
            if let Some(reply) = console.chat(&event).await {
                println!("{}", formatter.response(&reply));
            }
        }
        ConsoleInput::Sweep => {
            print_notices(&console.sweep().await, formatter);
        }
        ConsoleInput::Advance(by) => {
            print_notices(&console.advance(by).await, formatter);
        }
        ConsoleInput::Claims => {
            println!("{}", formatter.format_claims(&console.claims())?);
        }
        ConsoleInput::Catalog => {
            println!("{}", formatter.format_catalog(console.catalog())?);
        }
        ConsoleInput::Stats => {
            println!("{}", console.stats());
        }
        ConsoleInput::Help => print_help(formatter),
        ConsoleInput::Exit => {}
    }

    Ok(())
}

fn print_notices(notices: &[String], formatter: &Formatter) {
    if notices.is_empty() {
        println!("{}", formatter.info("No claims expired."));
    }
    for notice in notices {
        println!("{}", formatter.notice(notice));
    }
}

fn get_history_path() -> Option<PathBuf> {
    let dir = dirs::home_dir()?.join(".warden");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  <player>: <message>            - Send a chat line as <player>");
    println!("    e.g. Alice: claim tisy");
    println!("         Bob: check claims");
    println!("  sweep                          - Expire overdue claims now");
    println!("  advance <minutes>              - Move the clock forward, then sweep");
    println!("  claims                         - Show active claims");
    println!("  catalog                        - Show the POI catalog");
    println!("  stats                          - Show sweeper counters");
    println!("  help, ?                        - Show this help");
    println!("  exit, quit, q                  - Exit console");
    println!();
}
