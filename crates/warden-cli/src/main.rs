//! Warden CLI - Offline console for the POI claim arbiter.

use clap::Parser;
use warden_cli::output::OutputFormat;
use warden_cli::{repl, Cli, Command, Console, Formatter};
use warden_domain::ChatEvent;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> warden_cli::Result<()> {
    let cli = Cli::parse();

    let config = warden_cli::load_config(cli.config.as_deref())?;
    let mut console = Console::new(&config)?;

    let format = cli.format.map(OutputFormat::from).unwrap_or_default();
    let formatter = Formatter::new(format, !cli.no_color);

    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&mut console, &formatter).await?;
        }
        Some(Command::Say(args)) => {
            let event = ChatEvent::new(args.player, args.message.join(" "));
            match console.chat(&event).await {
                Some(reply) => println!("{}", formatter.response(&reply)),
                None => println!("{}", formatter.info("No reply.")),
            }
        }
        Some(Command::Catalog) => {
            println!("{}", formatter.format_catalog(console.catalog())?);
        }
    }

    Ok(())
}
