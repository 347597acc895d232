use clap::Parser;
use colored::*;
use tracksheet::commands::{self, CmdMessage, MessageLevel};
use tracksheet::config::SheetConfig;
use tracksheet::error::Result;
use tracksheet::launcher::SystemOpener;
use tracksheet::logger;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let config = SheetConfig::resolve(cli.input);
    tracing::debug!(?config, "resolved paths");

    let result = commands::generate::run(&config)?;
    tracing::info!(trainees = result.trainee_count, "sheet generated");
    print_messages(&result.messages);

    if cli.no_open {
        return Ok(());
    }

    if let Some(output) = result.output_path.as_deref() {
        let opened = commands::open::run(&SystemOpener, output);
        print_messages(&opened.messages);
    }
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}
