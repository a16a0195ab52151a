mod commands;
mod terminal;

use commands::{CommandLine, Commands, balls, draws, filter, parse};
use sift_common::error;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.verbose, commands.quiet);

    let cfg = commands.config();
    print::banner(&cfg);

    let outcome = match commands.command {
        Commands::Balls { numbers } => balls::balls(&numbers, &cfg),
        Commands::Filter { actions, explain } => filter::filter(&actions, explain, &cfg),
        Commands::Parse { text } => parse::parse(&text.join(" "), &cfg),
        Commands::Latest { watch } => draws::latest(watch, &cfg).await,
        Commands::History => draws::history(&cfg).await,
    };

    print::end_of_program(&cfg);
    if let Err(err) = outcome {
        error!("{err:#}");
        std::process::exit(1);
    }
    Ok(())
}
