/// BlockyAnimal Terminal Demo
///
/// Renders the blocky robot (or the ColoredPoints painter) as ASCII art.
/// Controls are listed in the status line; Tab switches demos, Q quits.
use anyhow::Context;
use blocky_terminal::{
    logging::{init_logging, LoggingConfig},
    Args, TerminalApp,
};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(LoggingConfig {
        filter: args.log.clone(),
        file: args.log_file.clone(),
        ..LoggingConfig::default()
    })
    .context("failed to open log file")?;
    log::info!("starting in {:?} mode at {} fps", args.mode, args.fps);

    let mut app = TerminalApp::new(&args).context("failed to query terminal size")?;
    app.run().context("terminal renderer failed")?;

    Ok(())
}
