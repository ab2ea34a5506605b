#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use solo_battleship::{
    init_logging, GameEngine, GameOutcome, Locale, Session, SessionConfig, StdinSource,
    TURN_TIMEOUT_SECS,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use tokio::time::Duration;

/// Sink the fixed fleet before the clock runs out.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(
        long,
        default_value_t = TURN_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Seconds allowed per turn"
    )]
    timeout: u64,
    #[arg(long, value_enum, default_value_t = Locale::En, help = "Message language")]
    lang: Locale,
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = SessionConfig {
        turn_timeout: Duration::from_secs(cli.timeout),
        locale: cli.lang,
    };
    let engine = GameEngine::new().map_err(|e| anyhow::anyhow!(e))?;
    log::debug!("starting game, turn timeout {:?}", config.turn_timeout);

    let mut session = Session::new(engine, StdinSource::new(), std::io::stdout(), config);
    match session.run().await? {
        // Leave at once; nothing else is pending.
        GameOutcome::Exited => std::process::exit(0),
        outcome => log::debug!("game finished: {:?}", outcome),
    }
    Ok(())
}
