//! Countdown - A single-screen terminal countdown timer
//! 
//! This is the main entry point for the countdown application.

use tokio::{io::BufReader, sync::mpsc};
use tracing::info;

use countdown::{
    config::Config,
    services::{LoopScheduler, SystemClock, TerminalNotifier, TerminalView},
    state::TimerController,
    tasks::{read_commands, run_session},
    utils::{forward_signals, run_to_completion, session_signals},
};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so they do not tear the countdown line
    tracing_subscriber::fmt()
        .with_env_filter(format!("countdown={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting countdown v1.0.0");
    info!(
        "Configuration: tick={}ms, vibrate={}ms, locale={:?}",
        config.tick_ms, config.vibrate_ms, config.locale
    );

    run_to_completion(run(config))?
}

/// Wire the terminal collaborators together and run the session
async fn run(config: Config) -> anyhow::Result<()> {
    let (tx, rx) = mpsc::unbounded_channel();

    let signals = session_signals()?;
    let handle = signals.handle();
    tokio::spawn(forward_signals(signals, tx.clone()));
    tokio::spawn(read_commands(BufReader::new(tokio::io::stdin()), tx));

    let mut controller = TimerController::new(
        SystemClock,
        LoopScheduler::new(),
        TerminalView::stdout(),
        TerminalNotifier::stdout(!config.no_bell),
        config.settings(),
    );

    if let Some(seconds) = &config.seconds {
        controller.set_input_text(seconds.clone());
        controller.submit_input();
    }

    run_session(controller, rx, TerminalView::stdout, std::io::stdout()).await;

    handle.close();
    println!();
    info!("Countdown shutdown complete");
    Ok(())
}
