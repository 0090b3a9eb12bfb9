//! Ctrl+C handling for the interactive drill.

use std::thread;
use std::time::Instant;

use crossterm::style::Stylize;
use vocab_core::{InterruptAction, InterruptGuard};

/// Exit status for a forced quit.
pub const FORCE_QUIT_STATUS: i32 = 1;

/// Watch for Ctrl+C on a background thread.
///
/// Each interrupt is fed to `guard`: a warning is printed until it asks for
/// an abort, which ends the process with [`FORCE_QUIT_STATUS`].
pub fn spawn_watcher(mut guard: InterruptGuard) -> std::io::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    thread::Builder::new()
        .name("interrupt-watcher".into())
        .spawn(move || {
            runtime.block_on(async move {
                loop {
                    if let Err(e) = tokio::signal::ctrl_c().await {
                        tracing::warn!("failed to listen for Ctrl+C: {}", e);
                        return;
                    }
                    match guard.register(Instant::now()) {
                        InterruptAction::Abort => {
                            eprintln!("\n{}", "Force quitting.".red());
                            std::process::exit(FORCE_QUIT_STATUS);
                        }
                        InterruptAction::Warn => {
                            eprintln!(
                                "\n  {}",
                                "Press Ctrl+C 3 times quickly to force quit".yellow()
                            );
                        }
                    }
                }
            })
        })?;

    Ok(())
}
