//! OS signal handling.
//!
//! # Responsibilities
//! - Register SIGINT and SIGTERM handlers before traffic is accepted
//! - Log the received signal and exit the process with code 0
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - No drain: in-flight requests are abandoned on exit
//! - The exit path only logs; it never touches shared state

use std::io;
use tokio::task::JoinHandle;

/// Termination signals the service reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    /// SIGINT / Ctrl+C.
    Interrupt,
    /// SIGTERM.
    Terminate,
}

impl ShutdownSignal {
    pub fn name(&self) -> &'static str {
        match self {
            ShutdownSignal::Interrupt => "SIGINT",
            ShutdownSignal::Terminate => "SIGTERM",
        }
    }

    /// Process exit code used when this signal stops the service.
    pub fn exit_code(&self) -> i32 {
        0
    }
}

/// Registered signal streams.
///
/// Registration happens in [`SignalListener::install`], so signals that
/// arrive before the first `recv` are not lost.
pub struct SignalListener {
    #[cfg(unix)]
    interrupt: tokio::signal::unix::Signal,
    #[cfg(unix)]
    terminate: tokio::signal::unix::Signal,
}

impl SignalListener {
    /// Register the handlers. Must be called inside a Tokio runtime.
    pub fn install() -> io::Result<Self> {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            Ok(Self {
                interrupt: signal(SignalKind::interrupt())?,
                terminate: signal(SignalKind::terminate())?,
            })
        }
        #[cfg(not(unix))]
        {
            Ok(Self {})
        }
    }

    /// Wait for the next termination signal.
    pub async fn recv(&mut self) -> io::Result<ShutdownSignal> {
        #[cfg(unix)]
        {
            tokio::select! {
                _ = self.interrupt.recv() => Ok(ShutdownSignal::Interrupt),
                _ = self.terminate.recv() => Ok(ShutdownSignal::Terminate),
            }
        }
        #[cfg(not(unix))]
        {
            tokio::signal::ctrl_c().await?;
            Ok(ShutdownSignal::Interrupt)
        }
    }
}

/// Log the signal and terminate the process.
pub fn terminate(signal: ShutdownSignal) -> ! {
    tracing::info!(signal = signal.name(), "Received {}. Shutting down", signal.name());
    std::process::exit(signal.exit_code())
}

/// Install the handlers and spawn the task that exits on the first signal.
pub fn exit_on_signal() -> io::Result<JoinHandle<()>> {
    let mut listener = SignalListener::install()?;
    Ok(tokio::spawn(async move {
        match listener.recv().await {
            Ok(signal) => terminate(signal),
            Err(e) => tracing::error!(error = %e, "Signal listener failed"),
        }
    }))
}
