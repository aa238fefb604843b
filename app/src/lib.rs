//! Ad pricing client: async API access plus a framework-independent
//! presentation layer.
//!
//! # Overview
//! `AdService` runs the three read-only queries of `adprice-core` over a
//! shared `Transport`. `Presenter` turns them into user actions that write
//! into `MainView` or raise a notification. The `adprice` binary drives a
//! `Presenter` from terminal commands.
//!
//! # Design
//! - Core stays I/O-free; this crate owns the network and the runtime.
//! - One `UreqTransport` (one agent, one base address) serves every query.
//! - Errors are values: `RequestFailed` and `InvalidInput` end at the action
//!   that caused them and become notifications.

use tracing_subscriber::EnvFilter;

pub mod command;
pub mod config;
pub mod currency;
pub mod input;
pub mod presenter;
pub mod service;
pub mod transport;
pub mod view;

pub use config::{AppConfig, Cli};
pub use currency::{format_currency, Locale};
pub use input::{is_placeholder_visible, parse_threshold, InputEvent, InvalidInput, ThresholdInput};
pub use presenter::{ActionOutcome, Notifier, Presenter, INVALID_COST_MESSAGE};
pub use service::AdService;
pub use transport::{Transport, TransportError, UreqTransport};
pub use view::MainView;

/// Install the global tracing subscriber, writing to stderr.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_tracing() -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
}
