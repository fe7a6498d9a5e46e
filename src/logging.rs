use tracing_subscriber::{
    prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use tracing::{instrument, trace};

/// Installs the global subscriber. `RUST_LOG` wins over `default_filter`.
///
/// Logs go to stderr so they don't interleave with the board on stdout.
#[instrument]
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(default_filter).unwrap_or_else(|err| {
            eprintln!("invalid log filter {default_filter:?} ({err}), using `info`");
            EnvFilter::new("info")
        })
    });

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    trace!("finished");
}
