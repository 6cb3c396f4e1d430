use clap::Parser as _;
use masolve::BaseArgs;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

pub fn main() -> anyhow::Result<()> {
    // Solver events go to stderr, so that JSON written to stdout stays clean.
    // Verbosity is controlled with RUST_LOG.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = BaseArgs::parse();
    args.evaluate()
}
