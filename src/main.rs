use anyhow::Result;
use tracing_subscriber::EnvFilter;
use workhours::commands::Cli;
use workhours::libs::messages::macros::is_debug_mode;

fn main() -> Result<()> {
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .init();
    }

    Cli::menu()
}
