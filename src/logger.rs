use tracing_subscriber::{EnvFilter, FmtSubscriber};

const DEFAULT_DIRECTIVE: &str = "strest_cloudwatch=info";
const VERBOSE_DIRECTIVE: &str = "strest_cloudwatch=debug";

/// Install the plugin's tracing subscriber. `STREST_CLOUDWATCH_LOG` (then
/// `RUST_LOG`) overrides the crate-scoped default. Safe to call more than
/// once; only the first subscriber wins.
pub fn init_logging(verbose: bool) {
    let filter = std::env::var("STREST_CLOUDWATCH_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(
            |_| {
                if verbose {
                    EnvFilter::new(VERBOSE_DIRECTIVE)
                } else {
                    EnvFilter::new(DEFAULT_DIRECTIVE)
                }
            },
            |value| {
                EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
            },
        );

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_is_idempotent() {
        init_logging(false);
        init_logging(false);
    }
}
