//! `tracing` subscriber setup for the binary.

use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter, e.g. `relbench_tools=debug`.
pub const LOG_ENV: &str = "RELBENCH_LOG";

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "debug";

/// Installs a stderr subscriber.
///
/// The filter comes from `RELBENCH_LOG`, then `RUST_LOG`, then the default
/// (`warn`, or `debug` when `verbose`). An unparsable filter falls back to the
/// default. Calling this twice is harmless.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter_expr = filter_expression(
        std::env::var(LOG_ENV).ok(),
        std::env::var("RUST_LOG").ok(),
    );
    let filter = select_filter(filter_expr.as_deref(), fallback);

    let _ = fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .try_init();
}

/// `RELBENCH_LOG` wins over `RUST_LOG` when set.
fn filter_expression(relbench: Option<String>, rust_log: Option<String>) -> Option<String> {
    relbench.or(rust_log)
}

fn select_filter(expr: Option<&str>, fallback: &str) -> EnvFilter {
    expr.map(str::trim)
        .filter(|expr| !expr.is_empty())
        .and_then(|expr| EnvFilter::try_new(expr).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}
