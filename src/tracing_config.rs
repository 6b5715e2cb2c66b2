//! Diagnostic logging setup.
//!
//! The engine emits flat `trace!`/`debug!` events from the classifier, the
//! complexity rules, and the field engine; it opens no spans. A host that
//! wants the events opts in via `DECLINT_LOG` (same filter syntax as
//! `RUST_LOG`, e.g. `debug` or `declint_solver=trace`); when neither
//! variable is set nothing is installed and the engine stays silent.
//!
//! `DECLINT_LOG_FORMAT=json` switches the stderr output from text lines to
//! newline-delimited JSON for hosts that fold engine logs into their own.

use std::io;

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber for the engine's diagnostic events.
///
/// Returns whether a subscriber was installed, so a host embedding the
/// engine can skip its own setup when this one took effect.
pub fn init_tracing() -> bool {
    let Some(filter) = env_filter() else {
        return false;
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if json_requested() {
        builder.json().init();
    } else {
        builder.init();
    }
    true
}

/// The event filter from `DECLINT_LOG`, falling back to `RUST_LOG`.
/// `None` means logging was not requested at all.
fn env_filter() -> Option<EnvFilter> {
    let spec = std::env::var("DECLINT_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()?;
    Some(EnvFilter::builder().parse_lossy(spec))
}

fn json_requested() -> bool {
    std::env::var("DECLINT_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"))
}
