//! Global `tracing` subscriber setup.

use tracing::level_filters::LevelFilter;

/// Install the fmt subscriber. Later calls are no-ops.
pub fn init(level: LevelFilter) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_thread_names(true)
        .try_init();
}
