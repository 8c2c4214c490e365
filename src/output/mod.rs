mod cleanup;
mod sink;

pub use cleanup::{cleanup_destination, prune_stale_entries};
pub use sink::OutputSink;

#[cfg(test)]
mod sink_test;
