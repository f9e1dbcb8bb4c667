mod signal;
mod traits;

pub use signal::SignalSink;
pub use traits::{OutputError, StateSink};
