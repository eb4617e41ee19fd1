pub mod log_dir;
pub mod tracing;

pub use log_dir::{TestLogDir, line, line_at};
pub use tracing::{CapturedEvent, capture_events};
