pub mod fixtures;
pub mod tracing;

pub use fixtures::{MapSourceLoader, fixture_dir, fixture_path, read_fixture};
pub use tracing::{CapturedEvent, capture_events};
