pub const ERRORS_BUCKET: &str = "errors";
pub const WARNINGS_BUCKET: &str = "warnings";
pub const VERBOSE_BUCKET: &str = "verbose";
pub const GENERAL_BUCKET: &str = "general";

/// Buckets every `TypeCounts` starts with, in render order.
pub const FIXED_TYPE_BUCKETS: [&str; 4] =
    [ERRORS_BUCKET, WARNINGS_BUCKET, VERBOSE_BUCKET, GENERAL_BUCKET];

pub const ERROR_TYPE: &str = "Error";
pub const WARNING_TYPE: &str = "Warning";

/// `[timestamp][frame]` pair the engine prints in front of the `Log` marker.
pub const VOLATILE_PREFIX: &str = r"\[[^\]\r\n]*\]\[[^\]\r\n]*\]";
