//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Comparison fields
pub const FIELD_PATH: &str = "path";
pub const FIELD_REASON: &str = "reason";
pub const FIELD_DIFF_COUNT: &str = "diff_count";
pub const FIELD_MAX_DEPTH: &str = "max_depth";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_DIFFERENCE: &str = "difference";

// Canonical op names
pub const OP_FIND_DIFFERENCES: &str = "find_differences";
pub const OP_PARSE_DOCUMENT: &str = "parse_document";
pub const OP_LOAD_CONFIG: &str = "load_config";
