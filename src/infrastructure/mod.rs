//! Infrastructure layer for filesystem interactions.

pub mod paths;

pub use paths::{resolve_resource, trace_file, TRACE_FILE_NAME};
