//! Tracing setup with optional OpenTelemetry file export.
//!
//! ```text
//! tracing macros → EnvFilter → OpenTelemetry layer → OTLP JSON lines → rotated file
//!                            ↘ fmt layer → stderr (when no trace directory is set)
//! ```
//!
//! The trace level comes from [`Config::trace_level`](crate::Config::trace_level)
//! and accepts any `EnvFilter` directive (`"debug"`, `"folio=trace"`, ...).
//! Trace files rotate at 10 MiB and keep three backups.
//!
//! # Usage
//!
//! ```no_run
//! use folio::observability::init_tracing;
//! use folio::Config;
//!
//! let config = Config {
//!     trace_level: Some("debug".to_string()),
//!     trace_dir: Some("/tmp/folio-traces".into()),
//!     ..Config::default()
//! };
//! init_tracing(&config);
//! ```

mod exporter;
mod init;
mod writer;

pub use init::init_tracing;
