pub mod cleaning;
pub mod columns;
pub mod config;
pub mod dataset;
pub mod error;
pub mod pipeline;
pub mod projection;

pub use config::{CleanerConfig, InputEncoding};
pub use error::{CleanError, Result, Stage};
pub use pipeline::{check, run, CheckReport, CleanReport};
