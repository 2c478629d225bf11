//! NUMS I/O Library
//!
//! Configuration, JSON records and request resolution for NUMS keys.

pub mod config;
pub mod error;
pub mod file_io;
pub mod record;

pub use config::NumsConfig;
pub use error::{IoError, Result};
pub use file_io::*;
pub use record::{NumsRecord, NumsRequest};
