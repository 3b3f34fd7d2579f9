pub mod calendar;
pub mod config;
pub mod error;
pub mod types;

pub use calendar::Calendar;
pub use config::ExpeditionConfig;
pub use error::{ExpeditionError, Result};
