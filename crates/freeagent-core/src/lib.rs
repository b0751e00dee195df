// Library root: greedy free-agent signing under a salary budget and a
// position limit, ranked by VORP per dollar.

pub mod candidate;
pub mod config;
pub mod ranking;
pub mod selection;

pub use candidate::Candidate;
pub use config::{ConfigError, SelectionConfig};
pub use ranking::rank;
pub use selection::{select, try_select, validate_all, Selection, SelectionError, StopReason};
