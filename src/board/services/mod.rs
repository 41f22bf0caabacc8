//! Orchestration services for the board context.

pub mod config;
pub mod session;

pub use config::{BoardConfig, DEFAULT_COMMENT_AUTHOR};
pub use session::{BoardSession, BoardSessionError, BoardSessionResult, LoadSource};
