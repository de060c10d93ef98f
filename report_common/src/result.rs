//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `ReportError`, so functions can simply return `Result<T>`.
use crate::error::ReportError;

/// Workspace-wide `Result` alias with `ReportError` as the default error.
pub type Result<T, E = ReportError> = std::result::Result<T, E>;
