//! Terminal UI components for qclear.
//!
//! Provides Ayu-themed color styling, status icons, terminal detection,
//! and number formatting for the progress and summary text printed while
//! clearing a Qdrant server.

pub mod format;
pub mod styles;
pub mod terminal;
