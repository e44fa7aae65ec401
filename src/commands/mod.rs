//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs the operation against the world context.

pub mod flashfile;
pub mod list;
pub mod mark;
pub mod show;
pub mod stats;

// Re-export execute functions for convenience
pub use flashfile::{export, import};
pub use list::execute as list;
pub use mark::execute as mark;
pub use show::execute as show;
pub use stats::execute as stats;

use crate::FlashrError;
use crate::visibility::ViewMode;

/// Resolve a mode name from the CLI (or config) into a `ViewMode`
///
/// # Errors
/// Returns `FlashrError::InvalidInput` naming the valid modes when the
/// string is outside the closed set.
pub fn parse_mode(name: &str) -> Result<ViewMode, FlashrError> {
    ViewMode::parse(name).ok_or_else(|| {
        let valid: Vec<&str> = ViewMode::ALL_MODES.iter().map(|m| m.as_str()).collect();
        FlashrError::InvalidInput(format!(
            "Unknown view mode '{name}' (valid: {})",
            valid.join(", ")
        ))
    })
}
