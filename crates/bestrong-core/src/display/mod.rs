//! Markdown display for terminal and MCP output.
//!
//! Domain models implement `Display` directly (see [`models`]); the wrapper
//! types here format collections and operation outcomes. All output is
//! markdown so it renders both in a terminal (through termimad) and as MCP
//! tool text.
//!
//! ```rust
//! use bestrong_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Workout deleted");
//! assert_eq!(status.to_string(), "Success: Workout deleted\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;
pub mod template;

pub use collections::SavedWorkouts;
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult};
pub use status::OperationStatus;
pub use template::WeeklyTemplate;
