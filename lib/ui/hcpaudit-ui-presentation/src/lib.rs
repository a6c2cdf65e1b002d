//! Output formats for audit reports, shared by every front end.

mod format;
pub mod render;

pub use format::OutputFormat;
pub use render::{RenderOptions, render};
