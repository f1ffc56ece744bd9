#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]

pub mod layout;
pub mod render;

pub use crate::layout::*;
pub use crate::render::*;
pub use auditline_core::{AuditRole, AuditableRecord, DisplayConfig, LayoutMode, UserRef};
