#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod constants;
pub mod models;
pub mod roles;
pub mod timestamps;
pub mod user_display;

pub use crate::config::*;
pub use crate::models::*;
pub use crate::roles::*;
pub use crate::timestamps::*;
pub use crate::user_display::*;
