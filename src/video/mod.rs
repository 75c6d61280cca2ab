//! Typed graphics pipeline states and the device abstraction over native
//! video APIs.

pub mod assets;
pub mod backends;
pub mod errors;

pub mod prelude {
    pub use super::assets::prelude::*;
    pub use super::backends::{Device, WindowSurface};
    pub use super::errors::{Error, Result};
}
