pub use crate::math::prelude::*;
pub use crate::video::prelude::*;
