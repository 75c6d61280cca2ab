//! # What is This?
//!
//! Charcoal is the device layer of a rendering engine, carved out as a small,
//! portable crate. It consists of two pieces:
//!
//! 1. A typed description of the GPU's fixed-function pipeline state
//! (depth/stencil testing, blending, rasterization), cheap enough to build per
//! material or per draw, together with strict parsers that map the symbolic
//! tokens found in material files onto those types.
//! 2. A `Device` abstraction with a single construction seam, so that the
//! higher-level rendering code never touches a native graphics API's enums or
//! object model. The crate ships an OpenGL implementation of it.
//!
//! Pipeline states are plain immutable values with structural equality; two
//! descriptors built from the same fields are interchangeable no matter how
//! they were constructed. The parsers are deliberately fail-fast: an
//! unrecognized token is a configuration error surfaced to the caller, never
//! silently replaced with a default, because a wrong blend mode is expensive
//! to spot visually.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

pub mod math;
pub mod video;

pub mod prelude;
