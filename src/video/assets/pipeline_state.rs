//! Immutable descriptions of the fixed-function pipeline state.
//!
//! A `GraphicsPipelineStateDesc` captures the complete fixed-function
//! configuration of one draw: depth/stencil testing, blending and
//! rasterization. Descriptors are plain values with structural equality; they
//! never reference a live video resource, so they are free to construct, copy
//! and pass across threads. Translation into native API objects happens in
//! the backends.
//!
//! We don't provide partial-update helpers intentionally. Custom states are
//! described together with a related shader and the pair is swapped as one
//! unit, which rules out inconsistent in-place updates.

use crate::math::prelude::Color;
use crate::video::errors::{Error, Result};

/// A pixel-wise comparison function between the incoming fragment value and
/// the stored destination value.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
pub enum CompareOp {
    /// Never passes the comparison.
    Never,
    /// Passes if the source value is less than the destination value.
    Less,
    /// Passes if the source value is equal to the destination value.
    Equal,
    /// Passes if the source value is less than or equal to the destination value.
    LessOrEqual,
    /// Passes if the source value is greater than the destination value.
    Greater,
    /// Passes if the source value is not equal to the destination value.
    NotEqual,
    /// Passes if the source value is greater than or equal to the destination value.
    GreaterOrEqual,
    /// Always passes the comparison.
    Always,
}

/// Symbolic multipliers applied to the source and destination values during
/// blending.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
pub enum BlendFactor {
    Zero,
    One,
    SrcColor,
    OneMinusSrcColor,
    DstColor,
    OneMinusDstColor,
    SrcAlpha,
    OneMinusSrcAlpha,
    DstAlpha,
    OneMinusDstAlpha,
    ConstantColor,
    OneMinusConstantColor,
    ConstantAlpha,
    OneMinusConstantAlpha,
    SrcAlphaSaturate,
    Src1Color,
    OneMinusSrc1Color,
    Src1Alpha,
    OneMinusSrc1Alpha,
}

impl BlendFactor {
    /// Checks whether the factor reads the second color output of the
    /// fragment stage, which not every context supports.
    pub fn is_dual_source(self) -> bool {
        match self {
            BlendFactor::Src1Color
            | BlendFactor::OneMinusSrc1Color
            | BlendFactor::Src1Alpha
            | BlendFactor::OneMinusSrc1Alpha => true,
            _ => false,
        }
    }
}

/// Specifies how the multiplied source and destination values are combined.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
pub enum BlendOp {
    Add,
    Subtract,
    ReverseSubtract,
    Min,
    Max,
}

/// Specify whether front- or back-facing polygons can be culled.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
pub enum CullMode {
    None,
    Front,
    Back,
}

/// Define front- and back-facing polygons.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
pub enum FrontFace {
    CounterClockwise,
    Clockwise,
}

/// Named bits of the color write mask.
///
/// Plain `u8` constants instead of an enumerated type, so callers compose
/// them with bitwise operators directly. Any value with bits outside of
/// [`ALL`](color_write_mask::ALL) is invalid.
pub mod color_write_mask {
    use super::{Error, Result};

    pub const RED: u8 = 0x01;
    pub const GREEN: u8 = 0x02;
    pub const BLUE: u8 = 0x04;
    pub const ALPHA: u8 = 0x08;
    pub const ALL: u8 = RED | GREEN | BLUE | ALPHA;

    /// Validates a raw mask, rejecting values with bits outside of `ALL`.
    pub fn from_bits(bits: u8) -> Result<u8> {
        if bits & !ALL != 0 {
            Err(Error::ColorWriteMaskInvalid(bits))
        } else {
            Ok(bits)
        }
    }
}

/// Depth and stencil test configuration.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Copy)]
pub struct DepthStencilStateDesc {
    pub depth_compare_op: CompareOp,
    pub depth_write_enabled: bool,
}

impl Default for DepthStencilStateDesc {
    fn default() -> Self {
        DepthStencilStateDesc {
            depth_compare_op: CompareOp::LessOrEqual,
            depth_write_enabled: true,
        }
    }
}

/// Specifies how incoming RGBA values (source) and the RGBA values already in
/// the framebuffer (destination) are combined.
///
/// When `enabled` is false the factor and op fields are ignored by the
/// backends, but they always hold structurally valid values rather than
/// leftovers, so a disabled state can be compared, serialized and re-enabled
/// safely.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Copy)]
pub struct BlendStateDesc {
    pub enabled: bool,
    pub src_color_blend_factor: BlendFactor,
    pub dst_color_blend_factor: BlendFactor,
    pub color_blend_op: BlendOp,
    pub src_alpha_blend_factor: BlendFactor,
    pub dst_alpha_blend_factor: BlendFactor,
    pub alpha_blend_op: BlendOp,
    pub constant: Color<f32>,
    pub color_write_mask: u8,
}

impl Default for BlendStateDesc {
    fn default() -> Self {
        BlendStateDesc {
            enabled: false,
            src_color_blend_factor: BlendFactor::One,
            dst_color_blend_factor: BlendFactor::Zero,
            color_blend_op: BlendOp::Add,
            src_alpha_blend_factor: BlendFactor::One,
            dst_alpha_blend_factor: BlendFactor::Zero,
            alpha_blend_op: BlendOp::Add,
            constant: Color::transparent(),
            color_write_mask: color_write_mask::ALL,
        }
    }
}

/// Primitive rasterization configuration.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
pub struct RasterizationStateDesc {
    pub cull_mode: CullMode,
    pub front_face: FrontFace,
}

impl Default for RasterizationStateDesc {
    fn default() -> Self {
        RasterizationStateDesc {
            cull_mode: CullMode::Back,
            front_face: FrontFace::CounterClockwise,
        }
    }
}

/// The complete fixed-function configuration for one draw.
///
/// The `Default` implementation is the canonical baseline used whenever a
/// material does not override a field: depth test with `LessOrEqual`, depth
/// writes on, blending disabled, back-face culling and counter-clockwise
/// front faces. It is deterministic and has no side effects.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Clone, Copy)]
pub struct GraphicsPipelineStateDesc {
    pub depth_stencil_state: DepthStencilStateDesc,
    pub blend_state: BlendStateDesc,
    pub rasterization_state: RasterizationStateDesc,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_baseline() {
        let desc = GraphicsPipelineStateDesc::default();
        assert_eq!(desc.depth_stencil_state.depth_compare_op, CompareOp::LessOrEqual);
        assert!(desc.depth_stencil_state.depth_write_enabled);
        assert!(!desc.blend_state.enabled);
        assert_eq!(desc.rasterization_state.cull_mode, CullMode::Back);
        assert_eq!(desc.rasterization_state.front_face, FrontFace::CounterClockwise);
        assert_eq!(desc, GraphicsPipelineStateDesc::default());
    }

    #[test]
    fn mask_bits() {
        use super::color_write_mask::*;

        assert_eq!(ALPHA | BLUE | GREEN | RED, 0x0F);
        assert_eq!(RED | GREEN, GREEN | RED);
        assert_eq!((RED | GREEN) | BLUE, RED | (GREEN | BLUE));

        assert_eq!(from_bits(0).unwrap(), 0);
        assert_eq!(from_bits(ALL).unwrap(), ALL);
        assert!(from_bits(0x10).is_err());
        assert!(from_bits(0xF0 | RED).is_err());
    }
}
