//! Parsers that map the symbolic tokens of material files onto pipeline
//! states.
//!
//! The textual vocabulary belongs to the asset format, not to the state
//! model, so these live as free functions instead of methods on the
//! enumerations; the state model itself can equally be built from code, a
//! script binding, or a cached binary blob.
//!
//! Every parser is strict: tokens are case-sensitive, never trimmed, and the
//! accepted set mirrors the enumeration members exactly. An unknown token is
//! a configuration error carried back to the caller, never coerced to a
//! default, because a silently wrong state produces rendering bugs that are
//! expensive to track down visually.

use super::pipeline_state::{BlendFactor, BlendOp, CompareOp, CullMode, FrontFace};
use crate::video::errors::{Error, Result};

pub fn parse_compare_op(token: &str) -> Result<CompareOp> {
    match token {
        "NEVER" => Ok(CompareOp::Never),
        "LESS" => Ok(CompareOp::Less),
        "EQUAL" => Ok(CompareOp::Equal),
        "LESS_OR_EQUAL" => Ok(CompareOp::LessOrEqual),
        "GREATER" => Ok(CompareOp::Greater),
        "NOT_EQUAL" => Ok(CompareOp::NotEqual),
        "GREATER_OR_EQUAL" => Ok(CompareOp::GreaterOrEqual),
        "ALWAYS" => Ok(CompareOp::Always),
        _ => Err(Error::CompareOpParseFailure(token.into())),
    }
}

pub fn compare_op_token(op: CompareOp) -> &'static str {
    match op {
        CompareOp::Never => "NEVER",
        CompareOp::Less => "LESS",
        CompareOp::Equal => "EQUAL",
        CompareOp::LessOrEqual => "LESS_OR_EQUAL",
        CompareOp::Greater => "GREATER",
        CompareOp::NotEqual => "NOT_EQUAL",
        CompareOp::GreaterOrEqual => "GREATER_OR_EQUAL",
        CompareOp::Always => "ALWAYS",
    }
}

pub fn parse_blend_factor(token: &str) -> Result<BlendFactor> {
    match token {
        "ZERO" => Ok(BlendFactor::Zero),
        "ONE" => Ok(BlendFactor::One),
        "SRC_COLOR" => Ok(BlendFactor::SrcColor),
        "ONE_MINUS_SRC_COLOR" => Ok(BlendFactor::OneMinusSrcColor),
        "DST_COLOR" => Ok(BlendFactor::DstColor),
        "ONE_MINUS_DST_COLOR" => Ok(BlendFactor::OneMinusDstColor),
        "SRC_ALPHA" => Ok(BlendFactor::SrcAlpha),
        "ONE_MINUS_SRC_ALPHA" => Ok(BlendFactor::OneMinusSrcAlpha),
        "DST_ALPHA" => Ok(BlendFactor::DstAlpha),
        "ONE_MINUS_DST_ALPHA" => Ok(BlendFactor::OneMinusDstAlpha),
        "CONSTANT_COLOR" => Ok(BlendFactor::ConstantColor),
        "ONE_MINUS_CONSTANT_COLOR" => Ok(BlendFactor::OneMinusConstantColor),
        "CONSTANT_ALPHA" => Ok(BlendFactor::ConstantAlpha),
        "ONE_MINUS_CONSTANT_ALPHA" => Ok(BlendFactor::OneMinusConstantAlpha),
        "SRC_ALPHA_SATURATE" => Ok(BlendFactor::SrcAlphaSaturate),
        "SRC1_COLOR" => Ok(BlendFactor::Src1Color),
        "ONE_MINUS_SRC1_COLOR" => Ok(BlendFactor::OneMinusSrc1Color),
        "SRC1_ALPHA" => Ok(BlendFactor::Src1Alpha),
        "ONE_MINUS_SRC1_ALPHA" => Ok(BlendFactor::OneMinusSrc1Alpha),
        _ => Err(Error::BlendFactorParseFailure(token.into())),
    }
}

pub fn blend_factor_token(factor: BlendFactor) -> &'static str {
    match factor {
        BlendFactor::Zero => "ZERO",
        BlendFactor::One => "ONE",
        BlendFactor::SrcColor => "SRC_COLOR",
        BlendFactor::OneMinusSrcColor => "ONE_MINUS_SRC_COLOR",
        BlendFactor::DstColor => "DST_COLOR",
        BlendFactor::OneMinusDstColor => "ONE_MINUS_DST_COLOR",
        BlendFactor::SrcAlpha => "SRC_ALPHA",
        BlendFactor::OneMinusSrcAlpha => "ONE_MINUS_SRC_ALPHA",
        BlendFactor::DstAlpha => "DST_ALPHA",
        BlendFactor::OneMinusDstAlpha => "ONE_MINUS_DST_ALPHA",
        BlendFactor::ConstantColor => "CONSTANT_COLOR",
        BlendFactor::OneMinusConstantColor => "ONE_MINUS_CONSTANT_COLOR",
        BlendFactor::ConstantAlpha => "CONSTANT_ALPHA",
        BlendFactor::OneMinusConstantAlpha => "ONE_MINUS_CONSTANT_ALPHA",
        BlendFactor::SrcAlphaSaturate => "SRC_ALPHA_SATURATE",
        BlendFactor::Src1Color => "SRC1_COLOR",
        BlendFactor::OneMinusSrc1Color => "ONE_MINUS_SRC1_COLOR",
        BlendFactor::Src1Alpha => "SRC1_ALPHA",
        BlendFactor::OneMinusSrc1Alpha => "ONE_MINUS_SRC1_ALPHA",
    }
}

pub fn parse_blend_op(token: &str) -> Result<BlendOp> {
    match token {
        "ADD" => Ok(BlendOp::Add),
        "SUBTRACT" => Ok(BlendOp::Subtract),
        "REVERSE_SUBTRACT" => Ok(BlendOp::ReverseSubtract),
        "MIN" => Ok(BlendOp::Min),
        "MAX" => Ok(BlendOp::Max),
        _ => Err(Error::BlendOpParseFailure(token.into())),
    }
}

pub fn blend_op_token(op: BlendOp) -> &'static str {
    match op {
        BlendOp::Add => "ADD",
        BlendOp::Subtract => "SUBTRACT",
        BlendOp::ReverseSubtract => "REVERSE_SUBTRACT",
        BlendOp::Min => "MIN",
        BlendOp::Max => "MAX",
    }
}

pub fn parse_cull_mode(token: &str) -> Result<CullMode> {
    match token {
        "NONE" => Ok(CullMode::None),
        "FRONT" => Ok(CullMode::Front),
        "BACK" => Ok(CullMode::Back),
        _ => Err(Error::CullModeParseFailure(token.into())),
    }
}

pub fn cull_mode_token(mode: CullMode) -> &'static str {
    match mode {
        CullMode::None => "NONE",
        CullMode::Front => "FRONT",
        CullMode::Back => "BACK",
    }
}

pub fn parse_front_face(token: &str) -> Result<FrontFace> {
    match token {
        "COUNTER_CLOCKWISE" => Ok(FrontFace::CounterClockwise),
        "CLOCKWISE" => Ok(FrontFace::Clockwise),
        _ => Err(Error::FrontFaceParseFailure(token.into())),
    }
}

pub fn front_face_token(face: FrontFace) -> &'static str {
    match face {
        FrontFace::CounterClockwise => "COUNTER_CLOCKWISE",
        FrontFace::Clockwise => "CLOCKWISE",
    }
}
