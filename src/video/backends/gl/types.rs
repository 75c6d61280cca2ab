use gl::types::*;

use crate::video::assets::prelude::*;

impl From<CompareOp> for GLenum {
    fn from(op: CompareOp) -> Self {
        match op {
            CompareOp::Never => gl::NEVER,
            CompareOp::Less => gl::LESS,
            CompareOp::Equal => gl::EQUAL,
            CompareOp::LessOrEqual => gl::LEQUAL,
            CompareOp::Greater => gl::GREATER,
            CompareOp::NotEqual => gl::NOTEQUAL,
            CompareOp::GreaterOrEqual => gl::GEQUAL,
            CompareOp::Always => gl::ALWAYS,
        }
    }
}

impl From<BlendFactor> for GLenum {
    fn from(factor: BlendFactor) -> Self {
        match factor {
            BlendFactor::Zero => gl::ZERO,
            BlendFactor::One => gl::ONE,
            BlendFactor::SrcColor => gl::SRC_COLOR,
            BlendFactor::OneMinusSrcColor => gl::ONE_MINUS_SRC_COLOR,
            BlendFactor::DstColor => gl::DST_COLOR,
            BlendFactor::OneMinusDstColor => gl::ONE_MINUS_DST_COLOR,
            BlendFactor::SrcAlpha => gl::SRC_ALPHA,
            BlendFactor::OneMinusSrcAlpha => gl::ONE_MINUS_SRC_ALPHA,
            BlendFactor::DstAlpha => gl::DST_ALPHA,
            BlendFactor::OneMinusDstAlpha => gl::ONE_MINUS_DST_ALPHA,
            BlendFactor::ConstantColor => gl::CONSTANT_COLOR,
            BlendFactor::OneMinusConstantColor => gl::ONE_MINUS_CONSTANT_COLOR,
            BlendFactor::ConstantAlpha => gl::CONSTANT_ALPHA,
            BlendFactor::OneMinusConstantAlpha => gl::ONE_MINUS_CONSTANT_ALPHA,
            BlendFactor::SrcAlphaSaturate => gl::SRC_ALPHA_SATURATE,
            BlendFactor::Src1Color => gl::SRC1_COLOR,
            BlendFactor::OneMinusSrc1Color => gl::ONE_MINUS_SRC1_COLOR,
            BlendFactor::Src1Alpha => gl::SRC1_ALPHA,
            BlendFactor::OneMinusSrc1Alpha => gl::ONE_MINUS_SRC1_ALPHA,
        }
    }
}

impl From<BlendOp> for GLenum {
    fn from(op: BlendOp) -> Self {
        match op {
            BlendOp::Add => gl::FUNC_ADD,
            BlendOp::Subtract => gl::FUNC_SUBTRACT,
            BlendOp::ReverseSubtract => gl::FUNC_REVERSE_SUBTRACT,
            BlendOp::Min => gl::MIN,
            BlendOp::Max => gl::MAX,
        }
    }
}

impl From<FrontFace> for GLenum {
    fn from(face: FrontFace) -> Self {
        match face {
            FrontFace::Clockwise => gl::CW,
            FrontFace::CounterClockwise => gl::CCW,
        }
    }
}
