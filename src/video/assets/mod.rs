pub mod pipeline_state;
pub mod pipeline_state_loader;

pub mod prelude {
    pub use super::pipeline_state::{
        color_write_mask, BlendFactor, BlendOp, BlendStateDesc, CompareOp, CullMode,
        DepthStencilStateDesc, FrontFace, GraphicsPipelineStateDesc, RasterizationStateDesc,
    };

    pub use super::pipeline_state_loader::{
        parse_blend_factor, parse_blend_op, parse_compare_op, parse_cull_mode, parse_front_face,
    };
}
