extern crate charcoal;
extern crate serde_json;

use charcoal::prelude::*;
use charcoal::video::assets::pipeline_state_loader::*;

#[test]
fn compare_op_tokens_round_trip() {
    let members = [
        CompareOp::Never,
        CompareOp::Less,
        CompareOp::Equal,
        CompareOp::LessOrEqual,
        CompareOp::Greater,
        CompareOp::NotEqual,
        CompareOp::GreaterOrEqual,
        CompareOp::Always,
    ];

    for &v in &members {
        assert_eq!(parse_compare_op(compare_op_token(v)).unwrap(), v);
    }

    assert_eq!(parse_compare_op("LESS_OR_EQUAL").unwrap(), CompareOp::LessOrEqual);
    assert!(parse_compare_op("LEQUAL").is_err());
    assert!(parse_compare_op("less_or_equal").is_err());
    assert!(parse_compare_op(" LESS").is_err());
    assert!(parse_compare_op("LESS ").is_err());
    assert!(parse_compare_op("").is_err());
}

#[test]
fn blend_factor_tokens_round_trip() {
    let members = [
        BlendFactor::Zero,
        BlendFactor::One,
        BlendFactor::SrcColor,
        BlendFactor::OneMinusSrcColor,
        BlendFactor::DstColor,
        BlendFactor::OneMinusDstColor,
        BlendFactor::SrcAlpha,
        BlendFactor::OneMinusSrcAlpha,
        BlendFactor::DstAlpha,
        BlendFactor::OneMinusDstAlpha,
        BlendFactor::ConstantColor,
        BlendFactor::OneMinusConstantColor,
        BlendFactor::ConstantAlpha,
        BlendFactor::OneMinusConstantAlpha,
        BlendFactor::SrcAlphaSaturate,
        BlendFactor::Src1Color,
        BlendFactor::OneMinusSrc1Color,
        BlendFactor::Src1Alpha,
        BlendFactor::OneMinusSrc1Alpha,
    ];

    assert_eq!(members.len(), 19);
    for &v in &members {
        assert_eq!(parse_blend_factor(blend_factor_token(v)).unwrap(), v);
    }

    assert_eq!(parse_blend_factor("SRC_ALPHA").unwrap(), BlendFactor::SrcAlpha);
    assert!(parse_blend_factor("SRC_ALPHA2").is_err());
    assert!(parse_blend_factor("src_alpha").is_err());
}

#[test]
fn blend_op_tokens_round_trip() {
    let members = [
        BlendOp::Add,
        BlendOp::Subtract,
        BlendOp::ReverseSubtract,
        BlendOp::Min,
        BlendOp::Max,
    ];

    for &v in &members {
        assert_eq!(parse_blend_op(blend_op_token(v)).unwrap(), v);
    }

    assert!(parse_blend_op("MULTIPLY").is_err());
}

#[test]
fn cull_mode_tokens_round_trip() {
    let members = [CullMode::None, CullMode::Front, CullMode::Back];
    for &v in &members {
        assert_eq!(parse_cull_mode(cull_mode_token(v)).unwrap(), v);
    }

    assert_eq!(parse_cull_mode("BACK").unwrap(), CullMode::Back);
}

#[test]
fn cull_mode_rejects_unknown_token() {
    match parse_cull_mode("BOTH") {
        Err(Error::CullModeParseFailure(token)) => assert_eq!(token, "BOTH"),
        other => panic!("expected a configuration error, got {:?}", other),
    }
}

#[test]
fn front_face_tokens_round_trip() {
    let members = [FrontFace::CounterClockwise, FrontFace::Clockwise];
    for &v in &members {
        assert_eq!(parse_front_face(front_face_token(v)).unwrap(), v);
    }

    assert_eq!(parse_front_face("CLOCKWISE").unwrap(), FrontFace::Clockwise);
    assert!(parse_front_face("CW").is_err());
}

#[test]
fn default_descriptor_is_deterministic() {
    let a = GraphicsPipelineStateDesc::default();
    let b = GraphicsPipelineStateDesc::default();
    assert_eq!(a, b);

    assert_eq!(a.depth_stencil_state.depth_compare_op, CompareOp::LessOrEqual);
    assert!(a.depth_stencil_state.depth_write_enabled);
    assert!(!a.blend_state.enabled);
    assert_eq!(a.blend_state.color_write_mask, color_write_mask::ALL);
    assert_eq!(a.rasterization_state.cull_mode, CullMode::Back);
    assert_eq!(a.rasterization_state.front_face, FrontFace::CounterClockwise);
}

#[test]
fn parsed_and_constructed_descriptors_are_equal() {
    let parsed = DepthStencilStateDesc {
        depth_compare_op: parse_compare_op("LESS_OR_EQUAL").unwrap(),
        depth_write_enabled: true,
    };

    let constructed = DepthStencilStateDesc {
        depth_compare_op: CompareOp::LessOrEqual,
        depth_write_enabled: true,
    };

    assert_eq!(parsed, constructed);

    let mut lhs = GraphicsPipelineStateDesc::default();
    lhs.depth_stencil_state = parsed;
    lhs.rasterization_state.cull_mode = parse_cull_mode("FRONT").unwrap();

    let mut rhs = GraphicsPipelineStateDesc::default();
    rhs.depth_stencil_state = constructed;
    rhs.rasterization_state.cull_mode = CullMode::Front;

    assert_eq!(lhs, rhs);
}

#[test]
fn disabled_blend_still_holds_valid_fields() {
    let desc = BlendStateDesc::default();
    assert!(!desc.enabled);

    // The fields are ignored by consumers, but they must parse and translate
    // like any other value.
    assert_eq!(parse_blend_factor(blend_factor_token(desc.src_color_blend_factor)).unwrap(),
               BlendFactor::One);
    assert_eq!(parse_blend_factor(blend_factor_token(desc.dst_color_blend_factor)).unwrap(),
               BlendFactor::Zero);
    assert_eq!(parse_blend_op(blend_op_token(desc.color_blend_op)).unwrap(), BlendOp::Add);
    assert_eq!(parse_blend_op(blend_op_token(desc.alpha_blend_op)).unwrap(), BlendOp::Add);
    assert_eq!(color_write_mask::from_bits(desc.color_write_mask).unwrap(),
               color_write_mask::ALL);
}

#[test]
fn color_write_mask_composition() {
    use charcoal::video::assets::pipeline_state::color_write_mask::*;

    assert_eq!(ALPHA | BLUE | GREEN | RED, 0x0F);
    assert_eq!(RED | BLUE, BLUE | RED);
    assert_eq!((RED | GREEN) | ALPHA, RED | (GREEN | ALPHA));

    for bits in 0..=ALL {
        assert_eq!(from_bits(bits).unwrap(), bits);
    }

    for bits in (ALL + 1)..=255 {
        match from_bits(bits) {
            Err(Error::ColorWriteMaskInvalid(v)) => assert_eq!(v, bits),
            other => panic!("expected a configuration error, got {:?}", other),
        }
    }
}

#[test]
fn descriptor_survives_material_blob() {
    let mut desc = GraphicsPipelineStateDesc::default();
    desc.blend_state.enabled = true;
    desc.blend_state.src_color_blend_factor = BlendFactor::SrcAlpha;
    desc.blend_state.dst_color_blend_factor = BlendFactor::OneMinusSrcAlpha;
    desc.blend_state.color_write_mask = color_write_mask::RED | color_write_mask::GREEN;
    desc.rasterization_state.cull_mode = CullMode::None;

    let blob = serde_json::to_string(&desc).unwrap();
    let decoded: GraphicsPipelineStateDesc = serde_json::from_str(&blob).unwrap();
    assert_eq!(decoded, desc);
}
