use gl::types::*;

use crate::video::assets::prelude::*;
use crate::video::errors::{Error, Result};

use super::super::{Device, DeviceLease, WindowSurface};
use super::capabilities::{Capabilities, Version};

/// The OpenGL implementation of `Device`.
///
/// Owns the loaded function pointers of one native context and a cache of the
/// currently bound fixed-function state, so that re-binding an unchanged
/// descriptor issues no native calls.
pub struct GLDevice {
    arb: bool,
    capabilities: Capabilities,
    state: GraphicsPipelineStateDesc,
    #[allow(dead_code)]
    lease: DeviceLease,
}

impl GLDevice {
    /// Loads the context's functions through `window` and verifies the
    /// requirements of the chosen initialization path.
    ///
    /// *Safety*: the context behind `window` must be current in the calling
    /// thread and stay so for the lifetime of the device.
    pub unsafe fn new(window: &dyn WindowSurface, arb: bool) -> Result<Self> {
        // A window that can not even resolve `glGetString` carries no usable
        // context. Bail out before any function pointer is invoked.
        if window.get_proc_address("glGetString").is_null() {
            return Err(Error::WindowInvalid);
        }

        let lease = DeviceLease::acquire()?;

        gl::load_with(|symbol| window.get_proc_address(symbol) as *const _);

        let capabilities = Capabilities::parse()?;
        info!("GLDevice {:#?}", capabilities);
        check_requirements(&capabilities, arb)?;

        let mut device = GLDevice {
            arb,
            capabilities,
            state: GraphicsPipelineStateDesc::default(),
            lease,
        };

        // Force the canonical baseline onto the context so the cache and the
        // native state agree from the first frame on.
        let baseline = GraphicsPipelineStateDesc::default();
        device.set_depth_stencil_state(baseline.depth_stencil_state, true)?;
        device.set_blend_state(baseline.blend_state, true)?;
        device.set_rasterization_state(baseline.rasterization_state, true)?;

        Ok(device)
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    unsafe fn set_depth_stencil_state(
        &mut self,
        desc: DepthStencilStateDesc,
        force: bool,
    ) -> Result<()> {
        let last = self.state.depth_stencil_state;

        // Note that even if the depth mask is non-zero, the depth buffer is
        // not updated while the depth test is disabled.
        let enable = desc.depth_compare_op != CompareOp::Always || desc.depth_write_enabled;
        let last_enable = last.depth_compare_op != CompareOp::Always || last.depth_write_enabled;
        if force || enable != last_enable {
            if enable {
                gl::Enable(gl::DEPTH_TEST);
            } else {
                gl::Disable(gl::DEPTH_TEST);
            }
        }

        if force || last.depth_write_enabled != desc.depth_write_enabled {
            if desc.depth_write_enabled {
                gl::DepthMask(gl::TRUE);
            } else {
                gl::DepthMask(gl::FALSE);
            }
        }

        if force || last.depth_compare_op != desc.depth_compare_op {
            gl::DepthFunc(desc.depth_compare_op.into());
        }

        self.state.depth_stencil_state = desc;
        check()
    }

    unsafe fn set_blend_state(&mut self, desc: BlendStateDesc, force: bool) -> Result<()> {
        color_write_mask::from_bits(desc.color_write_mask)?;

        let last = self.state.blend_state;

        if force || last != desc {
            if desc.enabled {
                self.check_blend_factors(&desc)?;

                if force || !last.enabled {
                    gl::Enable(gl::BLEND);
                }

                gl::BlendFuncSeparate(
                    desc.src_color_blend_factor.into(),
                    desc.dst_color_blend_factor.into(),
                    desc.src_alpha_blend_factor.into(),
                    desc.dst_alpha_blend_factor.into(),
                );
                gl::BlendEquationSeparate(desc.color_blend_op.into(), desc.alpha_blend_op.into());

                let constant = desc.constant.clip();
                gl::BlendColor(constant.r, constant.g, constant.b, constant.a);
            } else if force || last.enabled {
                gl::Disable(gl::BLEND);
            }
        }

        if force || last.color_write_mask != desc.color_write_mask {
            let mask = desc.color_write_mask;
            gl::ColorMask(
                (mask & color_write_mask::RED != 0) as GLboolean,
                (mask & color_write_mask::GREEN != 0) as GLboolean,
                (mask & color_write_mask::BLUE != 0) as GLboolean,
                (mask & color_write_mask::ALPHA != 0) as GLboolean,
            );
        }

        self.state.blend_state = desc;
        check()
    }

    unsafe fn set_rasterization_state(
        &mut self,
        desc: RasterizationStateDesc,
        force: bool,
    ) -> Result<()> {
        let last = self.state.rasterization_state;

        if force || last.cull_mode != desc.cull_mode {
            if desc.cull_mode != CullMode::None {
                gl::Enable(gl::CULL_FACE);
                gl::CullFace(match desc.cull_mode {
                    CullMode::Front => gl::FRONT,
                    CullMode::Back => gl::BACK,
                    CullMode::None => unreachable!(),
                });
            } else {
                gl::Disable(gl::CULL_FACE);
            }
        }

        if force || last.front_face != desc.front_face {
            gl::FrontFace(desc.front_face.into());
        }

        self.state.rasterization_state = desc;
        check()
    }

    fn check_blend_factors(&self, desc: &BlendStateDesc) -> Result<()> {
        let factors = [
            desc.src_color_blend_factor,
            desc.dst_color_blend_factor,
            desc.src_alpha_blend_factor,
            desc.dst_alpha_blend_factor,
        ];

        // The legacy ARB program path never exposes a second fragment color
        // output, and modern contexts need GL 3.3 or the extension.
        if factors.iter().any(|v| v.is_dual_source())
            && (self.arb || !self.capabilities.has_dual_source_blend())
        {
            return Err(Error::Requirement("dual source blending".into()));
        }

        Ok(())
    }
}

impl Device for GLDevice {
    unsafe fn bind_pipeline_state(&mut self, desc: &GraphicsPipelineStateDesc) -> Result<()> {
        self.set_depth_stencil_state(desc.depth_stencil_state, false)?;
        self.set_blend_state(desc.blend_state, false)?;
        self.set_rasterization_state(desc.rasterization_state, false)
    }

    unsafe fn flush(&mut self) -> Result<()> {
        gl::Finish();
        check()
    }
}

fn check_requirements(caps: &Capabilities, arb: bool) -> Result<()> {
    if arb {
        if !caps.extensions.gl_arb_vertex_program || !caps.extensions.gl_arb_fragment_program {
            return Err(Error::Requirement("ARB assembly programs".into()));
        }
    } else {
        // `Version` orders only within the same API, so both floors have to
        // be asserted positively; a negated `<` conjunction would pass every
        // cross-API comparison.
        let supported = caps.version >= Version::GL(2, 1) || caps.version >= Version::ES(2, 0);
        if !supported {
            return Err(Error::Requirement("OpenGL 2.1".into()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::super::capabilities::{Capabilities, Extensions, Version};
    use super::*;

    fn capabilities(version: Version, arb_programs: bool) -> Capabilities {
        Capabilities {
            version,
            vendor: "mock".into(),
            renderer: "mock".into(),
            extensions: Extensions {
                gl_arb_vertex_program: arb_programs,
                gl_arb_fragment_program: arb_programs,
                gl_arb_shader_objects: false,
                gl_arb_vertex_shader: false,
                gl_arb_fragment_shader: false,
                gl_arb_blend_func_extended: false,
            },
            profile: None,
        }
    }

    #[test]
    fn modern_path_requires_gl_2_1() {
        assert!(check_requirements(&capabilities(Version::GL(2, 1), false), false).is_ok());
        assert!(check_requirements(&capabilities(Version::GL(4, 6), false), false).is_ok());
        assert!(check_requirements(&capabilities(Version::ES(2, 0), false), false).is_ok());
        assert!(check_requirements(&capabilities(Version::ES(3, 2), false), false).is_ok());

        for &version in &[Version::GL(1, 1), Version::GL(2, 0), Version::ES(1, 1)] {
            match check_requirements(&capabilities(version, false), false) {
                Err(Error::Requirement(_)) => {}
                other => panic!("{:?} passed the modern path: {:?}", version, other),
            }
        }
    }

    #[test]
    fn arb_path_requires_assembly_programs() {
        assert!(check_requirements(&capabilities(Version::GL(1, 4), true), true).is_ok());

        match check_requirements(&capabilities(Version::GL(4, 6), false), true) {
            Err(Error::Requirement(_)) => {}
            other => panic!("missing extensions passed the ARB path: {:?}", other),
        }
    }
}

unsafe fn check() -> Result<()> {
    match gl::GetError() {
        gl::NO_ERROR => Ok(()),
        gl::INVALID_ENUM => Err(Error::Backend("[GL] Invalid enum.".into())),
        gl::INVALID_VALUE => Err(Error::Backend("[GL] Invalid value.".into())),
        gl::INVALID_OPERATION => Err(Error::Backend("[GL] Invalid operation.".into())),
        gl::INVALID_FRAMEBUFFER_OPERATION => {
            Err(Error::Backend("[GL] Invalid framebuffer operation.".into()))
        }
        gl::OUT_OF_MEMORY => Err(Error::Backend("[GL] Out of memory.".into())),
        other => Err(Error::Backend(format!("[GL] Unknown error 0x{:X}.", other))),
    }
}
