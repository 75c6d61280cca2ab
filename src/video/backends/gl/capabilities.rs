use std::cmp;
use std::ffi;

use gl::types::*;

use crate::video::errors::{Error, Result};

/// Describes the OpenGL context profile.
#[derive(Debug, Copy, Clone)]
pub enum Profile {
    /// The context uses only future-compatible functions and definitions.
    Core,
    /// The context includes all immediate mode functions and definitions.
    Compatibility,
}

/// Describes a version.
///
/// A version can only be compared to another version if they belong to the
/// same API. For example, both `Version::GL(3, 0) >= Version::ES(3, 0)` and
/// `Version::ES(3, 0) >= Version::GL(3, 0)` return `false`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Version {
    /// Regular OpenGL.
    GL(u8, u8),
    /// OpenGL embedded system.
    ES(u8, u8),
}

impl PartialOrd for Version {
    #[inline]
    fn partial_cmp(&self, other: &Version) -> Option<cmp::Ordering> {
        let (es1, major1, minor1) = match *self {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        };

        let (es2, major2, minor2) = match *other {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        };

        if es1 != es2 {
            None
        } else {
            match major1.cmp(&major2) {
                cmp::Ordering::Equal => Some(minor1.cmp(&minor2)),
                v => Some(v),
            }
        }
    }
}

impl Version {
    /// Obtains the OpenGL version of the current context using the loaded
    /// functions.
    ///
    /// # Unsafe
    ///
    /// You must ensure that the functions belong to the current context,
    /// otherwise you will get an undefined behavior.
    pub unsafe fn parse() -> Result<Version> {
        let desc = gl::GetString(gl::VERSION);
        if desc.is_null() {
            return Err(Error::Backend("[GL] Version string is null.".into()));
        }

        let desc = String::from_utf8(ffi::CStr::from_ptr(desc as *const _).to_bytes().to_vec())
            .map_err(|_| Error::Backend("[GL] Version string is unformatted.".into()))?;

        Version::from_desc(&desc)
    }

    /// Parses a `GL_VERSION` description string.
    pub fn from_desc(desc: &str) -> Result<Version> {
        let unformatted = || Error::Backend("[GL] Version string is unformatted.".into());

        let (es, desc) = if desc.starts_with("OpenGL ES ") {
            (true, &desc[10..])
        } else if desc.starts_with("OpenGL ES-") {
            // The embedded common profiles report as `OpenGL ES-{CM,CL} x.y`.
            (true, desc.get(13..).ok_or_else(unformatted)?)
        } else {
            (false, &desc[..])
        };

        let desc = desc.split(' ').next().ok_or_else(unformatted)?;

        let mut iter = desc.split(move |c: char| c == '.');
        let major = iter
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(unformatted)?;
        let minor = iter
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(unformatted)?;

        if es {
            Ok(Version::ES(major, minor))
        } else {
            Ok(Version::GL(major, minor))
        }
    }
}

macro_rules! extensions {
    ($($string:expr => $field:ident,)+) => {
        /// Contains data about the list of extensions.
        #[derive(Debug, Clone, Copy)]
        pub struct Extensions {
            $(
                pub $field: bool,
            )+
        }

        impl Extensions {
            /// Returns the list of extensions supported by the context.
            ///
            /// *Safety*: the corresponding OpenGL context must be current in
            /// the thread, and its version must match `version`.
            pub unsafe fn parse(version: Version) -> Result<Extensions> {
                let strings: Vec<String> = if version >= Version::GL(3, 0) || version >= Version::ES(3, 0) {
                    let mut num_extensions = 0;
                    gl::GetIntegerv(gl::NUM_EXTENSIONS, &mut num_extensions);
                    let mut strings = Vec::with_capacity(num_extensions as usize);
                    for i in 0..num_extensions {
                        let ext = gl::GetStringi(gl::EXTENSIONS, i as GLuint);
                        if ext.is_null() {
                            return Err(Error::Backend("[GL] Extension string is null.".into()));
                        }

                        let ext = String::from_utf8(ffi::CStr::from_ptr(ext as *const _).to_bytes().to_vec())
                            .map_err(|_| Error::Backend("[GL] Extension string is unformatted.".into()))?;
                        strings.push(ext);
                    }
                    strings
                } else {
                    let list = gl::GetString(gl::EXTENSIONS);
                    if list.is_null() {
                        return Err(Error::Backend("[GL] Extension string is null.".into()));
                    }

                    let list = String::from_utf8(ffi::CStr::from_ptr(list as *const _).to_bytes().to_vec())
                        .map_err(|_| Error::Backend("[GL] Extension string is unformatted.".into()))?;
                    list.split(' ').map(|e| e.to_owned()).collect()
                };

                let mut extensions = Extensions {
                    $(
                        $field: false,
                    )+
                };

                for extension in strings {
                    match &extension[..] {
                        $(
                            $string => extensions.$field = true,
                        )+
                        _ => ()
                    }
                }

                Ok(extensions)
            }
        }
    }
}

extensions! {
    "GL_ARB_vertex_program" => gl_arb_vertex_program,
    "GL_ARB_fragment_program" => gl_arb_fragment_program,
    "GL_ARB_shader_objects" => gl_arb_shader_objects,
    "GL_ARB_vertex_shader" => gl_arb_vertex_shader,
    "GL_ARB_fragment_shader" => gl_arb_fragment_shader,
    "GL_ARB_blend_func_extended" => gl_arb_blend_func_extended,
}

/// Represents the capabilities of the context.
///
/// Contrary to the pipeline state, these values never change.
#[derive(Debug)]
pub struct Capabilities {
    /// Returns a version or release number. Vendor-specific information may
    /// follow the version number.
    pub version: Version,

    /// The company responsible for this GL implementation.
    pub vendor: String,

    /// The name of the renderer. This name is typically specific to a
    /// particular configuration of a hardware platform.
    pub renderer: String,

    /// The list of OpenGL extensions supported by this implementation.
    pub extensions: Extensions,

    /// The OpenGL context profile if available.
    ///
    /// The context profile is available from OpenGL 3.2 onwards. `None` if
    /// not supported.
    pub profile: Option<Profile>,
}

impl Capabilities {
    pub unsafe fn parse() -> Result<Capabilities> {
        let version = Version::parse()?;
        let extensions = Extensions::parse(version)?;

        Ok(Capabilities {
            version,
            extensions,
            vendor: Capabilities::parse_str(gl::VENDOR)?,
            renderer: Capabilities::parse_str(gl::RENDERER)?,
            profile: Capabilities::parse_profile(version),
        })
    }

    /// Checks whether blend factors reading the second fragment color output
    /// are available.
    pub fn has_dual_source_blend(&self) -> bool {
        self.version >= Version::GL(3, 3) || self.extensions.gl_arb_blend_func_extended
    }

    #[inline]
    unsafe fn parse_str(id: GLenum) -> Result<String> {
        let s = gl::GetString(id);
        if s.is_null() {
            return Err(Error::Backend(format!("[GL] String of {} is null.", id)));
        }

        String::from_utf8(ffi::CStr::from_ptr(s as *const _).to_bytes().to_vec())
            .map_err(|_| Error::Backend(format!("[GL] String of {} is unformatted.", id)))
    }

    #[inline]
    unsafe fn parse_profile(version: Version) -> Option<Profile> {
        if version >= Version::GL(3, 2) {
            let mut val = 0;
            gl::GetIntegerv(gl::CONTEXT_PROFILE_MASK, &mut val);
            let val = val as GLenum;
            if (val & gl::CONTEXT_COMPATIBILITY_PROFILE_BIT) != 0 {
                Some(Profile::Compatibility)
            } else if (val & gl::CONTEXT_CORE_PROFILE_BIT) != 0 {
                Some(Profile::Core)
            } else {
                None
            }
        } else {
            None
        }
    }
}
