//! The backend of the video subsystem, responsible for owning the native
//! graphics context and translating pipeline states into low-level API calls.

pub mod gl;
pub mod headless;

use std::os::raw::c_void;
use std::sync::atomic::{AtomicBool, Ordering};

use super::assets::prelude::GraphicsPipelineStateDesc;
use super::errors::{Error, Result};

/// The native window surface the device renders into. Supplied by the
/// windowing collaborator and treated as opaque here; the only requirement is
/// resolving video API symbols.
pub trait WindowSurface {
    fn get_proc_address(&self, symbol: &str) -> *const c_void;
}

/// A live connection to a native graphics context.
///
/// The device is created exactly once at startup through [`new`], owned by
/// the rendering subsystem, and destroyed before the window it wraps. All
/// backend resources are released on drop. Everything derived from a device
/// must be touched exclusively from the thread that owns the context;
/// lifetime transitions require exclusive access, enforced by the owning
/// subsystem's startup/shutdown sequencing.
pub trait Device {
    /// Translates `desc` and applies it to the underlying context. Redundant
    /// native state changes are elided.
    unsafe fn bind_pipeline_state(&mut self, desc: &GraphicsPipelineStateDesc) -> Result<()>;

    /// Blocks until all pending state changes reached the context.
    unsafe fn flush(&mut self) -> Result<()>;
}

static DEVICE_ALIVE: AtomicBool = AtomicBool::new(false);

/// Witness of the one-device-per-process rule. Devices hold it for their
/// whole lifetime; dropping the device releases it.
pub(crate) struct DeviceLease(());

impl DeviceLease {
    pub fn acquire() -> Result<DeviceLease> {
        if DEVICE_ALIVE
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(Error::DeviceAlreadyExists);
        }

        Ok(DeviceLease(()))
    }
}

impl Drop for DeviceLease {
    fn drop(&mut self) {
        DEVICE_ALIVE.store(false, Ordering::SeqCst);
    }
}

/// Creates the OpenGL device against `window`.
///
/// `arb` selects between two mutually exclusive initialization strategies:
/// `false` takes the modern path and requires at least OpenGL 2.1, `true`
/// takes the legacy path built on the ARB assembly-program extensions. There
/// is no fallback from one to the other; an unmet requirement fails the
/// construction and no partially initialized device is ever returned.
/// Construction failures reflect an unusable window/driver combination and
/// are not worth retrying with the same parameters.
pub fn new(window: &dyn WindowSurface, arb: bool) -> Result<Box<dyn Device>> {
    let device = unsafe { self::gl::device::GLDevice::new(window, arb)? };
    Ok(Box::new(device))
}

/// Creates a device that accepts every operation and touches no native API.
/// It still counts against the one-device-per-process rule.
pub fn new_headless() -> Result<Box<dyn Device>> {
    let device = self::headless::HeadlessDevice::new(DeviceLease::acquire()?);
    Ok(Box::new(device))
}
