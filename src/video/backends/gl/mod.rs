pub mod capabilities;
pub mod device;
pub mod types;

use std::os::raw::c_void;

use super::WindowSurface;

impl WindowSurface for glutin::GlWindow {
    fn get_proc_address(&self, symbol: &str) -> *const c_void {
        glutin::GlContext::get_proc_address(self, symbol) as *const c_void
    }
}
