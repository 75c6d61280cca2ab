extern crate charcoal;
extern crate env_logger;

use std::os::raw::c_void;
use std::ptr;

use charcoal::prelude::*;
use charcoal::video::backends;

/// A window handle whose context is gone; every symbol resolves to null.
struct DeadWindow;

impl WindowSurface for DeadWindow {
    fn get_proc_address(&self, _: &str) -> *const c_void {
        ptr::null()
    }
}

#[test]
fn device_lifetime_is_exclusive() {
    let _ = env_logger::try_init();

    let mut first = backends::new_headless().unwrap();

    unsafe {
        let desc = GraphicsPipelineStateDesc::default();
        first.bind_pipeline_state(&desc).unwrap();
        first.flush().unwrap();
    }

    // A second device while the first is alive fails deterministically, it
    // never silently succeeds with two live contexts.
    match backends::new_headless() {
        Err(Error::DeviceAlreadyExists) => {}
        Ok(_) => panic!("two devices are alive at once"),
        Err(other) => panic!("unexpected error: {:?}", other),
    }

    drop(first);

    // Releasing the first device makes creation possible again.
    let second = backends::new_headless().unwrap();
    drop(second);
}

#[test]
fn invalid_window_fails_fast() {
    let _ = env_logger::try_init();

    // The window is probed before the device lease and before any native
    // call, on both initialization paths.
    for &arb in &[false, true] {
        match backends::new(&DeadWindow, arb) {
            Err(Error::WindowInvalid) => {}
            Ok(_) => panic!("created a device without a usable context"),
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }
}
