use super::{Device, DeviceLease};

use crate::video::assets::prelude::GraphicsPipelineStateDesc;
use crate::video::errors::Result;

pub struct HeadlessDevice {
    #[allow(dead_code)]
    lease: DeviceLease,
}

impl HeadlessDevice {
    pub(crate) fn new(lease: DeviceLease) -> Self {
        HeadlessDevice { lease }
    }
}

impl Device for HeadlessDevice {
    unsafe fn bind_pipeline_state(&mut self, _: &GraphicsPipelineStateDesc) -> Result<()> {
        Ok(())
    }

    unsafe fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
