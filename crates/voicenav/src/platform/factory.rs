use std::sync::Arc;

use super::adapters::portable::PortablePlatform;
use super::adapters::SharedPlatform;

pub fn default_platform() -> SharedPlatform {
    Arc::new(PortablePlatform::new())
}
