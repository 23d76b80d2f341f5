mod adapters;
pub mod factory;
pub mod types;

pub use adapters::portable::PortablePlatform;
pub use adapters::recording::{PlatformCall, RecordingPlatform};
pub use adapters::{Platform, SharedPlatform};
pub use factory::default_platform;
pub use types::{Hotkey, MediaKey, RunningProcess};
