pub mod config;
pub mod controller;
pub mod error;
pub mod sysfs;

pub use config::Config;
pub use controller::{Action, BrightnessControl};
pub use error::Error;
pub use sysfs::BacklightDevice;
