//! Built-in health checks for core systems

pub mod build_info;
pub mod config;
pub mod controller;
pub mod system_info;

pub use build_info::BuildInfoCheck;
pub use config::ConfigCheck;
pub use controller::ControllerCheck;
pub use system_info::SystemInfoCheck;
