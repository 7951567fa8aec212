pub mod config;
pub mod hardware;
pub mod logging;

pub use config::load_config;
pub use hardware::open_hardware;
pub use logging::init_logging;
