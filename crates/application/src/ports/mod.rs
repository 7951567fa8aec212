pub mod lcd;
pub mod software_updater;
pub mod stats_source;
pub mod switch_port;
pub mod system_probe;
pub mod update_probe;

pub use lcd::Lcd;
pub use software_updater::SoftwareUpdater;
pub use stats_source::StatsSource;
pub use switch_port::SwitchPort;
pub use system_probe::SystemProbe;
pub use update_probe::UpdateProbe;
