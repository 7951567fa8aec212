pub mod proc_probe;
pub mod software_updater;
pub mod update_probe;

pub use proc_probe::{format_temperature, parse_meminfo, ProcSystemProbe};
pub use software_updater::CommandSoftwareUpdater;
pub use update_probe::{pihole_update_available, MarkerUpdateProbe};
