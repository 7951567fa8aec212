use pistats_application::ports::{SoftwareUpdater, StatsSource, SystemProbe, UpdateProbe};
use pistats_application::use_cases::CollectSnapshotUseCase;
use pistats_domain::Config;
use pistats_infrastructure::pihole::PiholeApiClient;
use pistats_infrastructure::system::{CommandSoftwareUpdater, MarkerUpdateProbe, ProcSystemProbe};
use std::sync::Arc;

/// The adapters behind the status daemon's ports.
#[derive(Clone)]
pub struct Services {
    pub stats: Arc<dyn StatsSource>,
    pub system: Arc<dyn SystemProbe>,
    pub updates: Arc<dyn UpdateProbe>,
    pub updater: Arc<dyn SoftwareUpdater>,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            stats: Arc::new(PiholeApiClient::new(&config.pihole)?),
            system: Arc::new(ProcSystemProbe::new(&config.system)),
            updates: Arc::new(MarkerUpdateProbe::new(&config.system, &config.updates)),
            updater: Arc::new(CommandSoftwareUpdater::new(&config.updates)),
        })
    }

    pub fn collect_snapshot(&self) -> Arc<CollectSnapshotUseCase> {
        Arc::new(CollectSnapshotUseCase::new(
            Arc::clone(&self.stats),
            Arc::clone(&self.system),
            Arc::clone(&self.updates),
        ))
    }
}
