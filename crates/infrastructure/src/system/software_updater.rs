use async_trait::async_trait;
use pistats_application::ports::SoftwareUpdater;
use pistats_domain::config::UpdatesConfig;
use pistats_domain::{DomainError, UpdateStatus};
use tokio::process::Command;
use tracing::info;

/// Runs the package managers for the flagged update sources.
pub struct CommandSoftwareUpdater {
    allow_install: bool,
    pihole_command: String,
}

impl CommandSoftwareUpdater {
    pub fn new(config: &UpdatesConfig) -> Self {
        Self {
            allow_install: config.allow_install,
            pihole_command: config.pihole_command.clone(),
        }
    }

    /// Command lines to run for `updates`: APT first, then Pi-hole, then the OS.
    pub fn plan(&self, updates: UpdateStatus) -> Vec<Vec<String>> {
        let mut steps = Vec::new();
        if updates.apt {
            steps.push(argv(&["apt-get", "update"]));
            steps.push(argv(&["apt-get", "upgrade", "-y"]));
        }
        if updates.pihole {
            steps.push(vec![self.pihole_command.clone(), "-up".to_string()]);
        }
        if updates.os {
            steps.push(argv(&["dietpi-update", "1"]));
        }
        steps
    }
}

fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|p| p.to_string()).collect()
}

async fn run(step: &[String]) -> Result<(), DomainError> {
    let Some((program, args)) = step.split_first() else {
        return Ok(());
    };
    let line = step.join(" ");
    info!(command = %line, "Running update step");

    let status = Command::new(program)
        .args(args)
        .status()
        .await
        .map_err(|e| DomainError::Command(format!("{}: {}", line, e)))?;

    if !status.success() {
        return Err(DomainError::Command(format!("{} exited with {}", line, status)));
    }
    Ok(())
}

#[async_trait]
impl SoftwareUpdater for CommandSoftwareUpdater {
    async fn install(&self, updates: UpdateStatus) -> Result<(), DomainError> {
        if !self.allow_install {
            return Err(DomainError::UpdatesDisabled);
        }

        let steps = self.plan(updates);
        if steps.is_empty() {
            info!("Nothing to install");
            return Ok(());
        }

        for step in &steps {
            run(step).await?;
        }
        Ok(())
    }
}
