/// Which update sources currently report pending updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateStatus {
    pub os: bool,
    pub apt: bool,
    pub pihole: bool,
}

impl UpdateStatus {
    pub fn any(&self) -> bool {
        self.os || self.apt || self.pihole
    }

    /// Short labels for the pending modules, in prompt order.
    pub fn modules(&self) -> Vec<&'static str> {
        let mut modules = Vec::with_capacity(3);
        if self.os {
            modules.push("OS");
        }
        if self.apt {
            modules.push("APT");
        }
        if self.pihole {
            modules.push("PI");
        }
        modules
    }
}
