use pistats_domain::DomainError;

/// Raw access to the button inputs.
pub trait SwitchPort: Send + Sync {
    /// Returns one bit per switch, set while the switch is held down.
    fn read_switches(&self) -> Result<u8, DomainError>;
}
