/// The eight inputs of the PiFace Control and Display switch port.
///
/// Bit `n` of the port maps to the switch with index `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Switch {
    Button0,
    Button1,
    Button2,
    Button3,
    Button4,
    RockerPress,
    RockerLeft,
    RockerRight,
}

impl Switch {
    pub const ALL: [Switch; 8] = [
        Switch::Button0,
        Switch::Button1,
        Switch::Button2,
        Switch::Button3,
        Switch::Button4,
        Switch::RockerPress,
        Switch::RockerLeft,
        Switch::RockerRight,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn mask(self) -> u8 {
        1 << self.index()
    }
}

/// Everything the status loop reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayEvent {
    /// Refresh timer elapsed.
    Tick,
    /// A switch went from released to pressed.
    Pressed(Switch),
}
