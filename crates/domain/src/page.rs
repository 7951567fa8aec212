/// The four fixed status pages, in rotation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    StatusIp,
    UptimeMemoryTemp,
    Blocked,
    Clients,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::StatusIp,
        Page::UptimeMemoryTemp,
        Page::Blocked,
        Page::Clients,
    ];

    pub fn index(self) -> usize {
        match self {
            Page::StatusIp => 0,
            Page::UptimeMemoryTemp => 1,
            Page::Blocked => 2,
            Page::Clients => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

/// Tracks the page on screen and whether timer ticks rotate it.
#[derive(Debug, Clone)]
pub struct PageRotation {
    current: Page,
    auto_rotate: bool,
}

impl PageRotation {
    pub fn new(auto_rotate: bool) -> Self {
        Self {
            current: Page::StatusIp,
            auto_rotate,
        }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.auto_rotate = enabled;
    }

    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.auto_rotate = !self.auto_rotate;
        self.auto_rotate
    }

    /// Timer tick. Returns the page to render.
    pub fn tick(&mut self) -> Page {
        if self.auto_rotate {
            self.current = self.current.next();
        }
        self.current
    }

    /// Direct selection, e.g. from a button press.
    pub fn select(&mut self, page: Page) -> Page {
        self.current = page;
        page
    }
}

impl Default for PageRotation {
    fn default() -> Self {
        Self::new(true)
    }
}
