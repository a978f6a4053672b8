//! Open/closed state owned by individual views: accordions, menus, pickers.

/// Which item of a group is expanded, if any. Opening one closes the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disclosure {
    #[default]
    Closed,
    Open(usize),
}

impl Disclosure {
    pub fn toggle(self, index: usize) -> Self {
        match self {
            Disclosure::Open(open) if open == index => Disclosure::Closed,
            _ => Disclosure::Open(index),
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        matches!(self, Disclosure::Open(open) if *open == index)
    }
}

/// A plain on/off switch (menus, pickers, play/stop).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Toggle {
    #[default]
    Off,
    On,
}

impl Toggle {
    pub fn flip(self) -> Self {
        match self {
            Toggle::Off => Toggle::On,
            Toggle::On => Toggle::Off,
        }
    }

    pub fn is_on(&self) -> bool {
        matches!(self, Toggle::On)
    }
}
