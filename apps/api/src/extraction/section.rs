use crate::extraction::classifier::Signal;
use crate::extraction::models::Section;

/// Tracks which section of the document the scan is in.
#[derive(Debug, Default)]
pub struct SectionTracker {
    current: Section,
}

impl SectionTracker {
    pub fn current(&self) -> Section {
        self.current
    }

    /// Applies a line's signal. Headers switch unconditionally, in any order.
    pub fn observe(&mut self, signal: &Signal) -> Section {
        if let Signal::SectionChange(section) = signal {
            self.current = *section;
        }
        self.current
    }
}
