//! Tab switching between top-level sections.

/// Tracks which section (and nav link) is active.
///
/// Exactly one section is active at a time; selecting a section implicitly
/// deactivates every other one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    ids: Vec<String>,
    active: usize,
}

impl Navigation {
    pub const fn new(ids: Vec<String>) -> Self {
        Self { ids, active: 0 }
    }

    /// Activate the section named `id`. Unknown ids are ignored.
    pub fn select(&mut self, id: &str) -> bool {
        let Some(index) = self.ids.iter().position(|candidate| candidate == id) else {
            tracing::debug!(section = id, "ignoring unknown section");
            return false;
        };
        self.active = index;
        true
    }

    /// Activate the section at `index`. Out-of-range indices are ignored.
    pub fn select_index(&mut self, index: usize) -> bool {
        if index >= self.ids.len() {
            return false;
        }
        self.active = index;
        true
    }

    pub fn next(&mut self) {
        if !self.ids.is_empty() {
            self.active = (self.active + 1) % self.ids.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.ids.is_empty() {
            self.active = (self.active + self.ids.len() - 1) % self.ids.len();
        }
    }

    pub const fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_id(&self) -> Option<&str> {
        self.ids.get(self.active).map(String::as_str)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == Some(id)
    }

    pub const fn len(&self) -> usize {
        self.ids.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
