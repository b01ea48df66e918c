//! Per-identifier guard for overlapping runs inside one process

use dashmap::DashMap;
use std::sync::Arc;

/// Set of invitation ids currently being processed
#[derive(Debug, Clone, Default)]
pub struct InFlight {
    ids: Arc<DashMap<String, ()>>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `id`; `None` when another run holds it
    pub fn claim(&self, id: &str) -> Option<InFlightGuard> {
        match self.ids.entry(id.to_string()) {
            dashmap::mapref::entry::Entry::Occupied(_) => None,
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                slot.insert(());
                Some(InFlightGuard {
                    ids: Arc::clone(&self.ids),
                    id: id.to_string(),
                })
            }
        }
    }
}

/// Releases the claim on drop
#[derive(Debug)]
pub struct InFlightGuard {
    ids: Arc<DashMap<String, ()>>,
    id: String,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.ids.remove(&self.id);
    }
}
