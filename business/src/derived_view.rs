//! Filtered-then-sorted view over the loaded users.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::user::User;
use crate::view_state::{Filter, ViewState};

/// Derives the visible rows for `state`.
///
/// Filtering keeps source order and the sort is stable, so users with equal
/// keys stay in the order the API returned them.
pub fn derive_view<'a>(users: &'a [User], state: &ViewState) -> Vec<&'a User> {
    let filter = Filter::new(state);
    let mut rows: Vec<&User> = users.iter().filter(|user| filter.matches(user)).collect();
    rows.sort_by(|a, b| state.compare(a, b));
    rows
}

/// Number of distinct view states kept per record generation.
const CACHE_CAPACITY: usize = 16;

/// Recently derived views of one record generation.
///
/// Entries are keyed by the full view state. A newer generation drops every
/// entry; once full, the oldest entry is evicted first.
#[derive(Debug, Default)]
pub(crate) struct ViewCache {
    generation: u64,
    entries: VecDeque<(ViewState, Arc<[User]>)>,
}

impl ViewCache {
    pub(crate) fn get(&self, generation: u64, state: &ViewState) -> Option<Arc<[User]>> {
        if generation != self.generation {
            return None;
        }
        self.entries
            .iter()
            .find(|(cached, _)| cached == state)
            .map(|(_, rows)| Arc::clone(rows))
    }

    /// Stores rows derived from `generation`. Rows of an older generation are ignored.
    pub(crate) fn insert(&mut self, generation: u64, state: ViewState, rows: Arc<[User]>) {
        if generation < self.generation {
            return;
        }
        if generation > self.generation {
            self.generation = generation;
            self.entries.clear();
        }
        self.entries.retain(|(cached, _)| *cached != state);
        if self.entries.len() >= CACHE_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back((state, rows));
    }
}
