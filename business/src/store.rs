//! Holds the loaded user list and serves derived views from it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{error, info, warn};
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;

use crate::api::UsersClient;
use crate::derived_view::{ViewCache, derive_view};
use crate::error::BusinessResult;
use crate::user::User;
use crate::view_state::ViewState;

/// Outcome of [`UserStore::load_once`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Users were fetched and stored.
    Loaded(usize),
    /// A load had already been started; nothing was fetched.
    AlreadyStarted,
}

#[derive(Debug, Default)]
struct Snapshot {
    generation: u64,
    users: Arc<Vec<User>>,
}

#[derive(Debug, Default)]
struct Inner {
    snapshot: RwLock<Snapshot>,
    load_started: AtomicBool,
    cache: Mutex<ViewCache>,
}

/// Shared, cheaply cloneable handle to the user list.
///
/// The list starts empty and is filled by a single load. Readers never wait
/// on the network.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    inner: Arc<Inner>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `users` and will not load again.
    pub fn with_users(users: Vec<User>) -> Self {
        let inner = Inner {
            snapshot: RwLock::new(Snapshot {
                generation: 1,
                users: Arc::new(users),
            }),
            load_started: AtomicBool::new(true),
            cache: Mutex::default(),
        };
        Self {
            inner: Arc::new(inner),
        }
    }

    #[cfg(test)]
    async fn users(&self) -> Arc<Vec<User>> {
        Arc::clone(&self.inner.snapshot.read().await.users)
    }

    #[cfg(test)]
    fn load_started(&self) -> bool {
        self.inner.load_started.load(Ordering::SeqCst)
    }

    /// Fetches users once. Later calls return [`LoadOutcome::AlreadyStarted`].
    ///
    /// On failure the list keeps its previous contents.
    pub async fn load_once(&self, client: &UsersClient) -> BusinessResult<LoadOutcome> {
        if self.inner.load_started.swap(true, Ordering::SeqCst) {
            warn!("Users load already started, skipping");
            return Ok(LoadOutcome::AlreadyStarted);
        }

        let users = client.list_users().await?;
        let count = users.len();

        let mut snapshot = self.inner.snapshot.write().await;
        snapshot.generation += 1;
        snapshot.users = Arc::new(users);
        info!("Stored {count} users (generation {})", snapshot.generation);

        Ok(LoadOutcome::Loaded(count))
    }

    /// Runs [`Self::load_once`] in the background, logging a failed load.
    pub fn spawn_initial_load(&self, client: UsersClient) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            if let Err(e) = store.load_once(&client).await {
                error!("Initial users load failed: {e}");
            }
        })
    }

    /// Filtered and sorted rows for `state`.
    pub async fn derived(&self, state: &ViewState) -> Arc<[User]> {
        let (generation, users) = {
            let snapshot = self.inner.snapshot.read().await;
            (snapshot.generation, Arc::clone(&snapshot.users))
        };

        let cached = self.inner.cache.lock().await.get(generation, state);
        if let Some(rows) = cached {
            return rows;
        }

        // Derive without holding the cache lock; concurrent misses may both derive.
        let rows: Arc<[User]> = derive_view(&users, state).into_iter().cloned().collect();
        self.inner
            .cache
            .lock()
            .await
            .insert(generation, state.clone(), Arc::clone(&rows));
        rows
    }
}
