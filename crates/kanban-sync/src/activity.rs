//! Paginated, searchable activity log fed by page fetches and live pushes.

use kanban_core::{KanbanError, PageRequest, SyncConfig};
use kanban_domain::{sort_newest_first, ActivityLogEntry, BoardId, UserId};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::api::BoardApi;
use crate::notifications::NotificationCenter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A page of `n` entries was applied.
    Loaded(usize),
    /// Another load was in flight; this one was dropped.
    Busy,
    /// No further pages.
    Exhausted,
    /// The request failed and was reported.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A newer keystroke arrived during the quiet period.
    Superseded,
    Loaded(LoadOutcome),
}

#[derive(Debug, Default)]
struct LogState {
    entries: Vec<ActivityLogEntry>,
    page: usize,
    has_more: bool,
    search: Option<String>,
    loading: bool,
}

/// Holds the `loading` flag for one fetch. Clears it on drop, so a load
/// cancelled mid-request does not block later ones.
struct LoadingGuard<'a> {
    state: &'a Mutex<LogState>,
}

impl<'a> LoadingGuard<'a> {
    fn acquire(state: &'a Mutex<LogState>) -> Option<Self> {
        let mut locked = state.lock();
        if locked.loading {
            return None;
        }
        locked.loading = true;
        Some(Self { state })
    }

    /// Clear the flag under a lock the caller already holds.
    fn release(self, locked: &mut LogState) {
        locked.loading = false;
        std::mem::forget(self);
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.lock().loading = false;
    }
}

/// Shared handle to a board's activity log view.
#[derive(Clone)]
pub struct ActivityLogStream {
    api: Arc<dyn BoardApi>,
    notifications: NotificationCenter,
    board_id: BoardId,
    user_id: UserId,
    page_size: usize,
    debounce: Duration,
    state: Arc<Mutex<LogState>>,
    search_generation: Arc<AtomicU64>,
}

impl ActivityLogStream {
    pub fn new(
        api: Arc<dyn BoardApi>,
        notifications: NotificationCenter,
        board_id: BoardId,
        user_id: UserId,
        config: &SyncConfig,
    ) -> Self {
        Self {
            api,
            notifications,
            board_id,
            user_id,
            page_size: config.log_page_size,
            debounce: Duration::from_millis(config.search_debounce_ms),
            state: Arc::new(Mutex::new(LogState::default())),
            search_generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Fetch one page and either replace the list or append to it.
    ///
    /// Dropped (not queued) while another load is in flight.
    pub async fn load(&self, page: usize, replace: bool, search: Option<String>) -> LoadOutcome {
        let query = PageRequest {
            page: page.max(1),
            page_size: self.page_size,
            search: None,
        }
        .with_search(search);
        self.fetch(query, replace).await
    }

    async fn fetch(&self, query: PageRequest, replace: bool) -> LoadOutcome {
        let Some(guard) = LoadingGuard::acquire(&self.state) else {
            tracing::debug!(page = query.page, "Activity load dropped, another load in flight");
            return LoadOutcome::Busy;
        };

        let result = self
            .api
            .board_logs(self.board_id, &query, &self.user_id)
            .await;

        let mut state = self.state.lock();
        guard.release(&mut state);
        match result {
            Ok(mut entries) => {
                let count = entries.len();
                sort_newest_first(&mut entries);
                state.has_more = query.has_more(count);
                state.page = query.page;
                state.search = query.search.clone();
                if replace {
                    state.entries = entries;
                } else {
                    for entry in entries {
                        if !state.entries.iter().any(|e| e.id == entry.id) {
                            state.entries.push(entry);
                        }
                    }
                }
                LoadOutcome::Loaded(count)
            }
            Err(e) => {
                drop(state);
                self.report(&e);
                LoadOutcome::Failed
            }
        }
    }

    /// Reload page 1 with the current search term.
    pub async fn refresh(&self) -> LoadOutcome {
        let search = self.state.lock().search.clone();
        self.load(1, true, search).await
    }

    /// Fetch the next page, if the last one came back full.
    pub async fn load_more(&self) -> LoadOutcome {
        let next = {
            let state = self.state.lock();
            if !state.has_more {
                return LoadOutcome::Exhausted;
            }
            PageRequest {
                page: state.page,
                page_size: self.page_size,
                search: state.search.clone(),
            }
            .next()
        };
        self.fetch(next, false).await
    }

    /// Debounced search: only the last term entered within the quiet
    /// period triggers a fetch, which resets to page 1.
    pub async fn search(&self, term: &str) -> SearchOutcome {
        let generation = self.search_generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.debounce).await;
        if self.search_generation.load(Ordering::SeqCst) != generation {
            return SearchOutcome::Superseded;
        }
        SearchOutcome::Loaded(self.load(1, true, Some(term.to_string())).await)
    }

    /// Put a live-pushed entry at the head of the list.
    ///
    /// With a search active, only entries whose details contain the term are
    /// kept, matching what the server returns for the same filter. Returns
    /// false when the entry was filtered out or is already listed.
    pub fn prepend_live(&self, entry: ActivityLogEntry) -> bool {
        let mut state = self.state.lock();
        if let Some(term) = state.search.as_deref() {
            if !entry.matches(term) {
                return false;
            }
        }
        if state.entries.iter().any(|e| e.id == entry.id) {
            return false;
        }
        state.entries.insert(0, entry);
        true
    }

    pub fn entries(&self) -> Vec<ActivityLogEntry> {
        self.state.lock().entries.clone()
    }

    pub fn has_more(&self) -> bool {
        self.state.lock().has_more
    }

    pub fn page(&self) -> usize {
        self.state.lock().page
    }

    pub fn search_term(&self) -> Option<String> {
        self.state.lock().search.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().loading
    }

    fn report(&self, error: &KanbanError) {
        self.notifications.report(error);
    }
}
