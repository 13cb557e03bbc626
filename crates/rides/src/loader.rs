use std::sync::{Mutex, MutexGuard, PoisonError};

use feed::FeedClient;
use tokio_util::sync::CancellationToken;

use crate::{DisplaySettings, RideSchedule};

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded(RideSchedule),
    /// carries the message to show to the user
    Failed(String),
}

/// What happened to the result of a single `load` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer load or a `cancel` took over; the result was dropped.
    Superseded,
}

struct LoaderState {
    state: LoadState,
    /// state to fall back to when the active load is cancelled
    settled: LoadState,
    generation: u64,
    active: Option<CancellationToken>,
}

fn lock(inner: &Mutex<LoaderState>) -> MutexGuard<'_, LoaderState> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Puts the loader back to its settled state if a `load` future is dropped
/// while its fetch is still pending.
struct PendingLoad<'a> {
    inner: &'a Mutex<LoaderState>,
    generation: u64,
}

impl Drop for PendingLoad<'_> {
    fn drop(&mut self) {
        let mut inner = lock(self.inner);
        if inner.generation == self.generation && inner.active.is_some() {
            log::debug!("load {} dropped before it finished", self.generation);
            inner.active = None;
            inner.state = inner.settled.clone();
        }
    }
}

/// Drives `Idle -> Loading -> Loaded | Failed` for the ride list.
///
/// Only the most recent `load` may change the state. Starting a new load
/// cancels the one in flight, and every result is checked against the current
/// generation before it is applied. Dropping a `load` future before it
/// completes has the same effect as `cancel`.
pub struct RidesLoader<C: FeedClient> {
    client: C,
    settings: DisplaySettings,
    inner: Mutex<LoaderState>,
}

impl<C: FeedClient> RidesLoader<C> {
    pub fn new(client: C, settings: DisplaySettings) -> Self {
        Self {
            client,
            settings,
            inner: Mutex::new(LoaderState {
                state: LoadState::Idle,
                settled: LoadState::Idle,
                generation: 0,
                active: None,
            }),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub async fn state(&self) -> LoadState {
        lock(&self.inner).state.clone()
    }

    pub async fn schedule(&self) -> Option<RideSchedule> {
        match &lock(&self.inner).state {
            LoadState::Loaded(schedule) => Some(schedule.clone()),
            _ => None,
        }
    }

    pub async fn load(&self) -> LoadOutcome {
        let (generation, token) = self.begin();
        let _pending = PendingLoad {
            inner: &self.inner,
            generation,
        };

        let result = tokio::select! {
            _ = token.cancelled() => {
                log::debug!("load {generation} cancelled while fetching");
                return LoadOutcome::Superseded;
            }
            result = self.client.fetch_trips() => result,
        };

        let mut inner = lock(&self.inner);
        if inner.generation != generation || token.is_cancelled() {
            log::debug!("dropping result of superseded load {generation}");
            return LoadOutcome::Superseded;
        }

        inner.state = match result {
            Ok(trips) => {
                log::info!("loaded {} trips", trips.len());
                LoadState::Loaded(RideSchedule::new(trips, &self.settings))
            }
            Err(why) => {
                log::error!("loading trips failed: {why}");
                LoadState::Failed(why.user_message().to_owned())
            }
        };
        inner.settled = inner.state.clone();
        inner.active = None;
        LoadOutcome::Applied
    }

    /// Cancels the load in flight, if any, and returns to the last settled state.
    pub async fn cancel(&self) {
        let mut inner = lock(&self.inner);
        if let Some(token) = inner.active.take() {
            token.cancel();
            inner.generation += 1;
            inner.state = inner.settled.clone();
        }
    }

    fn begin(&self) -> (u64, CancellationToken) {
        let mut inner = lock(&self.inner);
        if let Some(previous) = inner.active.take() {
            previous.cancel();
        }

        inner.generation += 1;
        let token = CancellationToken::new();
        inner.active = Some(token.clone());
        inner.state = LoadState::Loading;
        (inner.generation, token)
    }
}
