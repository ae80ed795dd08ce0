//! The store: dispatch loop, bounded state history, change subscribers.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use super::action::Action;
use super::reducer::Reducer;

/// A store wrapped for dispatch from more than one task.
///
/// Dispatch stays strictly sequential: the lock is held for the whole
/// reduce-and-notify cycle, so subscribers always observe states in
/// dispatch order.
pub type SharedStore<R> = Arc<Mutex<Store<R>>>;

/// Wrap a store for shared use.
pub fn shared<R: Reducer>(store: Store<R>) -> SharedStore<R> {
    Arc::new(Mutex::new(store))
}

type Subscriber<S> = Box<dyn FnMut(&S) + Send>;

/// Store tuning knobs.
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Maximum number of states retained in history; oldest dropped first.
    /// Zero disables history entirely.
    pub history_limit: usize,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self { history_limit: 64 }
    }
}

/// Owns the state and applies one action at a time through the reducer.
///
/// Subscribers are notified only when a dispatch actually changed the
/// state; an action that reduces to an identical state is silent.
pub struct Store<R: Reducer> {
    state: R::State,
    previous_state: Option<R::State>,
    history: VecDeque<R::State>,
    subscribers: Vec<Subscriber<R::State>>,
    options: StoreOptions,
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reducer> Store<R> {
    pub fn new() -> Self {
        Self::with_options(StoreOptions::default())
    }

    pub fn with_options(options: StoreOptions) -> Self {
        let state = R::State::default();
        Self {
            previous_state: Some(state.clone()),
            state,
            history: VecDeque::new(),
            subscribers: Vec::new(),
            options,
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    pub fn history(&self) -> &VecDeque<R::State> {
        &self.history
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&R::State) + Send + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn clear_subscribers(&mut self) {
        self.subscribers.clear();
    }

    /// Apply one action: reduce, record history, notify on change.
    pub fn dispatch(&mut self, action: R::Action) {
        self.state = R::reduce(self.state.clone(), &action);

        let changed = self.state_changed();
        tracing::debug!(action = action.name(), changed, "action dispatched");

        self.record_history();
        if changed {
            self.previous_state = Some(self.state.clone());
            self.notify_subscribers();
        }
    }

    fn state_changed(&self) -> bool {
        match &self.previous_state {
            Some(previous) => *previous != self.state,
            None => true,
        }
    }

    fn notify_subscribers(&mut self) {
        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
    }

    fn record_history(&mut self) {
        if self.options.history_limit == 0 {
            return;
        }
        // Consecutive duplicates are not recorded twice.
        if self.history.back() == Some(&self.state) {
            return;
        }
        if self.history.len() == self.options.history_limit {
            self.history.pop_front();
        }
        self.history.push_back(self.state.clone());
    }
}
