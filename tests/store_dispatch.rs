mod common;

use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;
use stockapp_state::api::SimpleResponse;
use stockapp_state::ops::{
    AdminAction, ApiAction, ApiReducer, TruncateAction,
};
use stockapp_state::remote::RemoteAction;
use stockapp_state::store::{shared, Store, StoreOptions};

fn truncate_set(action: RemoteAction<SimpleResponse>) -> ApiAction {
    TruncateAction::TruncateSet(action).into()
}

#[test]
fn subscriber_sees_each_changed_state() {
    common::init_tracing();
    let mut store: Store<ApiReducer> = Store::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(move |state| sink.lock().push(state.truncate.truncate_set.clone()));

    store.dispatch(truncate_set(RemoteAction::InProgress));
    store.dispatch(truncate_set(RemoteAction::Successful(SimpleResponse::new(
        "truncated",
    ))));

    let seen = seen.lock();
    assert_eq!(seen.len(), 2);
    assert!(seen[0].in_progress);
    assert!(!seen[1].in_progress);
    assert_eq!(
        seen[1].success_value,
        Some(SimpleResponse::new("truncated"))
    );
}

#[test]
fn repeated_terminal_action_does_not_notify_twice() {
    let mut store: Store<ApiReducer> = Store::new();
    let notifications = Arc::new(Mutex::new(0u32));
    let counter = Arc::clone(&notifications);
    store.subscribe(move |_| *counter.lock() += 1);

    let done = truncate_set(RemoteAction::Successful(SimpleResponse::new("truncated")));
    store.dispatch(done.clone());
    store.dispatch(done);

    assert_eq!(*notifications.lock(), 1);
}

#[test]
fn history_tracks_distinct_states_in_order() {
    let mut store: Store<ApiReducer> = Store::with_options(StoreOptions { history_limit: 8 });

    store.dispatch(truncate_set(RemoteAction::InProgress));
    store.dispatch(truncate_set(RemoteAction::InProgress));
    store.dispatch(truncate_set(RemoteAction::Successful(SimpleResponse::new(
        "truncated",
    ))));

    let history = store.history();
    assert_eq!(history.len(), 2);
    assert!(history[0].truncate.truncate_set.in_progress);
    assert!(history[1].truncate.truncate_set.has_succeeded());
}

#[test]
fn shared_store_accepts_dispatch_from_several_threads() {
    let store = shared(Store::<ApiReducer>::new());

    let handles: Vec<_> = (0..2)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                if i == 0 {
                    store
                        .lock()
                        .dispatch(ApiAction::Admin(AdminAction::GetUsers(
                            RemoteAction::InProgress,
                        )));
                } else {
                    store.lock().dispatch(truncate_set(RemoteAction::InProgress));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let store = store.lock();
    assert!(store.state().admin.get_users.in_progress);
    assert!(store.state().truncate.truncate_set.in_progress);
}

#[test]
fn clear_subscribers_stops_notifications() {
    let mut store: Store<ApiReducer> = Store::new();
    let notifications = Arc::new(Mutex::new(0u32));
    let counter = Arc::clone(&notifications);
    store.subscribe(move |_| *counter.lock() += 1);

    store.dispatch(truncate_set(RemoteAction::InProgress));
    store.clear_subscribers();
    store.dispatch(truncate_set(RemoteAction::Successful(SimpleResponse::new(
        "truncated",
    ))));

    assert_eq!(*notifications.lock(), 1);
}
