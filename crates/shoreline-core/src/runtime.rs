//! Mount-scoped runtime driving the view state.
//!
//! Mounting a view acquires two tasks, the role rotation timer and the
//! colour scheme listener. Both are held by [`ScopedTask`] guards and are
//! aborted when the [`ViewHandle`] is shut down or dropped, so repeated
//! mounts never leak timers or listeners.
//!
//! ## Usage
//!
//! ```ignore
//! let handle = ViewHandle::mount(Arc::new(SystemClock), Some(false), ROTATION_PERIOD);
//! let mut snapshots = handle.subscribe();
//!
//! // Host reports an OS preference change
//! handle.set_preference(Some(true));
//!
//! while snapshots.changed().await.is_ok() {
//!     render(*snapshots.borrow());
//! }
//! ```

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::ambient::SharedClock;
use crate::error::ViewError;
use crate::state::{ViewSnapshot, ViewState};
use crate::theme::Theme;

/// A spawned task that is aborted when the guard goes away.
pub struct ScopedTask {
    name: &'static str,
    handle: Option<JoinHandle<()>>,
}

impl ScopedTask {
    /// Spawn `future` on the current tokio runtime.
    pub fn spawn<F>(name: &'static str, future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::debug!(task = name, "Acquired view task");
        Self {
            name,
            handle: Some(tokio::spawn(future)),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the task is still scheduled.
    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Abort the task. Safe to call more than once.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!(task = self.name, "Released view task");
        }
    }
}

impl Drop for ScopedTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Handle to a mounted view.
///
/// Owns the state, the snapshot channel, the preference channel and the two
/// view tasks.
pub struct ViewHandle {
    state: Arc<Mutex<ViewState>>,
    snapshots: watch::Sender<ViewSnapshot>,
    preference: watch::Sender<Option<bool>>,
    tasks: Mutex<Vec<ScopedTask>>,
}

impl ViewHandle {
    /// Mount a view: detect theme and season, then start the rotation timer
    /// and the preference listener.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(clock: SharedClock, prefers_dark: Option<bool>, rotation_period: Duration) -> Self {
        let initial = ViewState::mount(clock.as_ref(), prefers_dark);
        let state = Arc::new(Mutex::new(initial));
        let (snapshots, _) = watch::channel(initial.snapshot());
        let (preference, preference_rx) = watch::channel(prefers_dark);

        let rotation = ScopedTask::spawn(
            "role-rotation",
            rotate_roles(state.clone(), snapshots.clone(), rotation_period),
        );
        let listener = ScopedTask::spawn(
            "preference-listener",
            listen_for_preference(state.clone(), snapshots.clone(), preference_rx, clock),
        );

        tracing::info!(period_ms = rotation_period.as_millis() as u64, "View mounted");

        Self {
            state,
            snapshots,
            preference,
            tasks: Mutex::new(vec![rotation, listener]),
        }
    }

    /// Current state.
    pub fn snapshot(&self) -> ViewSnapshot {
        self.state.lock().snapshot()
    }

    /// Receive a new snapshot each time the state changes.
    pub fn subscribe(&self) -> watch::Receiver<ViewSnapshot> {
        self.snapshots.subscribe()
    }

    /// Report a new OS colour scheme preference (`None` if the host lost it).
    pub fn set_preference(&self, prefers_dark: Option<bool>) {
        self.preference.send_replace(prefers_dark);
    }

    /// The host can no longer report a preference; treat it as absent.
    pub fn preference_lost(&self, error: ViewError) {
        tracing::warn!("{}, assuming light", error);
        self.set_preference(None);
    }

    /// Manual theme toggle. Does not trigger re-detection.
    pub fn toggle_theme(&self) -> Theme {
        let snapshot = {
            let mut state = self.state.lock();
            state.toggle_theme();
            state.snapshot()
        };
        self.snapshots.send_replace(snapshot);
        snapshot.theme()
    }

    /// Number of view tasks still scheduled.
    pub fn active_tasks(&self) -> usize {
        self.tasks.lock().iter().filter(|t| t.is_active()).count()
    }

    /// Release the timer and the listener. Idempotent.
    pub fn shutdown(&self) {
        let mut tasks = self.tasks.lock();
        if tasks.is_empty() {
            return;
        }
        for task in tasks.iter_mut() {
            task.cancel();
        }
        tasks.clear();
        tracing::info!("View torn down");
    }
}

impl Drop for ViewHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn rotate_roles(
    state: Arc<Mutex<ViewState>>,
    snapshots: watch::Sender<ViewSnapshot>,
    period: Duration,
) {
    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        let snapshot = {
            let mut state = state.lock();
            state.tick_role();
            state.snapshot()
        };
        tracing::trace!(role = snapshot.role, "Role rotated");
        snapshots.send_replace(snapshot);
    }
}

async fn listen_for_preference(
    state: Arc<Mutex<ViewState>>,
    snapshots: watch::Sender<ViewSnapshot>,
    mut preference: watch::Receiver<Option<bool>>,
    clock: SharedClock,
) {
    while preference.changed().await.is_ok() {
        let prefers_dark = *preference.borrow_and_update();
        let snapshot = {
            let mut state = state.lock();
            state.on_preference_changed(clock.as_ref(), prefers_dark);
            state.snapshot()
        };
        tracing::debug!(?prefers_dark, is_dark = snapshot.is_dark, "Colour scheme preference changed");
        snapshots.send_replace(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ambient::FixedClock;
    use crate::roles::ROTATION_PERIOD;

    fn afternoon() -> SharedClock {
        Arc::new(FixedClock::at(14, 6).unwrap())
    }

    #[tokio::test(start_paused = true)]
    async fn test_mount_starts_two_tasks() {
        let handle = ViewHandle::mount(afternoon(), Some(false), ROTATION_PERIOD);
        assert_eq!(handle.active_tasks(), 2);
        assert_eq!(handle.snapshot().role_index, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_is_idempotent() {
        let handle = ViewHandle::mount(afternoon(), Some(false), ROTATION_PERIOD);
        handle.shutdown();
        handle.shutdown();
        assert_eq!(handle.active_tasks(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_scoped_task_aborts_on_drop() {
        let (tx, mut rx) = tokio::sync::mpsc::channel::<()>(1);
        let task = ScopedTask::spawn("holder", async move {
            let _tx = tx;
            std::future::pending::<()>().await;
        });
        assert_eq!(task.name(), "holder");
        drop(task);
        // The sender is dropped with the aborted future.
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_publishes_snapshot() {
        let handle = ViewHandle::mount(afternoon(), Some(false), ROTATION_PERIOD);
        let mut rx = handle.subscribe();
        assert_eq!(handle.toggle_theme(), Theme::Dark);
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_dark);
    }

    #[tokio::test(start_paused = true)]
    async fn test_lost_preference_falls_back_to_light() {
        let handle = ViewHandle::mount(afternoon(), Some(true), ROTATION_PERIOD);
        assert!(handle.snapshot().is_dark);

        let mut rx = handle.subscribe();
        handle.preference_lost(ViewError::PreferenceUnavailable("webview closed".to_string()));
        rx.changed().await.unwrap();
        assert!(!rx.borrow_and_update().is_dark);
    }
}
