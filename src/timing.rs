//! Timing wrappers: debounce, throttle and an async sleep.
//!
//! [`Debounced`] and [`Throttled`] own the state of a single wrapped
//! callable. The state lives exactly as long as the wrapper. Arguments are
//! passed as one value of type `A`; use a tuple when the callable needs
//! several.
//!
//! Debouncing schedules the trailing call as a task on a tokio runtime, so a
//! runtime handle must be available when the wrapper is built. Throttling is
//! synchronous and works anywhere.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, trace};

use crate::error::{Result, UtilError};

/// Wait used when nothing else is configured.
pub const DEFAULT_WAIT: Duration = Duration::from_millis(300);

type Callback<A> = Arc<dyn Fn(A) + Send + Sync>;

/// A callable that only fires after `wait` has passed without another call.
///
/// Built by [`debounce`]. Every [`call`](Self::call) cancels the pending
/// invocation and schedules a new one with the latest arguments, so a burst
/// of calls results in a single execution carrying the last arguments.
///
/// Dropping the wrapper does not cancel a call that is already scheduled.
pub struct Debounced<A> {
    func: Callback<A>,
    wait: Duration,
    runtime: Handle,
    pending: Mutex<Option<JoinHandle<()>>>,
}

/// Wrap `func` so that it runs once `wait` has elapsed since the last call.
///
/// The trailing call is spawned on the tokio runtime that is current when
/// this function is called.
///
/// # Errors
///
/// Returns [`UtilError::NoRuntime`] when called outside of a tokio runtime.
/// Use [`Debounced::with_handle`] to pass a runtime explicitly.
///
/// # Examples
///
/// ```no_run
/// # use std::time::Duration;
/// # use utilkit::debounce;
/// # async fn example() -> utilkit::Result<()> {
/// let save = debounce(|text: String| println!("saving {text}"), Duration::from_millis(250))?;
/// save.call("h".to_string());
/// save.call("hello".to_string()); // only this one is saved
/// # Ok(())
/// # }
/// ```
pub fn debounce<A, F>(func: F, wait: Duration) -> Result<Debounced<A>>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    let runtime = Handle::try_current().map_err(UtilError::NoRuntime)?;
    Ok(Debounced::with_handle(func, wait, runtime))
}

impl<A: Send + 'static> Debounced<A> {
    /// Build a debounced wrapper that schedules its calls on `runtime`.
    #[must_use]
    pub fn with_handle<F>(func: F, wait: Duration, runtime: Handle) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
            wait,
            runtime,
            pending: Mutex::new(None),
        }
    }

    /// Cancel any pending invocation and schedule a new one with `args`.
    pub fn call(&self, args: A) {
        let func = Arc::clone(&self.func);
        let wait = self.wait;

        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take()
            && !previous.is_finished()
        {
            trace!("Debounce: superseding pending call");
            previous.abort();
        }

        *pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(wait).await;
            func(args);
        }));

        debug!(?wait, "Debounce: call scheduled");
    }

    /// Cancel the pending invocation, if any.
    ///
    /// Returns `true` if a call was waiting to fire.
    pub fn cancel(&self) -> bool {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        match pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                debug!("Debounce: pending call cancelled");
                true
            }
            _ => false,
        }
    }

    /// Whether a call is scheduled and has not fired yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<A> Debounced<A> {
    /// The quiet period this wrapper waits for.
    #[must_use]
    pub const fn wait(&self) -> Duration {
        self.wait
    }
}

impl<A> fmt::Debug for Debounced<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("wait", &self.wait)
            .finish_non_exhaustive()
    }
}

/// A callable that runs at most once per `wait` window, on the leading edge.
///
/// Built by [`throttle`]. A [`call`](Self::call) runs the wrapped function
/// immediately if at least `wait` has passed since the last execution and
/// drops it otherwise. The very first call always runs.
pub struct Throttled<A> {
    func: Callback<A>,
    wait: Duration,
    last_run: Mutex<Option<Instant>>,
}

/// Wrap `func` so that it runs at most once every `wait`.
///
/// Calls made too soon after the last execution are dropped, not queued.
///
/// # Examples
///
/// ```
/// # use std::time::Duration;
/// # use utilkit::throttle;
/// let log = throttle(|line: &str| println!("{line}"), Duration::from_secs(60));
/// assert!(log.call("first"));
/// assert!(!log.call("second"));
/// ```
#[must_use]
pub fn throttle<A, F>(func: F, wait: Duration) -> Throttled<A>
where
    F: Fn(A) + Send + Sync + 'static,
{
    Throttled {
        func: Arc::new(func),
        wait,
        last_run: Mutex::new(None),
    }
}

impl<A> Throttled<A> {
    /// Run the wrapped function with `args` unless the last run was too recent.
    ///
    /// Returns `true` if the function ran.
    pub fn call(&self, args: A) -> bool {
        let now = Instant::now();

        {
            let mut last_run = self.last_run.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(last) = *last_run
                && now.duration_since(last) < self.wait
            {
                trace!(wait = ?self.wait, "Throttle: call dropped");
                return false;
            }
            *last_run = Some(now);
        }

        (self.func)(args);
        true
    }

    /// Forget the last execution so the next call runs immediately.
    pub fn reset(&self) {
        *self.last_run.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// The minimum spacing between two executions.
    #[must_use]
    pub const fn wait(&self) -> Duration {
        self.wait
    }
}

impl<A> fmt::Debug for Throttled<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttled")
            .field("wait", &self.wait)
            .finish_non_exhaustive()
    }
}

/// Suspend the current task for at least `duration`.
///
/// Only the awaiting task is suspended; other tasks on the runtime keep
/// running. Cancellation is not supported beyond dropping the future.
pub async fn sleep(duration: Duration) {
    trace!(?duration, "Sleeping");
    tokio::time::sleep(duration).await;
}
