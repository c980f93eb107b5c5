//! Running animations described by an [`AnimationSpecifier`].
//!
//! [`TokioAnimationRunner`] schedules on a tokio runtime: it waits out the
//! delay, runs the body, waits out the duration, then reports completion.
//! Starting a new animation on the same target supersedes the running one.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::runtime::Handle;
use tokio::sync::oneshot;

use crate::specifier::AnimationSpecifier;
use crate::theme::ThemeRef;

/// Executes animations.
///
/// `on_complete` must be called exactly once, with `true` if the animation
/// ran to the end and `false` if it was superseded or cancelled.
pub trait AnimationRunner {
    fn run_animation<B, C>(&self, spec: AnimationSpecifier, body: B, on_complete: C)
    where
        B: FnOnce() + Send + 'static,
        C: FnOnce(bool) + Send + 'static;
}

/// Run the animation specifier at `key` with `runner`.
pub fn animate_with_specifier_key<R, B, C>(
    theme: &ThemeRef<'_>,
    key: &str,
    runner: &R,
    body: B,
    on_complete: C,
) where
    R: AnimationRunner + ?Sized,
    B: FnOnce() + Send + 'static,
    C: FnOnce(bool) + Send + 'static,
{
    let spec = theme.animation_specifier_for_key(key);
    runner.run_animation(spec, body, on_complete);
}

// ---------------------------------------------------------------------------
// TokioAnimationRunner
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct Running {
    generation: u64,
    cancel: oneshot::Sender<()>,
}

#[derive(Debug, Default)]
struct Registry {
    next_generation: AtomicU64,
    running: Mutex<HashMap<Arc<str>, Running>>,
}

impl Registry {
    fn lock(&self) -> MutexGuard<'_, HashMap<Arc<str>, Running>> {
        self.running.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Drop the entry for `target` if it still belongs to `generation`.
    fn finish(&self, target: &str, generation: u64) {
        let mut running = self.lock();
        if running.get(target).is_some_and(|entry| entry.generation == generation) {
            running.remove(target);
        }
    }
}

/// Tokio-backed [`AnimationRunner`].
///
/// Each runner animates one target. Runners made with
/// [`for_target`](Self::for_target) share a registry, so an animation started
/// through one supersedes a running animation on the same target.
#[derive(Debug, Clone)]
pub struct TokioAnimationRunner {
    handle: Handle,
    target: Arc<str>,
    registry: Arc<Registry>,
}

impl TokioAnimationRunner {
    /// A runner spawning onto `handle`, for the unnamed target.
    pub fn new(handle: Handle) -> Self {
        Self { handle, target: Arc::from(""), registry: Arc::default() }
    }

    /// A runner spawning onto the current runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn current() -> Self {
        Self::new(Handle::current())
    }

    /// A runner for `target` sharing this runner's registry and runtime.
    pub fn for_target(&self, target: impl Into<Arc<str>>) -> Self {
        Self { handle: self.handle.clone(), target: target.into(), registry: Arc::clone(&self.registry) }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Whether an animation is scheduled or running on this runner's target.
    pub fn is_animating(&self) -> bool {
        self.registry.lock().contains_key(&self.target)
    }

    /// Stop the animation on this target. Its completion fires with `false`.
    pub fn cancel(&self) -> bool {
        match self.registry.lock().remove(&self.target) {
            Some(running) => running.cancel.send(()).is_ok(),
            None => false,
        }
    }
}

impl AnimationRunner for TokioAnimationRunner {
    fn run_animation<B, C>(&self, spec: AnimationSpecifier, body: B, on_complete: C)
    where
        B: FnOnce() + Send + 'static,
        C: FnOnce(bool) + Send + 'static,
    {
        let (cancel, cancelled) = oneshot::channel();
        let generation = self.registry.next_generation.fetch_add(1, Ordering::Relaxed);

        let previous = self
            .registry
            .lock()
            .insert(Arc::clone(&self.target), Running { generation, cancel });
        if let Some(previous) = previous {
            log::trace!("animation on {:?} superseded", self.target);
            let _ = previous.cancel.send(());
        }

        let registry = Arc::clone(&self.registry);
        let target = Arc::clone(&self.target);
        self.handle.spawn(async move {
            let finished = drive(spec, body, cancelled).await;
            registry.finish(&target, generation);
            on_complete(finished);
        });
    }
}

/// Wait, run `body`, wait. `false` as soon as a cancel signal arrives.
async fn drive<B: FnOnce()>(spec: AnimationSpecifier, body: B, cancel: oneshot::Receiver<()>) -> bool {
    // A dropped sender is not a cancellation.
    let cancelled = async move {
        if cancel.await.is_err() {
            std::future::pending::<()>().await;
        }
    };
    tokio::pin!(cancelled);

    tokio::select! {
        _ = tokio::time::sleep(spec.delay) => {}
        _ = &mut cancelled => return false,
    }
    body();
    tokio::select! {
        _ = tokio::time::sleep(spec.duration) => true,
        _ = &mut cancelled => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Mapping;
    use crate::style::AnimationCurve;
    use crate::theme::ThemeSet;
    use std::sync::atomic::AtomicBool;
    use std::time::Duration;
    use tokio::time::Instant;
    use tokio_test::{assert_pending, assert_ready};

    fn spec(delay_ms: u64, duration_ms: u64) -> AnimationSpecifier {
        AnimationSpecifier {
            delay: Duration::from_millis(delay_ms),
            duration: Duration::from_millis(duration_ms),
            curve: AnimationCurve::Linear,
        }
    }

    fn completion() -> (impl FnOnce(bool) + Send + 'static, oneshot::Receiver<(bool, Instant)>) {
        let (tx, rx) = oneshot::channel();
        let on_complete = move |finished| {
            let _ = tx.send((finished, Instant::now()));
        };
        (on_complete, rx)
    }

    #[tokio::test(start_paused = true)]
    async fn completes_after_delay_and_duration() {
        let runner = TokioAnimationRunner::current();
        let ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&ran);
        let (on_complete, rx) = completion();
        let start = Instant::now();

        runner.run_animation(spec(100, 200), move || flag.store(true, Ordering::SeqCst), on_complete);
        assert!(runner.is_animating());

        let (finished, at) = rx.await.unwrap();
        assert!(finished);
        assert!(ran.load(Ordering::SeqCst));
        assert_eq!(at - start, Duration::from_millis(300));
        assert!(!runner.is_animating());
    }

    #[tokio::test(start_paused = true)]
    async fn completion_is_pending_until_the_end() {
        let runner = TokioAnimationRunner::current();
        let (on_complete, rx) = completion();
        runner.run_animation(spec(100, 200), || {}, on_complete);

        let mut done = tokio_test::task::spawn(rx);
        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_pending!(done.poll());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(done.is_woken());
        let (finished, _) = assert_ready!(done.poll()).unwrap();
        assert!(finished);
    }

    #[tokio::test(start_paused = true)]
    async fn new_animation_supersedes_running_one() {
        let runner = TokioAnimationRunner::current();
        let (first_done, first) = completion();
        let (second_done, second) = completion();
        let start = Instant::now();

        runner.run_animation(spec(0, 1000), || {}, first_done);
        tokio::time::sleep(Duration::from_millis(100)).await;
        runner.run_animation(spec(0, 200), || {}, second_done);

        let (finished, at) = first.await.unwrap();
        assert!(!finished);
        assert_eq!(at - start, Duration::from_millis(100));

        let (finished, at) = second.await.unwrap();
        assert!(finished);
        assert_eq!(at - start, Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_during_delay_skips_body() {
        let runner = TokioAnimationRunner::current();
        let ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&ran);
        let (first_done, first) = completion();
        let (second_done, second) = completion();

        runner.run_animation(spec(500, 100), move || flag.store(true, Ordering::SeqCst), first_done);
        tokio::time::sleep(Duration::from_millis(100)).await;
        runner.run_animation(spec(0, 0), || {}, second_done);

        assert!(!first.await.unwrap().0);
        assert!(second.await.unwrap().0);
        assert!(!ran.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn targets_are_independent() {
        let runner = TokioAnimationRunner::current();
        let left = runner.for_target("left");
        let right = runner.for_target("right");
        assert_eq!(left.target(), "left");

        let (left_done, left_rx) = completion();
        let (right_done, right_rx) = completion();
        left.run_animation(spec(0, 300), || {}, left_done);
        right.run_animation(spec(0, 100), || {}, right_done);

        assert!(right_rx.await.unwrap().0);
        assert!(left_rx.await.unwrap().0);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_reports_unfinished() {
        let runner = TokioAnimationRunner::current();
        let (on_complete, rx) = completion();
        runner.run_animation(spec(0, 1000), || {}, on_complete);
        tokio::task::yield_now().await;

        assert!(runner.cancel());
        assert!(!runner.cancel());
        assert!(!rx.await.unwrap().0);
    }

    #[tokio::test(start_paused = true)]
    async fn animate_with_specifier_key_reads_theme() {
        let mut set = ThemeSet::new();
        let id = set.insert(
            "main",
            Mapping::new().with("fade", Mapping::new().with("delay", 0.5).with("duration", 0.25)),
        );
        let theme = set.get(id).unwrap();
        let runner = TokioAnimationRunner::current();
        let (on_complete, rx) = completion();
        let start = Instant::now();

        animate_with_specifier_key(&theme, "fade", &runner, || {}, on_complete);

        let (finished, at) = rx.await.unwrap();
        assert!(finished);
        assert_eq!(at - start, Duration::from_millis(750));
    }
}
