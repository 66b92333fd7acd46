//! One-shot loading of the skip listing, scoped to the lifetime of the screen.

use std::sync::Arc;

use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::JoinHandle;
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, error, info};

use crate::model::SkipOffering;
use crate::ports::SkipSource;

#[derive(Debug, Clone, PartialEq)]
/// Result of loading the listing. Failures carry no detail; they are logged instead.
pub enum LoadOutcome {
    /// The source returned a listing, possibly empty.
    Loaded(Vec<SkipOffering>),
    /// The source failed.
    Failed,
}

/// Fetch the listing from `source`, logging and collapsing any failure.
pub async fn load_offerings(source: &dyn SkipSource) -> LoadOutcome {
    let location = source.location();
    match source.skips().await {
        Ok(offerings) => {
            info!(
                postcode = %location.postcode,
                area = %location.area,
                count = offerings.len(),
                "loaded skip listing"
            );
            LoadOutcome::Loaded(offerings)
        }
        Err(err) => {
            error!(
                postcode = %location.postcode,
                area = %location.area,
                error = %err,
                "failed to load skip listing"
            );
            LoadOutcome::Failed
        }
    }
}

/// A listing fetch running in the background on behalf of one screen.
///
/// Dropping the task cancels it; a response arriving afterwards is discarded.
#[derive(Debug)]
pub struct LoadTask {
    receiver: Option<oneshot::Receiver<LoadOutcome>>,
    token: CancellationToken,
    worker: JoinHandle<()>,
    _guard: DropGuard,
}

impl LoadTask {
    /// Start fetching from `source` on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    #[must_use]
    pub fn spawn(source: Arc<dyn SkipSource>) -> Self {
        let token = CancellationToken::new();
        let (sender, receiver) = oneshot::channel();
        let task_token = token.clone();

        let worker = tokio::spawn(async move {
            tokio::select! {
                () = task_token.cancelled() => {
                    debug!("screen went away before the listing arrived; discarding");
                }
                outcome = load_offerings(source.as_ref()) => {
                    // Both branches can be ready on the same poll
                    if task_token.is_cancelled() || sender.send(outcome).is_err() {
                        debug!("screen went away; discarding listing");
                    }
                }
            }
        });

        Self {
            receiver: Some(receiver),
            _guard: token.clone().drop_guard(),
            token,
            worker,
        }
    }

    /// Stop waiting for the listing. Any later response is discarded.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether the task was cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Take the outcome if it is ready. Yields a value at most once.
    ///
    /// Returns `None` while the fetch is in flight, after the outcome was taken, and
    /// after cancellation.
    pub fn poll_outcome(&mut self) -> Option<LoadOutcome> {
        if self.is_cancelled() {
            self.receiver = None;
            return None;
        }
        let receiver = self.receiver.as_mut()?;
        match receiver.try_recv() {
            Ok(outcome) => {
                self.receiver = None;
                Some(outcome)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => {
                self.receiver = None;
                error!("listing worker stopped without a result");
                Some(LoadOutcome::Failed)
            }
        }
    }

    /// Cancel the fetch and wait for the worker to exit.
    pub async fn shutdown(self) {
        self.token.cancel();
        if let Err(err) = self.worker.await {
            error!(error = %err, "listing worker did not exit cleanly");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use super::*;
    use crate::model::{Location, SkipId};
    use crate::ports::SourceError;
    use crate::state::ViewState;

    struct FixedSource {
        location: Location,
        result: Result<Vec<SkipOffering>, String>,
        calls: AtomicUsize,
    }

    impl FixedSource {
        fn ok(offerings: Vec<SkipOffering>) -> Self {
            Self {
                location: Location::default(),
                result: Ok(offerings),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                location: Location::default(),
                result: Err(message.to_owned()),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl SkipSource for FixedSource {
        fn location(&self) -> &Location {
            &self.location
        }

        async fn skips(&self) -> Result<Vec<SkipOffering>, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone().map_err(SourceError::Internal)
        }
    }

    struct GatedSource {
        location: Location,
        gate: Arc<Notify>,
    }

    impl GatedSource {
        fn new(gate: &Arc<Notify>) -> Self {
            Self {
                location: Location::default(),
                gate: Arc::clone(gate),
            }
        }
    }

    #[async_trait]
    impl SkipSource for GatedSource {
        fn location(&self) -> &Location {
            &self.location
        }

        async fn skips(&self) -> Result<Vec<SkipOffering>, SourceError> {
            self.gate.notified().await;
            Ok(vec![sample(1)])
        }
    }

    fn sample(id: u64) -> SkipOffering {
        SkipOffering {
            id: SkipId(id),
            size: 4,
            price_before_vat: 200.0,
            vat: 20.0,
            hire_period_days: 14,
            allows_heavy_waste: false,
            allowed_on_road: true,
        }
    }

    async fn next_outcome(task: &mut LoadTask) -> LoadOutcome {
        loop {
            if let Some(outcome) = task.poll_outcome() {
                return outcome;
            }
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn success_yields_the_listing() {
        let source = FixedSource::ok(vec![sample(1), sample(2)]);
        let outcome = load_offerings(&source).await;
        assert_eq!(
            outcome,
            LoadOutcome::Loaded(vec![sample(1), sample(2)]),
            "listing passed through"
        );
    }

    #[tokio::test]
    async fn failure_is_collapsed_and_settles_the_view() {
        let source = FixedSource::failing("connection refused");
        let outcome = load_offerings(&source).await;
        assert_eq!(outcome, LoadOutcome::Failed, "error collapsed");

        let mut state = ViewState::new();
        state.apply(outcome.into());
        assert!(!state.is_loading(), "loading flag cleared");
        assert!(state.offerings().is_empty(), "listing stays empty");
    }

    #[tokio::test]
    async fn spawned_task_fetches_exactly_once() {
        let source = Arc::new(FixedSource::ok(vec![sample(3)]));
        let shared: Arc<dyn SkipSource> = Arc::<FixedSource>::clone(&source);
        let mut task = LoadTask::spawn(shared);

        let outcome = next_outcome(&mut task).await;
        task.shutdown().await;

        assert_eq!(
            outcome,
            LoadOutcome::Loaded(vec![sample(3)]),
            "outcome delivered"
        );
        assert_eq!(source.calls.load(Ordering::SeqCst), 1, "one request");
    }

    #[tokio::test]
    async fn poll_outcome_yields_once() {
        let source: Arc<dyn SkipSource> = Arc::new(FixedSource::ok(vec![sample(1)]));
        let mut task = LoadTask::spawn(source);

        let outcome = next_outcome(&mut task).await;

        assert_eq!(
            outcome,
            LoadOutcome::Loaded(vec![sample(1)]),
            "first poll after completion delivers"
        );
        assert_eq!(task.poll_outcome(), None, "second poll yields nothing");
    }

    #[tokio::test]
    async fn worker_discards_a_listing_released_after_cancel() {
        let gate = Arc::new(Notify::new());
        let source: Arc<dyn SkipSource> = Arc::new(GatedSource::new(&gate));
        let mut task = LoadTask::spawn(source);
        tokio::task::yield_now().await;

        task.cancel();
        gate.notify_one();
        (&mut task.worker).await.expect("worker exits");

        assert_eq!(
            task.receiver.as_mut().map(oneshot::Receiver::try_recv),
            Some(Err(TryRecvError::Closed)),
            "worker exited without sending"
        );

        let mut state = ViewState::new();
        if let Some(outcome) = task.poll_outcome() {
            state.apply(outcome.into());
        }
        assert!(state.is_loading(), "view never sees the late listing");
    }

    #[tokio::test]
    async fn worker_discards_a_ready_listing_when_cancelled_first() {
        // The worker may pick either select branch; neither may deliver
        for _ in 0..16 {
            let source = Arc::new(FixedSource::ok(vec![sample(2)]));
            let shared: Arc<dyn SkipSource> = Arc::<FixedSource>::clone(&source);
            let mut task = LoadTask::spawn(shared);

            task.cancel();
            (&mut task.worker).await.expect("worker exits");

            assert_eq!(
                task.receiver.as_mut().map(oneshot::Receiver::try_recv),
                Some(Err(TryRecvError::Closed)),
                "nothing sent after cancel"
            );
            assert!(
                source.calls.load(Ordering::SeqCst) <= 1,
                "at most one request"
            );
        }
    }

    #[tokio::test]
    async fn dropping_the_task_cancels_the_worker() {
        let gate = Arc::new(Notify::new());
        let source: Arc<dyn SkipSource> = Arc::new(GatedSource::new(&gate));
        let task = LoadTask::spawn(source);
        let token = task.token.clone();

        drop(task);

        assert!(token.is_cancelled(), "drop guard fired");
    }
}
