use std::sync::Arc;

use skipper_core::{
    loader::LoadTask,
    model::Location,
    ports::SkipSource,
    state::ViewState,
};

pub(crate) struct App {
    pub location: Location,
    pub view: ViewState,

    // Dropping the app cancels a fetch that is still in flight.
    load: Option<LoadTask>,
}

impl App {
    /// App with no fetch attached; the view stays loading until a load transition arrives.
    pub(crate) fn new(location: Location) -> Self {
        Self {
            location,
            view: ViewState::new(),
            load: None,
        }
    }

    /// App that starts fetching the listing from `source` immediately.
    pub(crate) fn mount(source: Arc<dyn SkipSource>) -> Self {
        let mut app = Self::new(source.location().clone());
        app.load = Some(LoadTask::spawn(source));
        app
    }

    /// Feed a finished fetch into the view. Returns whether anything changed.
    pub(crate) fn poll_load(&mut self) -> bool {
        let Some(outcome) = self.load.as_mut().and_then(LoadTask::poll_outcome) else {
            return false;
        };
        self.load = None;
        self.view.apply(outcome.into());
        true
    }

    /// Cancel a fetch still in flight and wait for its worker to exit.
    pub(crate) async fn shutdown(&mut self) {
        if let Some(task) = self.load.take() {
            task.shutdown().await;
        }
    }
}
