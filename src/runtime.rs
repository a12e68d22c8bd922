//! Dashboard runtime
//!
//! Drives the current [`Screen`] against a [`Fetch`] implementation. Fetch
//! tasks only perform I/O and send their [`Completion`] back over a channel;
//! every state change happens on the task that owns the dashboard, as
//! completions are received.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::config::ViewConfig;
use crate::fetch::{Fetch, FetchError};
use crate::screen::{Completion, Effect, FetchCommand, Route, Screen, Slot};
use crate::view::{PageSize, Resolution};

/// A running dashboard session
pub struct Dashboard<F: Fetch + 'static> {
    fetcher: Arc<F>,
    view: ViewConfig,
    screen: Screen,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
    pending: usize,
}

impl<F: Fetch + 'static> Dashboard<F> {
    /// Create a dashboard showing the home screen
    pub fn new(fetcher: Arc<F>, view: ViewConfig) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            fetcher,
            view,
            screen: Screen::default(),
            completions_tx,
            completions_rx,
            pending: 0,
        }
    }

    /// Navigate to a path; returns the effects for the presentation layer
    pub fn navigate(&mut self, path: &str) -> Vec<Effect> {
        self.open(Route::parse(path))
    }

    /// Navigate to a parsed route
    pub fn open(&mut self, route: Route) -> Vec<Effect> {
        tracing::info!(route = %route, "navigating");
        let transition = self.screen.navigate(route, &self.view);
        self.dispatch(transition.commands);
        transition.effects
    }

    /// Fetch everything on the current screen again
    pub fn reload(&mut self) {
        let commands = self.screen.reload();
        self.dispatch(commands);
    }

    fn dispatch(&mut self, commands: Vec<FetchCommand>) {
        for FetchCommand { slot, ticket } in commands {
            let fetcher = Arc::clone(&self.fetcher);
            let tx = self.completions_tx.clone();
            self.pending += 1;

            tokio::spawn(async move {
                let path = ticket.endpoint().path();
                let request = tokio::spawn(async move { fetcher.fetch(&path).await });

                // A fetch that panics still resolves its slot
                let result = match request.await {
                    Ok(result) => result,
                    Err(err) => {
                        tracing::error!(
                            request_id = %ticket.id(),
                            endpoint = %ticket.endpoint(),
                            error = %err,
                            "fetch task failed"
                        );
                        Err(FetchError::Network(format!("fetch task failed: {}", err)))
                    }
                };

                // The receiver only goes away with the dashboard itself
                let _ = tx.send(Completion {
                    slot,
                    ticket,
                    result,
                });
            });
        }
    }

    /// Wait for the next fetch to finish and apply it
    ///
    /// Returns `None` when no fetch is outstanding.
    pub async fn next_completion(&mut self) -> Option<Resolution> {
        if self.pending == 0 {
            return None;
        }
        let completion = self.completions_rx.recv().await?;
        self.pending -= 1;
        Some(self.screen.apply(completion))
    }

    /// Apply completions until no resource on the current screen is loading
    pub async fn settle(&mut self) {
        while !self.screen.is_settled() {
            if self.next_completion().await.is_none() {
                break;
            }
        }
    }

    /// Forward a page change to the table in `slot`
    pub fn page_change(&mut self, slot: Slot, page: usize) -> bool {
        self.screen.page_change(slot, page)
    }

    /// Forward a rows-per-page change to the table in `slot`
    pub fn page_size_change(&mut self, slot: Slot, requested: usize) -> Option<PageSize> {
        self.screen.page_size_change(slot, requested)
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Title the presentation layer should currently show
    pub fn title(&self) -> String {
        self.screen.title(&self.view)
    }

    /// Fetches issued but not yet applied, stale ones included
    pub fn pending(&self) -> usize {
        self.pending
    }
}
