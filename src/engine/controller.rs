//! Background-thread engine controller.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::search::{choose_move, SearchRequest};
use crate::board::Move;

/// Search thread stack size (32 MB); deep alpha-beta recursion clones a
/// board per frame.
const SEARCH_STACK_SIZE: usize = 32 * 1024 * 1024;

/// Handle to a running search thread.
struct SearchJob {
    handle: JoinHandle<()>,
}

impl SearchJob {
    fn wait(self) {
        let _ = self.handle.join();
    }
}

/// Runs searches off the caller's thread, one request at a time, in
/// submission order.
///
/// Each request is pure and self-contained; the controller carries no
/// search state across requests. The only thing it owns is the playout
/// random source, seeded on construction so that games are reproducible
/// when the caller wants them to be.
pub struct EngineController {
    rng: Arc<Mutex<StdRng>>,
    current_job: Option<SearchJob>,
}

impl Default for EngineController {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineController {
    /// Controller with an entropy-seeded playout source
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Controller with a fixed playout seed (reproducible searches)
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        EngineController {
            rng: Arc::new(Mutex::new(rng)),
            current_job: None,
        }
    }

    /// True while a started search has not been waited on
    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.current_job.is_some()
    }

    /// Start a search on a background thread.
    ///
    /// `on_complete` receives the chosen move, or `None` when the side to
    /// move has no legal moves (the game-over signal; presenting it is the
    /// caller's job). A previous unfinished search is joined first, so
    /// responses arrive in request order.
    pub fn start_search<F>(&mut self, request: SearchRequest, on_complete: F)
    where
        F: FnOnce(Option<Move>) + Send + 'static,
    {
        self.finish();

        #[cfg(feature = "logging")]
        log::debug!(
            "dispatching {} search, difficulty {}",
            request.strategy,
            request.difficulty
        );

        let rng = Arc::clone(&self.rng);
        let handle = thread::Builder::new()
            .name("checkers-search".to_string())
            .stack_size(SEARCH_STACK_SIZE)
            .spawn(move || {
                let chosen = {
                    let mut guard = rng.lock();
                    choose_move(&request, &mut *guard)
                };
                on_complete(chosen);
            })
            .expect("failed to spawn search thread");

        self.current_job = Some(SearchJob { handle });
    }

    /// Wait for the running search (if any) to finish
    pub fn finish(&mut self) {
        if let Some(job) = self.current_job.take() {
            job.wait();
        }
    }

    /// Run one request to completion and return its move.
    ///
    /// Blocking convenience over [`EngineController::start_search`].
    pub fn compute(&mut self, request: SearchRequest) -> Option<Move> {
        let (tx, rx) = mpsc::channel();
        self.start_search(request, move |chosen| {
            let _ = tx.send(chosen);
        });
        let chosen = rx.recv().unwrap_or(None);
        self.finish();
        chosen
    }
}

impl Drop for EngineController {
    fn drop(&mut self) {
        self.finish();
    }
}
