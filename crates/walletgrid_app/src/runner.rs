use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use grid_logging::{grid_info, grid_warn, set_fetch_generation};
use walletgrid_core::{Effect, Msg};
use walletgrid_engine::{Debouncer, EngineConfig, EngineEvent, EngineHandle, DEBOUNCE_WINDOW};

use crate::convert;
use crate::toast::ToastSink;

/// Executes core effects against the engine and feeds engine events back
/// into the message loop as `Msg`s.
pub struct EffectRunner {
    engine: Arc<EngineHandle>,
    toast: Arc<dyn ToastSink>,
    msg_tx: mpsc::Sender<Msg>,
    search: Debouncer<String>,
}

impl EffectRunner {
    pub fn new(config: EngineConfig, toast: Arc<dyn ToastSink>, msg_tx: mpsc::Sender<Msg>) -> Self {
        let engine = Arc::new(EngineHandle::new(config));
        let search = {
            let msg_tx = msg_tx.clone();
            Debouncer::new(DEBOUNCE_WINDOW, move |term| {
                let _ = msg_tx.send(Msg::SearchChanged(term));
            })
        };
        let runner = Self {
            engine,
            toast,
            msg_tx,
            search,
        };
        runner.spawn_event_loop();
        runner
    }

    /// Executes the effects returned by one `update` step.
    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage { generation, query } => {
                    set_fetch_generation(generation);
                    grid_info!(
                        "FetchPage page={} entries={} search_len={}",
                        query.page,
                        query.entries,
                        query.search.len()
                    );
                    self.engine
                        .fetch_page(generation, convert::to_wire_query(&query));
                }
                Effect::Toast { message, severity } => {
                    self.toast.open_toast(&message, severity);
                }
            }
        }
    }

    /// Debounced entry point for raw search keystrokes. All call sites
    /// share the one window; the settled term arrives on the message loop
    /// as `Msg::SearchChanged`.
    pub fn search_input(&self) -> &Debouncer<String> {
        &self.search
    }

    fn spawn_event_loop(&self) {
        let engine = self.engine.clone();
        let msg_tx = self.msg_tx.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                match event {
                    EngineEvent::PageFetched { generation, result } => {
                        let result = match result {
                            Ok(page) => Ok(convert::to_fetched_page(page)),
                            Err(err) => {
                                grid_warn!(
                                    "explorer fetch failed (generation {generation}): {err}"
                                );
                                Err(convert::to_fetch_failure(&err))
                            }
                        };
                        if msg_tx.send(Msg::PageFetched { generation, result }).is_err() {
                            break;
                        }
                    }
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}
