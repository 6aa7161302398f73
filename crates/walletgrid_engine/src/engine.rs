use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use grid_logging::grid_debug;

use crate::fetch::{ExplorerApi, ExplorerSettings, HttpExplorerApi};
use crate::preload::{preload_all, HttpImagePreloader, ImagePreloader, PRELOAD_FLOOR};
use crate::types::{EngineEvent, PageQuery};

/// Engine-side configuration.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub explorer: ExplorerSettings,
    /// Icon urls of locally installed extensions, warmed alongside every
    /// fetched page.
    pub extension_icons: Vec<String>,
}

enum EngineCommand {
    FetchPage { generation: u64, query: PageQuery },
}

/// Handle to the engine thread: commands in, events out. The thread owns
/// a tokio runtime; fetches overlap freely on it.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    // Behind a mutex so the handle can be shared with a polling thread.
    event_rx: Mutex<mpsc::Receiver<EngineEvent>>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let api = Arc::new(HttpExplorerApi::new(config.explorer));
        let preloader = Arc::new(HttpImagePreloader::new());
        let extension_icons = Arc::new(config.extension_icons);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let preloader = preloader.clone();
                let icons = extension_icons.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), preloader.as_ref(), &icons, command, event_tx)
                        .await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Mutex::new(event_rx),
        }
    }

    pub fn fetch_page(&self, generation: u64, query: PageQuery) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::FetchPage { generation, query });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    api: &dyn ExplorerApi,
    preloader: &dyn ImagePreloader,
    extension_icons: &[String],
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchPage { generation, query } => {
            grid_debug!(
                "fetching explorer page {} (generation {})",
                query.page,
                generation
            );
            let result = api.get_paginated_wallets(&query).await;
            if let Ok(page) = &result {
                // Warm every thumbnail before the page is surfaced.
                let mut urls: Vec<String> = page
                    .listings
                    .iter()
                    .map(|listing| listing.image_url.lg.clone())
                    .filter(|url| !url.is_empty())
                    .collect();
                urls.extend(extension_icons.iter().cloned());
                preload_all(preloader, &urls, PRELOAD_FLOOR).await;
            }
            let _ = event_tx.send(EngineEvent::PageFetched { generation, result });
        }
    }
}
