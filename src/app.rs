use crate::common::{ApiClient, ApiResult, IdentityResponse};
use crate::config::Config;
use crate::views::status::StatusView;
use color_eyre::eyre::Result;
use crossterm::event::EventStream;
use serde_json::Value;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Status,
    Settings,
}

/// 60 FPS = 1000ms / 60 = 16.67ms per frame
const FPS_RATE: Duration = Duration::from_millis(1000 / 60);

#[derive(Debug)]
pub struct App {
    /// Active application view.
    pub view: AppView,
    /// Is the application running?
    pub is_running: bool,
    /// Event stream.
    pub event_stream: EventStream,
    /// Configuration.
    pub config: Config,
    /// Temporary config for editing.
    pub temp_config: Config,
    /// API client, holding the base URL resolved at construction.
    pub api: ApiClient,
    /// The status screen's view-model, written in place as answers land.
    pub status: StatusView,

    /// Input buffer for editing.
    pub input_buffer: String,
    /// Status message.
    pub status_message: String,

    /// Pending answer of the identity check.
    pub(crate) identity_rx: Option<mpsc::UnboundedReceiver<ApiResult<IdentityResponse>>>,
    /// Pending answer of the model-list fetch.
    pub(crate) models_rx: Option<mpsc::UnboundedReceiver<ApiResult<Value>>>,
}

impl App {
    /// Construct a new instance of [`App`] from the config on disk.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config)
    }

    pub fn with_config(config: Config) -> Result<Self> {
        let base_url = config.parsed_address().base_url();
        info!("api root: {base_url}");

        Ok(Self {
            view: AppView::Status,
            is_running: false,
            event_stream: EventStream::new(),
            api: ApiClient::new(base_url),
            temp_config: config.clone(),
            config,
            status: StatusView::default(),
            input_buffer: String::new(),
            status_message: String::new(),
            identity_rx: None,
            models_rx: None,
        })
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: ratatui::DefaultTerminal) -> Result<()> {
        self.is_running = true;
        self.start_checks();

        // create a ticker for redraws
        let mut interval = tokio::time::interval(FPS_RATE);

        while self.is_running {
            // draw first (to disguise async stuff in ticks)
            terminal.draw(|frame| self.draw(frame))?;

            // answers land regardless of which screen is up
            self.tick_status();

            // handle events with timeout to keep the panel fresh
            tokio::select! {
                _ = interval.tick() => {
                    // will trigger a redraw by looping
                    continue;
                }
                result = self.handle_crossterm_events() => {
                    result?;
                }
            }
        }
        Ok(())
    }

    /// Fire the identity check and the model-list fetch, once.
    ///
    /// The two flows run as separate tasks started back-to-back, with
    /// no ordering between them and no retry; each reports back over
    /// its own channel and is consumed by [`Self::tick_status`].
    fn start_checks(&mut self) {
        let (identity_tx, identity_rx) = mpsc::unbounded_channel();
        let api = self.api.clone();
        tokio::spawn(async move {
            identity_tx.send(api.fetch_identity().await).ok();
        });
        self.identity_rx = Some(identity_rx);

        let (models_tx, models_rx) = mpsc::unbounded_channel();
        let api = self.api.clone();
        tokio::spawn(async move {
            models_tx.send(api.fetch_models().await).ok();
        });
        self.models_rx = Some(models_rx);
    }

    /// Renders the user interface.
    fn draw(&mut self, frame: &mut ratatui::Frame) {
        match self.view {
            AppView::Status => self.draw_status(frame),
            AppView::Settings => self.draw_settings(frame),
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    async fn handle_crossterm_events(&mut self) -> Result<()> {
        use crossterm::event::{Event, KeyEventKind};
        use futures::{FutureExt, StreamExt};

        let event = self.event_stream.next().fuse().await;
        match event {
            Some(Ok(evt)) => match evt {
                Event::Key(key) if key.kind == KeyEventKind::Press => match self.view {
                    AppView::Status => self.handle_status_input(key),
                    AppView::Settings => self.handle_settings_input(key),
                },
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            },
            _ => {}
        }
        Ok(())
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.is_running = false;
    }
}
