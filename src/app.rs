//! Application state management for wxdash
//!
//! This module owns the dashboard state container, turns keyboard input into
//! state transitions, and feeds fetch results back into the state.

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::StartupConfig;
use crate::data::ForecastClient;
use crate::fetcher::{FetchMessage, Fetcher};
use crate::state::{Applied, DashboardState, ForecastView};
use crate::view::DashboardView;

/// Whether keys go to the search field or to dashboard commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Main application struct managing state and data
pub struct App {
    /// Display state, changed only through its transitions
    pub dashboard: DashboardState,
    /// Text typed into the search field
    pub input: String,
    /// Where key presses are routed
    pub input_mode: InputMode,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    fetcher: Fetcher,
}

impl App {
    /// Creates a new App instance from a forecast client
    pub fn new(client: ForecastClient, view: ForecastView) -> Self {
        Self {
            dashboard: DashboardState::new(view),
            input: String::new(),
            input_mode: InputMode::Normal,
            show_help: false,
            should_quit: false,
            fetcher: Fetcher::new(client),
        }
    }

    /// Creates a new App instance with the given startup configuration.
    ///
    /// # Arguments
    /// * `config` - The resolved startup configuration
    pub fn with_startup_config(config: &StartupConfig) -> Result<Self, crate::data::ForecastError> {
        let client = ForecastClient::with_timeout(config.timeout, config.api_key.clone())?
            .with_base_url(config.base_url.clone());
        Ok(Self::new(client, config.view))
    }

    /// Submits a location and dispatches its fetch.
    ///
    /// Blank queries are ignored. Must be called from within a tokio runtime.
    pub fn submit_location(&mut self, query: &str) {
        if let Some(seq) = self.dashboard.location_submitted(query) {
            tracing::info!(message = "location submitted", location = %self.dashboard.location, seq = seq);
            self.fetcher.spawn(seq, self.dashboard.location.clone());
        }
    }

    /// Applies every fetch result that has arrived since the last call
    pub fn poll_fetches(&mut self) {
        while let Some(message) = self.fetcher.try_recv() {
            self.apply_fetch(message);
        }
    }

    /// Waits for one fetch result and applies it
    pub async fn wait_for_fetch(&mut self) {
        if let Some(message) = self.fetcher.recv().await {
            self.apply_fetch(message);
        }
    }

    /// Feeds one fetch result into the state container
    pub fn apply_fetch(&mut self, message: FetchMessage) {
        let applied = match message {
            FetchMessage::Completed {
                seq,
                location,
                forecast,
            } => {
                // A document whose offset cannot be applied is as unusable as a malformed one
                if let Err(e) = DashboardView::build(&forecast, &Utc::now()) {
                    tracing::warn!(message = "forecast unusable", location = %location, error = %e);
                    self.dashboard.fetch_failed(seq)
                } else {
                    let city = forecast.city().to_string();
                    let applied = self.dashboard.fetch_succeeded(seq, *forecast);
                    if applied == Applied::Accepted {
                        tracing::info!(message = "fetched new forecast", location = %location, resolved = %city);
                    }
                    applied
                }
            }
            FetchMessage::Failed {
                seq,
                location,
                reason,
            } => {
                let applied = self.dashboard.fetch_failed(seq);
                if applied == Applied::Accepted {
                    tracing::warn!(message = "failed to fetch forecast", location = %location, error = %reason);
                }
                applied
            }
        };

        if applied == Applied::Stale {
            tracing::debug!(message = "discarded stale forecast response", latest = self.dashboard.latest_seq());
        }
    }

    /// Builds the display projection for the current forecast, if any
    pub fn current_view(&self) -> Option<DashboardView> {
        let forecast = self.dashboard.forecast.as_ref()?;
        DashboardView::build(forecast, &Utc::now()).ok()
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - `q` or `Ctrl-C`: Quit the application
    /// - `/` or `s`: Focus the search field
    /// - `Enter` (searching): Submit the typed location
    /// - `Esc` (searching): Leave the search field and clear it
    /// - `Tab`: Toggle between daily and hourly views
    /// - `d` / `h`: Show daily / hourly view
    /// - `?`: Toggle the help overlay
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            self.should_quit = true;
            return;
        }

        // Handle help overlay - intercepts all keys when shown
        if self.show_help {
            match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.show_help = false;
                }
                _ => {} // Ignore other keys when help is shown
            }
            return;
        }

        match self.input_mode {
            InputMode::Editing => match key_event.code {
                KeyCode::Enter => {
                    let query = std::mem::take(&mut self.input);
                    self.input_mode = InputMode::Normal;
                    self.submit_location(&query);
                }
                KeyCode::Esc => {
                    self.input.clear();
                    self.input_mode = InputMode::Normal;
                }
                KeyCode::Backspace => {
                    self.input.pop();
                }
                KeyCode::Char(c) => {
                    self.input.push(c);
                }
                _ => {}
            },
            InputMode::Normal => match key_event.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                KeyCode::Char('/') | KeyCode::Char('s') => {
                    self.input_mode = InputMode::Editing;
                }
                KeyCode::Tab => {
                    self.dashboard.toggle_view();
                }
                KeyCode::Char('d') => {
                    self.dashboard.set_view(ForecastView::Daily);
                }
                KeyCode::Char('h') => {
                    self.dashboard.set_view(ForecastView::Hourly);
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;

    /// Helper to create a KeyEvent for testing
    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// App whose fetches fail immediately without touching the network
    fn offline_app() -> App {
        App::new(
            ForecastClient::new("k").with_base_url("not a url"),
            ForecastView::Daily,
        )
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key_event(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_new_app_defaults() {
        let app = offline_app();
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.input.is_empty());
        assert!(!app.should_quit);
        assert!(!app.show_help);
        assert!(app.current_view().is_none());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = offline_app();
        app.handle_key(key_event(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = offline_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_view_keys() {
        let mut app = offline_app();
        app.handle_key(key_event(KeyCode::Tab));
        assert_eq!(app.dashboard.view, ForecastView::Hourly);
        app.handle_key(key_event(KeyCode::Char('d')));
        assert_eq!(app.dashboard.view, ForecastView::Daily);
        app.handle_key(key_event(KeyCode::Char('h')));
        assert_eq!(app.dashboard.view, ForecastView::Hourly);
    }

    #[test]
    fn test_help_overlay_intercepts_keys() {
        let mut app = offline_app();
        app.handle_key(key_event(KeyCode::Char('?')));
        assert!(app.show_help);

        // 'q' closes help instead of quitting
        app.handle_key(key_event(KeyCode::Char('q')));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_typing_in_search_does_not_trigger_commands() {
        let mut app = offline_app();
        app.handle_key(key_event(KeyCode::Char('/')));
        assert_eq!(app.input_mode, InputMode::Editing);

        type_text(&mut app, "qhd");
        assert_eq!(app.input, "qhd");
        assert!(!app.should_quit);
        assert_eq!(app.dashboard.view, ForecastView::Daily);

        app.handle_key(key_event(KeyCode::Backspace));
        assert_eq!(app.input, "qh");
    }

    #[test]
    fn test_escape_cancels_search() {
        let mut app = offline_app();
        app.handle_key(key_event(KeyCode::Char('s')));
        type_text(&mut app, "Oslo");
        app.handle_key(key_event(KeyCode::Esc));

        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.input.is_empty());
        assert!(!app.dashboard.loading);
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut app = offline_app();
        app.handle_key(key_event(KeyCode::Char('/')));
        type_text(&mut app, "   ");
        app.handle_key(key_event(KeyCode::Enter));

        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(!app.dashboard.loading);
        assert_eq!(app.dashboard.latest_seq(), 0);
    }

    #[tokio::test]
    async fn test_submit_then_failure_shows_error() {
        let mut app = offline_app();
        app.handle_key(key_event(KeyCode::Char('/')));
        type_text(&mut app, "Atlantis");
        app.handle_key(key_event(KeyCode::Enter));

        assert!(app.dashboard.loading);
        assert_eq!(app.dashboard.location, "Atlantis");
        assert!(app.input.is_empty());

        app.wait_for_fetch().await;
        assert!(!app.dashboard.loading);
        assert!(app.dashboard.error);
        assert!(app.dashboard.forecast.is_none());
    }

    #[test]
    fn test_apply_completed_fetch() {
        let mut app = offline_app();
        let seq = app.dashboard.location_submitted("Minsk").unwrap();

        app.apply_fetch(FetchMessage::Completed {
            seq,
            location: "Minsk".to_string(),
            forecast: Box::new(fixtures::document(3.0, 2)),
        });

        assert!(!app.dashboard.loading);
        let view = app.current_view().expect("Expected a view");
        assert_eq!(view.city, "Minsk");
    }

    #[test]
    fn test_apply_stale_fetch_is_ignored() {
        let mut app = offline_app();
        let old = app.dashboard.location_submitted("Minsk").unwrap();
        app.dashboard.location_submitted("Oslo").unwrap();

        app.apply_fetch(FetchMessage::Completed {
            seq: old,
            location: "Minsk".to_string(),
            forecast: Box::new(fixtures::document(3.0, 2)),
        });

        assert!(app.dashboard.loading);
        assert!(app.dashboard.forecast.is_none());
    }

    #[test]
    fn test_unusable_offset_counts_as_failure() {
        let mut app = offline_app();
        let seq = app.dashboard.location_submitted("Minsk").unwrap();

        app.apply_fetch(FetchMessage::Completed {
            seq,
            location: "Minsk".to_string(),
            forecast: Box::new(fixtures::document(1.0e15, 2)),
        });

        assert!(app.dashboard.error);
        assert!(app.dashboard.forecast.is_none());
    }
}
