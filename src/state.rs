//! Dashboard state container
//!
//! All display state lives in one [`DashboardState`] value, changed only by
//! the transitions below. Each submitted location is tagged with a request
//! sequence number; a completion for anything other than the latest request
//! is discarded, so a slow response for an old location can never overwrite
//! a newer one.

use crate::data::ForecastDocument;

/// Message shown when a fetch fails for any reason
pub const FETCH_FAILED_MESSAGE: &str = "Location not found";

/// Identifier of one fetch request
pub type RequestSeq = u64;

/// Which forecast breakdown is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForecastView {
    /// Up to 10 daily cards
    #[default]
    Daily,
    /// Rolling 24-hour window
    Hourly,
}

impl ForecastView {
    /// The other view
    pub fn toggled(self) -> Self {
        match self {
            ForecastView::Daily => ForecastView::Hourly,
            ForecastView::Hourly => ForecastView::Daily,
        }
    }

    /// Parses a view name ("daily" or "hourly", case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "d" => Some(ForecastView::Daily),
            "hourly" | "h" => Some(ForecastView::Hourly),
            _ => None,
        }
    }
}

/// Result of applying a fetch completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The completion belonged to the latest request and was applied
    Accepted,
    /// The completion belonged to an older request and was dropped
    Stale,
}

/// Single source of truth for what the dashboard shows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    /// Location query of the latest request
    pub location: String,
    /// Latest accepted forecast, replaced wholesale on success
    pub forecast: Option<ForecastDocument>,
    /// Whether the latest fetch failed
    pub error: bool,
    /// Whether the latest request is still outstanding
    pub loading: bool,
    /// Selected forecast breakdown
    pub view: ForecastView,
    /// Sequence number of the latest issued request (0 = none yet)
    latest_seq: RequestSeq,
}

impl DashboardState {
    /// Creates an empty state showing the given view
    pub fn new(view: ForecastView) -> Self {
        Self {
            view,
            ..Default::default()
        }
    }

    /// Sequence number of the most recently issued request
    pub fn latest_seq(&self) -> RequestSeq {
        self.latest_seq
    }

    /// A location was submitted.
    ///
    /// Returns the sequence number to tag the fetch with, or `None` when the
    /// query is blank and nothing changes. The previous forecast stays in
    /// place until the new request completes.
    pub fn location_submitted(&mut self, query: &str) -> Option<RequestSeq> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        self.latest_seq += 1;
        self.location = query.to_string();
        self.error = false;
        self.loading = true;
        Some(self.latest_seq)
    }

    /// A fetch completed with a forecast
    pub fn fetch_succeeded(&mut self, seq: RequestSeq, forecast: ForecastDocument) -> Applied {
        if seq != self.latest_seq {
            return Applied::Stale;
        }
        self.forecast = Some(forecast);
        self.error = false;
        self.loading = false;
        Applied::Accepted
    }

    /// A fetch failed; the previous forecast is cleared
    pub fn fetch_failed(&mut self, seq: RequestSeq) -> Applied {
        if seq != self.latest_seq {
            return Applied::Stale;
        }
        self.forecast = None;
        self.error = true;
        self.loading = false;
        Applied::Accepted
    }

    pub fn toggle_view(&mut self) {
        self.view = self.view.toggled();
    }

    pub fn set_view(&mut self, view: ForecastView) {
        self.view = view;
    }

    /// Message to show in place of the forecast, if any
    pub fn error_message(&self) -> Option<&'static str> {
        self.error.then_some(FETCH_FAILED_MESSAGE)
    }
}
