//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use crate::models::{Category, Contractor, Department, LegalEntity, Service, Session};

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Authenticated user and effective permissions
    pub session: RwSignal<Option<Session>>,
    /// Reference data shared by form selects
    pub categories: RwSignal<Vec<Category>>,
    pub services: RwSignal<Vec<Service>>,
    pub departments: RwSignal<Vec<Department>>,
    pub contractors: RwSignal<Vec<Contractor>>,
    pub legal_entities: RwSignal<Vec<LegalEntity>>,
    /// Current reporting window for spend figures
    pub time_range: RwSignal<TimeRange>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Time range for spend queries
#[derive(Clone, Debug, PartialEq)]
pub struct TimeRange {
    pub start: i64,
    pub end: i64,
    pub label: String,
}

impl Default for TimeRange {
    fn default() -> Self {
        Self::last_days(30)
    }
}

impl TimeRange {
    /// Create a time range for the last N days
    pub fn last_days(days: i64) -> Self {
        let end = chrono::Utc::now().timestamp_millis();
        let start = end - (days * 24 * 60 * 60 * 1000);
        Self {
            start,
            end,
            label: if days == 1 {
                "Today".to_string()
            } else {
                format!("Last {} days", days)
            },
        }
    }

    /// Create a time range for a specific calendar month
    pub fn month(year: i32, month: u32) -> Self {
        use chrono::{TimeZone, Utc};

        let start_date = Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).unwrap();
        let end_date = if month == 12 {
            Utc.with_ymd_and_hms(year + 1, 1, 1, 0, 0, 0).unwrap()
        } else {
            Utc.with_ymd_and_hms(year, month + 1, 1, 0, 0, 0).unwrap()
        };

        Self {
            start: start_date.timestamp_millis(),
            end: end_date.timestamp_millis(),
            label: format!(
                "{} {}",
                match month {
                    1 => "January",
                    2 => "February",
                    3 => "March",
                    4 => "April",
                    5 => "May",
                    6 => "June",
                    7 => "July",
                    8 => "August",
                    9 => "September",
                    10 => "October",
                    11 => "November",
                    12 => "December",
                    _ => "Unknown",
                },
                year
            ),
        }
    }

    /// The equal-length window immediately preceding this one
    pub fn previous_window(&self) -> TimeRange {
        let duration = self.end - self.start;
        TimeRange {
            start: self.start - duration,
            end: self.start,
            label: format!("Previous ({})", self.label),
        }
    }

    /// Duration in milliseconds
    pub fn duration_ms(&self) -> i64 {
        self.end - self.start
    }

    /// Duration in days
    pub fn duration_days(&self) -> i64 {
        self.duration_ms() / (24 * 60 * 60 * 1000)
    }

    /// Whether a timestamp falls inside the window (start inclusive, end exclusive)
    pub fn contains(&self, timestamp: i64) -> bool {
        timestamp >= self.start && timestamp < self.end
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        session: create_rw_signal(None),
        categories: create_rw_signal(Vec::new()),
        services: create_rw_signal(Vec::new()),
        departments: create_rw_signal(Vec::new()),
        contractors: create_rw_signal(Vec::new()),
        legal_entities: create_rw_signal(Vec::new()),
        time_range: create_rw_signal(TimeRange::default()),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Whether the current session carries a permission
    pub fn has_permission(&self, permission: &str) -> bool {
        self.session
            .get()
            .map(|s| s.permissions.iter().any(|p| p == permission))
            .unwrap_or(false)
    }

    /// Display name of a category by id
    pub fn category_name(&self, id: u32) -> Option<String> {
        self.categories
            .get()
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
    }

    /// Display name of a service by id
    pub fn service_name(&self, id: u32) -> Option<String> {
        self.services
            .get()
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.name.clone())
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_range_default() {
        let range = TimeRange::default();
        assert_eq!(range.duration_days(), 30);
    }

    #[test]
    fn test_time_range_last_days() {
        let range = TimeRange::last_days(7);
        assert_eq!(range.duration_days(), 7);
        assert_eq!(range.label, "Last 7 days");
    }

    #[test]
    fn test_time_range_month_boundaries() {
        let range = TimeRange::month(2025, 12);
        assert_eq!(range.label, "December 2025");
        assert_eq!(range.duration_days(), 31);
    }

    #[test]
    fn test_previous_window_is_adjacent_and_equal_length() {
        let range = TimeRange::month(2025, 3);
        let previous = range.previous_window();

        assert_eq!(previous.end, range.start);
        assert_eq!(previous.duration_ms(), range.duration_ms());
    }

    #[test]
    fn test_contains_is_half_open() {
        let range = TimeRange::month(2025, 1);
        assert!(range.contains(range.start));
        assert!(!range.contains(range.end));
    }
}
