//! UI Components
//!
//! Reusable Leptos components for the console.

pub mod chart;
pub mod confirm;
pub mod layout_editor;
pub mod loading;
pub mod nav;
pub mod stat_card;
pub mod status_badge;
pub mod toast;

pub use chart::{BreakdownBars, DailyTrendChart};
pub use confirm::ConfirmButton;
pub use layout_editor::LayoutEditor;
pub use loading::{CardSkeleton, ListSkeleton, Loading};
pub use nav::Nav;
pub use stat_card::StatCard;
pub use status_badge::{PaymentBadge, TicketBadge};
pub use toast::Toast;
