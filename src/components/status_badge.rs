//! Status Badge Components
//!
//! Colored pills for payment and ticket statuses.

use leptos::*;

use crate::models::{PaymentStatus, TicketStatus};

/// Payment status pill
#[component]
pub fn PaymentBadge(status: PaymentStatus) -> impl IntoView {
    view! {
        <span class=format!(
            "{} text-xs px-2 py-0.5 rounded-full text-white",
            status.badge_class()
        )>
            {status.label()}
        </span>
    }
}

/// Ticket status pill
#[component]
pub fn TicketBadge(status: TicketStatus) -> impl IntoView {
    view! {
        <span class=format!(
            "{} text-xs px-2 py-0.5 rounded-full text-white",
            status.badge_class()
        )>
            {status.label()}
        </span>
    }
}
