//! Dashboard Page
//!
//! Spend overview: stat cards, trend chart, breakdowns, and the drag/resize
//! card layout editor.

use leptos::*;

use crate::analytics::{daily_totals, monthly_totals, period_comparison, totals_by_key};
use crate::api;
use crate::components::{BreakdownBars, CardSkeleton, DailyTrendChart, LayoutEditor, PaymentBadge, StatCard};
use crate::components::stat_card::format_amount;
use crate::models::{DashboardCard, Payment, PaymentStatus, WidgetKind};
use crate::state::global::{GlobalState, TimeRange};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let payments = create_rw_signal(Vec::<Payment>::new());
    let cards = create_rw_signal(default_layout());
    let (editing, set_editing) = create_signal(false);
    let (saving_layout, set_saving_layout) = create_signal(false);

    // Fetch payments (covering the previous window too) and the saved layout
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let range = state_for_effect.time_range.get();
        let state = state_for_effect.clone();

        spawn_local(async move {
            state.loading.set(true);

            let window = (range.start - range.duration_ms(), range.end);
            match api::fetch_payments(Some(window)).await {
                Ok(list) => payments.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch payments: {}", e).into());
                }
            }

            state.loading.set(false);
        });
    });

    // Saved layout is fetched once; an empty or failed response keeps the default
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_layout().await {
                Ok(layout) if !layout.is_empty() => cards.set(layout),
                Ok(_) => {}
                Err(e) => {
                    web_sys::console::warn_1(&format!("Using default layout: {}", e).into());
                }
            }
        });
    });

    // Reference data for breakdown labels
    let state_for_refs = state.clone();
    create_effect(move |_| {
        let state = state_for_refs.clone();
        spawn_local(async move {
            if state.categories.get_untracked().is_empty() {
                match api::fetch_categories().await {
                    Ok(categories) => state.categories.set(categories),
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to fetch categories: {}", e).into());
                    }
                }
            }
            if state.services.get_untracked().is_empty() {
                match api::fetch_services().await {
                    Ok(services) => state.services.set(services),
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to fetch services: {}", e).into());
                    }
                }
            }
        });
    });

    // Drafts don't count against spend figures
    let counted = create_memo(move |_| {
        payments
            .get()
            .into_iter()
            .filter(|p| p.status != PaymentStatus::Draft)
            .collect::<Vec<_>>()
    });

    let state_for_cmp = state.clone();
    let comparison = create_memo(move |_| {
        period_comparison(&counted.get(), &state_for_cmp.time_range.get())
    });

    let state_for_daily = state.clone();
    let daily = create_memo(move |_| {
        daily_totals(&counted.get(), &state_for_daily.time_range.get())
    });

    let state_for_cat = state.clone();
    let by_category = create_memo(move |_| {
        let range = state_for_cat.time_range.get();
        totals_by_key(&counted.get(), &range, |p| p.category_id)
            .into_iter()
            .map(|(id, total)| {
                let name = state_for_cat
                    .category_name(id)
                    .unwrap_or_else(|| format!("Category #{}", id));
                (name, total)
            })
            .collect::<Vec<_>>()
    });

    let state_for_svc = state.clone();
    let by_service = create_memo(move |_| {
        let range = state_for_svc.time_range.get();
        totals_by_key(&counted.get(), &range, |p| p.service_id)
            .into_iter()
            .map(|(id, total)| {
                let name = state_for_svc
                    .service_name(id)
                    .unwrap_or_else(|| format!("Service #{}", id));
                (name, total)
            })
            .collect::<Vec<_>>()
    });

    let by_month = create_memo(move |_| {
        use chrono::Datelike;

        const MONTHS: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun",
            "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];

        let year = chrono::Utc::now().year();
        monthly_totals(&counted.get(), year)
            .into_iter()
            .enumerate()
            .filter(|(_, total)| *total > 0.0)
            .map(|(month, total)| (format!("{} {}", MONTHS[month], year), total))
            .collect::<Vec<_>>()
    });

    let pending_count = create_memo(move |_| {
        payments
            .get()
            .iter()
            .filter(|p| p.status == PaymentStatus::Submitted)
            .count()
    });

    let state_for_save = state.clone();
    let save_layout = move |_| {
        set_saving_layout.set(true);

        let state = state_for_save.clone();
        let layout = cards.get();
        spawn_local(async move {
            match api::save_layout(&layout).await {
                Ok(()) => {
                    state.show_success("Layout saved");
                    set_editing.set(false);
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
            set_saving_layout.set(false);
        });
    };

    let state_for_range = state.clone();
    let time_range = state.time_range;

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"IT spend at a glance"</p>
                </div>

                // Time range selection
                <div class="flex space-x-2">
                    <TimeRangeButton label="7D" days=7 />
                    <TimeRangeButton label="30D" days=30 />
                    <TimeRangeButton label="90D" days=90 />
                </div>
            </div>

            // Snapshot row
            <section>
                <h2 class="text-lg font-semibold mb-4">"Snapshot"</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    {move || {
                        if state_for_range.loading.get() {
                            view! {
                                <CardSkeleton />
                                <CardSkeleton />
                                <CardSkeleton />
                            }.into_view()
                        } else {
                            view! {
                                <StatCard
                                    label="Total spend"
                                    comparison=comparison
                                    series=daily
                                />
                                <SummaryCard
                                    label="Payments in window"
                                    value=Signal::derive(move || counted.get().len().to_string())
                                />
                                <SummaryCard
                                    label="Pending approvals"
                                    value=Signal::derive(move || pending_count.get().to_string())
                                />
                            }.into_view()
                        }
                    }}
                </div>
            </section>

            // Card layout
            <section class="bg-gray-900">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-lg font-semibold">
                        "Widgets"
                        <span class="text-sm text-gray-400 font-normal ml-3">
                            {move || time_range.get().label}
                        </span>
                    </h2>

                    <div class="flex space-x-2">
                        {move || {
                            if editing.get() {
                                view! {
                                    <button
                                        on:click=save_layout.clone()
                                        disabled=move || saving_layout.get()
                                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                               rounded-lg text-sm font-medium transition-colors"
                                    >
                                        {move || if saving_layout.get() { "Saving..." } else { "Save layout" }}
                                    </button>
                                }.into_view()
                            } else {
                                view! {
                                    <button
                                        on:click=move |_| set_editing.set(true)
                                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm
                                               font-medium transition-colors"
                                    >
                                        "Edit layout"
                                    </button>
                                }.into_view()
                            }
                        }}
                    </div>
                </div>

                <LayoutEditor
                    cards=cards
                    editing=editing
                    render=move |card: &DashboardCard| {
                        render_widget(
                            card.widget,
                            comparison,
                            daily,
                            by_category,
                            by_service,
                            by_month,
                            payments,
                            time_range,
                        )
                    }
                />
            </section>
        </div>
    }
}

/// Plain numeric summary card
#[component]
fn SummaryCard(
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <span class="text-gray-400 text-sm">{label}</span>
            <div class="text-3xl font-bold mt-2">{move || value.get()}</div>
        </div>
    }
}

/// Time range selection button
#[component]
fn TimeRangeButton(
    label: &'static str,
    days: i64,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_memo = state.clone();
    let is_active = create_memo(move |_| {
        state_for_memo.time_range.get().duration_days() == days
    });

    let state_for_click = state;
    let on_click = move |_| {
        state_for_click.time_range.set(TimeRange::last_days(days));
    };

    view! {
        <button
            on:click=on_click
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if is_active.get() {
                    format!("{} bg-primary-600 text-white", base)
                } else {
                    format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
                }
            }
        >
            {label}
        </button>
    }
}

/// Render the inner view of a dashboard card
fn render_widget(
    widget: WidgetKind,
    comparison: Memo<crate::analytics::PeriodComparison>,
    daily: Memo<Vec<(i64, f64)>>,
    by_category: Memo<Vec<(String, f64)>>,
    by_service: Memo<Vec<(String, f64)>>,
    by_month: Memo<Vec<(String, f64)>>,
    payments: RwSignal<Vec<Payment>>,
    range: RwSignal<TimeRange>,
) -> View {
    match widget {
        WidgetKind::SpendTotal => view! {
            <div>
                <div class="text-3xl font-bold">
                    {move || format_amount(comparison.get().current_total)}
                </div>
                <div class="text-sm text-gray-400 mt-1">
                    {move || format!("{:+.1}% vs previous period", comparison.get().delta_percent)}
                </div>
            </div>
        }
        .into_view(),
        WidgetKind::DailyTrend => view! {
            <DailyTrendChart series=daily range=Signal::derive(move || range.get()) />
        }
        .into_view(),
        WidgetKind::SpendByCategory => view! {
            <BreakdownBars entries=by_category />
        }
        .into_view(),
        WidgetKind::SpendByService => view! {
            <BreakdownBars entries=by_service />
        }
        .into_view(),
        WidgetKind::SpendByMonth => view! {
            <BreakdownBars entries=by_month />
        }
        .into_view(),
        WidgetKind::RecentPayments => view! {
            <RecentPayments payments=payments />
        }
        .into_view(),
        WidgetKind::OpenApprovals => view! {
            <OpenApprovals payments=payments />
        }
        .into_view(),
    }
}

/// Most recent payments across the fetched window
#[component]
fn RecentPayments(payments: RwSignal<Vec<Payment>>) -> impl IntoView {
    view! {
        <div class="space-y-2">
            {move || {
                let mut list = payments.get();
                list.sort_by(|a, b| b.effective_date().cmp(&a.effective_date()));
                let recent: Vec<_> = list.into_iter().take(5).collect();

                if recent.is_empty() {
                    view! {
                        <p class="text-gray-400 text-sm">"No recent payments"</p>
                    }.into_view()
                } else {
                    recent.into_iter().map(|payment| {
                        let date = chrono::DateTime::from_timestamp_millis(payment.effective_date())
                            .map(|dt| dt.format("%b %d").to_string())
                            .unwrap_or_default();

                        view! {
                            <div class="flex items-center justify-between py-1 border-b border-gray-700 last:border-0 text-sm">
                                <div class="flex items-center space-x-2 min-w-0">
                                    <PaymentBadge status=payment.status />
                                    <span class="truncate">{payment.description.clone()}</span>
                                    <span class="text-gray-500">{date}</span>
                                </div>
                                <span class="font-semibold">{format_amount(payment.amount)}</span>
                            </div>
                        }
                    }).collect_view()
                }
            }}
        </div>
    }
}

/// Payments waiting on an approval decision
#[component]
fn OpenApprovals(payments: RwSignal<Vec<Payment>>) -> impl IntoView {
    view! {
        <div class="space-y-2">
            {move || {
                let open: Vec<_> = payments
                    .get()
                    .into_iter()
                    .filter(|p| p.status == PaymentStatus::Submitted)
                    .collect();

                if open.is_empty() {
                    view! {
                        <p class="text-gray-400 text-sm">"Nothing waiting for approval"</p>
                    }.into_view()
                } else {
                    open.into_iter().map(|payment| {
                        view! {
                            <div class="flex items-center justify-between py-1 border-b border-gray-700 last:border-0 text-sm">
                                <span class="truncate">{payment.description.clone()}</span>
                                <span class="font-semibold">{format_amount(payment.amount)}</span>
                            </div>
                        }
                    }).collect_view()
                }
            }}
        </div>
    }
}

/// Default card arrangement used until a saved layout exists
fn default_layout() -> Vec<DashboardCard> {
    vec![
        DashboardCard {
            id: 1,
            title: "Daily trend".to_string(),
            widget: WidgetKind::DailyTrend,
            x: 0.0,
            y: 0.0,
            width: 640.0,
            height: 360.0,
        },
        DashboardCard {
            id: 2,
            title: "Total spend".to_string(),
            widget: WidgetKind::SpendTotal,
            x: 660.0,
            y: 0.0,
            width: 280.0,
            height: 170.0,
        },
        DashboardCard {
            id: 3,
            title: "Open approvals".to_string(),
            widget: WidgetKind::OpenApprovals,
            x: 660.0,
            y: 190.0,
            width: 280.0,
            height: 170.0,
        },
        DashboardCard {
            id: 4,
            title: "By category".to_string(),
            widget: WidgetKind::SpendByCategory,
            x: 0.0,
            y: 380.0,
            width: 460.0,
            height: 240.0,
        },
        DashboardCard {
            id: 5,
            title: "By service".to_string(),
            widget: WidgetKind::SpendByService,
            x: 480.0,
            y: 380.0,
            width: 460.0,
            height: 240.0,
        },
        DashboardCard {
            id: 6,
            title: "Recent payments".to_string(),
            widget: WidgetKind::RecentPayments,
            x: 0.0,
            y: 640.0,
            width: 560.0,
            height: 220.0,
        },
        DashboardCard {
            id: 7,
            title: "By month".to_string(),
            widget: WidgetKind::SpendByMonth,
            x: 580.0,
            y: 640.0,
            width: 360.0,
            height: 220.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_respects_minimums() {
        for card in default_layout() {
            assert!(card.width >= crate::layout::MIN_CARD_W);
            assert!(card.height >= crate::layout::MIN_CARD_H);
            assert!(card.x >= 0.0);
            assert!(card.y >= 0.0);
        }
    }

    #[test]
    fn test_default_layout_ids_unique() {
        let layout = default_layout();
        let mut ids: Vec<u32> = layout.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), layout.len());
    }
}
