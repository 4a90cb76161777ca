//! Stat Card Component
//!
//! Displays a spend figure with its period-over-period delta.

use leptos::*;

use crate::analytics::PeriodComparison;

/// Format a money amount with thousands separators, two decimals
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}.{:02}", if negative { "-" } else { "" }, grouped, frac)
}

/// Spend stat card with delta indicator
#[component]
pub fn StatCard(
    #[prop(into)]
    label: String,
    #[prop(into)]
    comparison: Signal<PeriodComparison>,
    /// Daily series for the mini sparkline
    #[prop(into)]
    series: Signal<Vec<(i64, f64)>>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition">
            // Header with label
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">{label}</span>
                {move || {
                    if comparison.get().new_spend {
                        Some(view! {
                            <span class="bg-purple-600 text-xs px-2 py-0.5 rounded-full text-white">
                                "New"
                            </span>
                        })
                    } else {
                        None
                    }
                }}
            </div>

            // Current total
            <div class="text-3xl font-bold mt-2">
                {move || format_amount(comparison.get().current_total)}
            </div>

            // Delta vs previous period
            <div class="mt-2">
                {move || {
                    let cmp = comparison.get();
                    let (arrow, color) = if cmp.delta_percent > 0.1 {
                        ("↑", "text-red-400")
                    } else if cmp.delta_percent < -0.1 {
                        ("↓", "text-green-400")
                    } else {
                        ("→", "text-gray-400")
                    };

                    view! {
                        <span class=format!("text-sm {}", color)>
                            {arrow}
                            " "
                            {format!("{:+.1}%", cmp.delta_percent)}
                            " vs previous period"
                        </span>
                    }
                }}
            </div>

            // Mini sparkline
            <MiniSparkline series=series />
        </div>
    }
}

/// Mini sparkline showing the recent daily trend
#[component]
fn MiniSparkline(
    #[prop(into)]
    series: Signal<Vec<(i64, f64)>>,
) -> impl IntoView {
    view! {
        <div class="flex items-end space-x-1 h-8 mt-3">
            {move || {
                let points = series.get();

                // Take last 14 days
                let recent: Vec<f64> = points.iter().rev().take(14).rev().map(|(_, v)| *v).collect();

                if recent.is_empty() {
                    return view! {
                        <div class="flex-1 bg-gray-700 rounded h-2"></div>
                    }.into_view();
                }

                let max = recent.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                let scale = if max <= 0.0 { 1.0 } else { max };

                recent.into_iter().map(|value| {
                    let height_percent = (value / scale * 85.0 + 15.0) as i32;
                    view! {
                        <div
                            class="flex-1 bg-primary-500 rounded-t opacity-70"
                            style=format!("height: {}%; background-color: var(--primary-500)", height_percent)
                        />
                    }
                }).collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(1234567.5), "1,234,567.50");
        assert_eq!(format_amount(999.0), "999.00");
        assert_eq!(format_amount(0.0), "0.00");
    }

    #[test]
    fn test_format_amount_rounds_cents() {
        assert_eq!(format_amount(10.005), "10.01");
        assert_eq!(format_amount(10.004), "10.00");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(-1500.25), "-1,500.25");
    }
}
