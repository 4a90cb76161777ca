//! Chart Components
//!
//! Daily spend trend on HTML5 Canvas plus div-based breakdown bars.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::components::stat_card::format_amount;
use crate::state::global::TimeRange;

/// Line color for the spend series
const SERIES_COLOR: &str = "#F59E0B";

/// Daily spend trend chart
#[component]
pub fn DailyTrendChart(
    /// Zero-filled daily totals, ascending by day
    #[prop(into)]
    series: Signal<Vec<(i64, f64)>>,
    #[prop(into)]
    range: Signal<TimeRange>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw when data or time range changes
    create_effect(move |_| {
        let points = series.get();
        let window = range.get();

        if let Some(canvas) = canvas_ref.get() {
            draw_trend(&canvas, &points, &window);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="320"
            class="w-full h-64 md:h-80 rounded-lg"
        />
    }
}

/// Draw the daily spend series on canvas
fn draw_trend(canvas: &HtmlCanvasElement, points: &[(i64, f64)], range: &TimeRange) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 70.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    let max_value = points.iter().map(|(_, v)| *v).fold(0.0, f64::max);
    let y_max = if max_value > 0.0 { max_value * 1.1 } else { 1.0 };

    // Draw grid lines
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);

    // Horizontal grid lines (5 lines)
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        // Y-axis labels
        let value = y_max - (i as f64 / 5.0) * y_max;
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format_amount(value), 5.0, y + 4.0);
    }

    let time_range_ms = (range.end - range.start) as f64;
    if time_range_ms <= 0.0 {
        return;
    }

    // Draw the series
    if !points.is_empty() {
        ctx.set_stroke_style(&SERIES_COLOR.into());
        ctx.set_line_width(2.0);
        ctx.begin_path();

        for (i, (day, value)) in points.iter().enumerate() {
            // Scale x to chart area
            let x = margin_left + ((day - range.start) as f64 / time_range_ms).clamp(0.0, 1.0) * chart_width;

            // Scale y to chart area (inverted because canvas y grows downward)
            let y = margin_top + ((y_max - value) / y_max) * chart_height;

            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }

        ctx.stroke();

        // Draw points
        ctx.set_fill_style(&SERIES_COLOR.into());
        for (day, value) in points {
            let x = margin_left + ((day - range.start) as f64 / time_range_ms).clamp(0.0, 1.0) * chart_width;
            let y = margin_top + ((y_max - value) / y_max) * chart_height;

            ctx.begin_path();
            let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
            ctx.fill();
        }
    }

    // Draw x-axis labels
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");

    let num_labels = 5;
    for i in 0..=num_labels {
        let timestamp = range.start + (i as i64 * (range.end - range.start) / num_labels as i64);
        let x = margin_left + (i as f64 / num_labels as f64) * chart_width;

        let date = chrono::DateTime::from_timestamp_millis(timestamp)
            .map(|dt| dt.format("%m/%d").to_string())
            .unwrap_or_default();

        let _ = ctx.fill_text(&date, x - 15.0, height - 10.0);
    }

    // Draw "No data" message if the window has no spend
    if points.iter().all(|(_, v)| *v == 0.0) {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No spend in selected range", width / 2.0 - 90.0, height / 2.0);
    }
}

/// Horizontal breakdown bars for per-category / per-service totals
#[component]
pub fn BreakdownBars(
    /// (name, total) rows, descending by total
    #[prop(into)]
    entries: Signal<Vec<(String, f64)>>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            {move || {
                let rows = entries.get();

                if rows.is_empty() {
                    return view! {
                        <p class="text-gray-400 text-sm">"No spend in selected range"</p>
                    }.into_view();
                }

                let max = rows.iter().map(|(_, v)| *v).fold(f64::NEG_INFINITY, f64::max);
                let scale = if max <= 0.0 { 1.0 } else { max };

                rows.into_iter().map(|(name, total)| {
                    let width_percent = (total / scale * 100.0).clamp(2.0, 100.0) as i32;
                    view! {
                        <div class="flex items-center space-x-3 text-sm">
                            <span class="w-32 truncate text-gray-300">{name}</span>
                            <div class="flex-1 bg-gray-700 rounded h-3">
                                <div
                                    class="h-3 rounded"
                                    style=format!(
                                        "width: {}%; background-color: {}",
                                        width_percent, SERIES_COLOR
                                    )
                                />
                            </div>
                            <span class="w-24 text-right text-gray-300">{format_amount(total)}</span>
                        </div>
                    }
                }).collect_view()
            }}
        </div>
    }
}
