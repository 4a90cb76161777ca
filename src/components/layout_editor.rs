//! Layout Editor Component
//!
//! Direct-manipulation editor for the dashboard card layout. Mousedown on a
//! card starts a move; mousedown on the corner handle starts a resize.
//! Document-level mousemove/mouseup listeners apply the clamped delta and
//! commit on release. Persistence is the caller's single PUT of the array.

use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::layout::{apply_drag, canvas_height, DragMode, DragState};
use crate::models::DashboardCard;

/// Dashboard card layout editor
#[component]
pub fn LayoutEditor<F>(
    cards: RwSignal<Vec<DashboardCard>>,
    #[prop(into)]
    editing: Signal<bool>,
    /// Renders the widget body of a card
    render: F,
) -> impl IntoView
where
    F: Fn(&DashboardCard) -> View + Copy + 'static,
{
    let active: RwSignal<Option<DragState>> = create_rw_signal(None);

    bind_document_listeners(cards, active);

    view! {
        <div
            class="relative"
            style=move || format!("height: {}px", canvas_height(&cards.get()).max(320.0))
        >
            {move || {
                cards.get().into_iter().map(|card| {
                    let card_id = card.id;
                    let is_dragging = move || {
                        active.get().map(|d| d.card_id == card_id).unwrap_or(false)
                    };

                    let card_for_move = card.clone();
                    let on_move_down = move |ev: web_sys::MouseEvent| {
                        if ev.button() != 0 || !editing.get_untracked() {
                            return;
                        }
                        ev.prevent_default();
                        active.set(Some(DragState {
                            card_id,
                            mode: DragMode::Move,
                            pointer_x: ev.client_x(),
                            pointer_y: ev.client_y(),
                            origin: card_for_move.clone(),
                        }));
                    };

                    let card_for_resize = card.clone();
                    let on_resize_down = move |ev: web_sys::MouseEvent| {
                        if ev.button() != 0 || !editing.get_untracked() {
                            return;
                        }
                        ev.prevent_default();
                        ev.stop_propagation();
                        active.set(Some(DragState {
                            card_id,
                            mode: DragMode::Resize,
                            pointer_x: ev.client_x(),
                            pointer_y: ev.client_y(),
                            origin: card_for_resize.clone(),
                        }));
                    };

                    let frame_class = move || {
                        let mut class = "layout-card bg-gray-800 rounded-xl p-4 border border-gray-700".to_string();
                        if editing.get() {
                            class.push_str(" editing");
                        }
                        if is_dragging() {
                            class.push_str(" dragging");
                        }
                        class
                    };

                    let body = render(&card);

                    view! {
                        <div
                            class=frame_class
                            style=format!(
                                "left: {}px; top: {}px; width: {}px; height: {}px",
                                card.x, card.y, card.width, card.height
                            )
                            on:mousedown=on_move_down
                        >
                            <h3 class="text-sm font-semibold text-gray-300 mb-2 truncate">
                                {card.title.clone()}
                            </h3>
                            <div class="overflow-hidden h-full">
                                {body}
                            </div>

                            {move || {
                                if editing.get() {
                                    let handle_down = on_resize_down.clone();
                                    view! {
                                        <div class="resize-handle" on:mousedown=handle_down />
                                    }.into_view()
                                } else {
                                    view! {}.into_view()
                                }
                            }}
                        </div>
                    }
                }).collect_view()
            }}
        </div>
    }
}

/// Bind document-level mousemove/mouseup handlers for the active drag
fn bind_document_listeners(
    cards: RwSignal<Vec<DashboardCard>>,
    active: RwSignal<Option<DragState>>,
) {
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if let Some(drag) = active.get_untracked() {
            let dx = (ev.client_x() - drag.pointer_x) as f64;
            let dy = (ev.client_y() - drag.pointer_y) as f64;
            let updated = apply_drag(&drag.origin, drag.mode, dx, dy);

            cards.update(|cs| {
                if let Some(card) = cs.iter_mut().find(|c| c.id == drag.card_id) {
                    *card = updated.clone();
                }
            });
        }
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        // Commit: geometry is already applied, just end the drag
        if active.get_untracked().is_some() {
            active.set(None);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback(
                "mousemove",
                on_mousemove.as_ref().unchecked_ref(),
            );
            let _ = doc.add_event_listener_with_callback(
                "mouseup",
                on_mouseup.as_ref().unchecked_ref(),
            );
        }
    }
    on_mousemove.forget();
    on_mouseup.forget();
}
