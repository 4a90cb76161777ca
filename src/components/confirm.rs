//! Confirm Button Component
//!
//! Inline two-step delete confirmation: a × button that flips into
//! confirm/cancel actions instead of opening a dialog.

use leptos::*;

/// Inline delete confirmation button
#[component]
pub fn ConfirmButton(
    on_confirm: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let (confirming, set_confirming) = create_signal(false);

    view! {
        {move || {
            let on_confirm = on_confirm.clone();
            if confirming.get() {
                view! {
                    <span class="inline-flex items-center space-x-1 text-sm">
                        <span class="text-gray-400">"Delete?"</span>
                        <button
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_confirm();
                            }
                            class="px-2 py-1 bg-red-600 hover:bg-red-700 rounded text-white"
                        >
                            "✓"
                        </button>
                        <button
                            on:click=move |ev| {
                                ev.stop_propagation();
                                set_confirming.set(false);
                            }
                            class="px-2 py-1 bg-gray-700 hover:bg-gray-600 rounded"
                        >
                            "✗"
                        </button>
                    </span>
                }.into_view()
            } else {
                view! {
                    <button
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirming.set(true);
                        }
                        class="px-2 py-1 text-gray-400 hover:text-red-400 transition-colors"
                    >
                        "×"
                    </button>
                }.into_view()
            }
        }}
    }
}
