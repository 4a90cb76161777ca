//! Savings Page
//!
//! Recorded cost reductions attributed to a service and department.

use leptos::*;

use crate::api;
use crate::components::stat_card::format_amount;
use crate::components::{ConfirmButton, ListSkeleton};
use crate::models::{permissions, Saving};
use crate::state::global::GlobalState;

/// Savings page component
#[component]
pub fn Savings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let savings = create_rw_signal(Vec::<Saving>::new());
    let (loading, set_loading) = create_signal(true);
    let (show_form, set_show_form) = create_signal(false);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            set_loading.set(true);

            match api::fetch_savings().await {
                Ok(list) => savings.set(list),
                Err(e) => state.show_error(&e),
            }

            // Services and departments feed the form selects
            if state.services.get_untracked().is_empty() {
                if let Ok(services) = api::fetch_services().await {
                    state.services.set(services);
                }
            }
            if state.departments.get_untracked().is_empty() {
                if let Ok(departments) = api::fetch_departments().await {
                    state.departments.set(departments);
                }
            }

            set_loading.set(false);
        });
    });

    let total = create_memo(move |_| savings.get().iter().map(|s| s.amount).sum::<f64>());

    let state_for_perm = state.clone();
    let can_edit = Signal::derive(move || state_for_perm.has_permission(permissions::SAVINGS_EDIT));

    let state_for_delete = state.clone();
    let delete = move |id: u32| {
        let state = state_for_delete.clone();
        spawn_local(async move {
            match api::delete_saving(id).await {
                Ok(()) => {
                    savings.update(|list| list.retain(|s| s.id != id));
                    state.show_success("Saving deleted");
                }
                Err(e) => state.show_error(&e),
            }
        });
    };

    view! {
        <div class="space-y-8">
            // Header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Savings"</h1>
                    <p class="text-gray-400 mt-1">"Recorded cost reductions"</p>
                </div>

                {move || {
                    if can_edit.get() {
                        view! {
                            <button
                                on:click=move |_| set_show_form.set(true)
                                class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                            >
                                "+ Record Saving"
                            </button>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>

            // Running total
            <section class="bg-gray-800 rounded-xl p-6">
                <span class="text-gray-400 text-sm">"Total recorded savings"</span>
                <div class="text-4xl font-bold mt-2 text-green-400">
                    {move || format_amount(total.get())}
                </div>
            </section>

            // Saving form modal
            {move || {
                if show_form.get() {
                    view! {
                        <SavingModal
                            on_close=move || set_show_form.set(false)
                            on_saved=move |saving: Saving| savings.update(|list| list.push(saving))
                        />
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            // Savings list
            {move || {
                if loading.get() {
                    return view! { <ListSkeleton count=4 /> }.into_view();
                }

                let mut list = savings.get();
                if list.is_empty() {
                    return view! {
                        <div class="text-center py-12 bg-gray-800 rounded-xl">
                            <p class="text-gray-400">"No savings recorded yet."</p>
                        </div>
                    }.into_view();
                }
                list.sort_by(|a, b| b.recorded_on.cmp(&a.recorded_on));

                list.into_iter().map(|saving| {
                    let id = saving.id;
                    let date = chrono::DateTime::from_timestamp_millis(saving.recorded_on)
                        .map(|dt| dt.format("%b %d, %Y").to_string())
                        .unwrap_or_default();
                    let delete = delete.clone();

                    view! {
                        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 flex items-center justify-between">
                            <div class="min-w-0">
                                <div class="font-medium truncate">{saving.reason.clone()}</div>
                                <div class="text-sm text-gray-400 truncate">
                                    {saving.service_name.clone().unwrap_or_default()}
                                    " · "
                                    {saving.department_name.clone().unwrap_or_default()}
                                    " · "
                                    {date}
                                </div>
                            </div>

                            <div class="flex items-center space-x-3">
                                <span class="text-lg font-semibold text-green-400">
                                    {format_amount(saving.amount)}
                                </span>
                                {move || {
                                    if can_edit.get() {
                                        let delete = delete.clone();
                                        view! { <ConfirmButton on_confirm=move || delete(id) /> }.into_view()
                                    } else {
                                        view! {}.into_view()
                                    }
                                }}
                            </div>
                        </div>
                    }
                }).collect_view()
            }}
        </div>
    }
}

/// Record saving modal
#[component]
fn SavingModal(
    on_close: impl Fn() + 'static + Clone,
    on_saved: impl Fn(Saving) + 'static + Copy,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (service_id, set_service_id) = create_signal(0u32);
    let (department_id, set_department_id) = create_signal(0u32);
    let (amount, set_amount) = create_signal(String::new());
    let (reason, set_reason) = create_signal(String::new());
    let (recorded_on, set_recorded_on) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let on_close_for_x = on_close.clone();
    let on_close_for_cancel = on_close;

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let state = state_for_submit.clone();

        let parsed_amount: f64 = match amount.get().parse() {
            Ok(v) => v,
            Err(_) => {
                state.show_error("Amount must be a number");
                return;
            }
        };
        if parsed_amount <= 0.0 {
            state.show_error("Amount must be positive");
            return;
        }
        if reason.get().is_empty() {
            state.show_error("Reason is required");
            return;
        }
        if service_id.get() == 0 || department_id.get() == 0 {
            state.show_error("Service and department are required");
            return;
        }

        let recorded = match chrono::NaiveDate::parse_from_str(&recorded_on.get(), "%Y-%m-%d") {
            Ok(date) => date
                .and_hms_opt(0, 0, 0)
                .map(|dt| dt.and_utc().timestamp_millis())
                .unwrap_or(0),
            Err(_) => {
                state.show_error("Date is required");
                return;
            }
        };

        let payload = api::SavingPayload {
            service_id: service_id.get(),
            department_id: department_id.get(),
            amount: parsed_amount,
            reason: reason.get(),
            recorded_on: recorded,
        };

        set_submitting.set(true);

        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            match api::create_saving(&payload).await {
                Ok(saving) => {
                    state.show_success("Saving recorded");
                    on_saved(saving);
                    on_close_inner();
                }
                Err(e) => state.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    let state_for_view = state;

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-xl font-semibold">"Record Saving"</h2>
                    <button
                        on:click=move |_| on_close_for_x()
                        class="text-gray-400 hover:text-white"
                    >
                        "✕"
                    </button>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    // Service
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Service"</label>
                        <select
                            on:change=move |ev| {
                                if let Ok(id) = event_target_value(&ev).parse() {
                                    set_service_id.set(id);
                                }
                            }
                            prop:value=move || service_id.get().to_string()
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        >
                            <option value="0">"— select —"</option>
                            {
                                let state = state_for_view.clone();
                                move || {
                                    state.services.get().into_iter().map(|s| {
                                        view! { <option value=s.id.to_string()>{s.name}</option> }
                                    }).collect_view()
                                }
                            }
                        </select>
                    </div>

                    // Department
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Department"</label>
                        <select
                            on:change=move |ev| {
                                if let Ok(id) = event_target_value(&ev).parse() {
                                    set_department_id.set(id);
                                }
                            }
                            prop:value=move || department_id.get().to_string()
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        >
                            <option value="0">"— select —"</option>
                            {
                                let state = state_for_view.clone();
                                move || {
                                    state.departments.get().into_iter().map(|d| {
                                        view! { <option value=d.id.to_string()>{d.name}</option> }
                                    }).collect_view()
                                }
                            }
                        </select>
                    </div>

                    // Amount and date
                    <div class="grid grid-cols-2 gap-4">
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Amount"</label>
                            <input
                                type="number"
                                step="0.01"
                                min="0"
                                prop:value=move || amount.get()
                                on:input=move |ev| set_amount.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                        </div>
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Effective date"</label>
                            <input
                                type="date"
                                prop:value=move || recorded_on.get()
                                on:input=move |ev| set_recorded_on.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                        </div>
                    </div>

                    // Reason
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Reason"</label>
                        <input
                            type="text"
                            placeholder="e.g., Renegotiated contract"
                            prop:value=move || reason.get()
                            on:input=move |ev| set_reason.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Buttons
                    <div class="flex space-x-3 pt-4">
                        <button
                            type="button"
                            on:click=move |_| on_close_for_cancel()
                            class="flex-1 px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            disabled=move || submitting.get()
                            class="flex-1 px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if submitting.get() { "Saving..." } else { "Record" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
