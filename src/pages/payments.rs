//! Payments Page
//!
//! Payment list with status filters, the approval workflow actions, and a
//! create/edit form that renders admin-defined custom fields.

use leptos::*;
use std::collections::HashMap;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::stat_card::format_amount;
use crate::components::{ConfirmButton, ListSkeleton, PaymentBadge};
use crate::models::{permissions, Approval, CustomField, CustomFieldKind, Payment, PaymentStatus};
use crate::state::global::GlobalState;

/// Payments management page
#[component]
pub fn Payments() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let payments = create_rw_signal(Vec::<Payment>::new());
    let custom_fields = create_rw_signal(Vec::<CustomField>::new());
    let (loading, set_loading) = create_signal(true);
    let (show_form, set_show_form) = create_signal(false);
    let editing = create_rw_signal(None::<Payment>);
    let (status_filter, set_status_filter) = create_signal(String::from("all"));
    let (expanded, set_expanded) = create_signal(None::<u32>);

    // Fetch payments, custom field definitions, and form reference data
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            set_loading.set(true);

            match api::fetch_payments(None).await {
                Ok(list) => payments.set(list),
                Err(e) => state.show_error(&e),
            }

            match api::fetch_custom_fields().await {
                Ok(mut fields) => {
                    fields.sort_by_key(|f| f.position);
                    custom_fields.set(fields);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch custom fields: {}", e).into());
                }
            }

            load_reference_data(&state).await;

            set_loading.set(false);
        });
    });

    let filtered = create_memo(move |_| {
        let filter = status_filter.get();
        let mut list: Vec<Payment> = payments
            .get()
            .into_iter()
            .filter(|p| match filter.as_str() {
                "all" => true,
                s => p.status.label().eq_ignore_ascii_case(s),
            })
            .collect();
        list.sort_by(|a, b| b.effective_date().cmp(&a.effective_date()));
        list
    });

    // Replace a record in the list after a server response
    let upsert = move |payment: Payment| {
        payments.update(|list| {
            if let Some(existing) = list.iter_mut().find(|p| p.id == payment.id) {
                *existing = payment;
            } else {
                list.push(payment);
            }
        });
    };

    let state_for_edit = state.clone();
    let can_edit = Signal::derive(move || state_for_edit.has_permission(permissions::PAYMENTS_EDIT));
    let state_for_approve = state.clone();
    let can_approve =
        Signal::derive(move || state_for_approve.has_permission(permissions::PAYMENTS_APPROVE));

    view! {
        <div class="space-y-8">
            // Header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Payments"</h1>
                    <p class="text-gray-400 mt-1">"Track and approve expenditures"</p>
                </div>

                {move || {
                    if can_edit.get() {
                        view! {
                            <button
                                on:click=move |_| {
                                    editing.set(None);
                                    set_show_form.set(true);
                                }
                                class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                            >
                                "+ New Payment"
                            </button>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>

            // Status filter
            <div class="flex items-center space-x-2">
                <span class="text-sm text-gray-400">"Status:"</span>
                {["all", "draft", "submitted", "approved", "rejected", "paid"].into_iter().map(|status| {
                    view! {
                        <button
                            on:click=move |_| set_status_filter.set(status.to_string())
                            class=move || {
                                let base = "px-3 py-1 rounded-lg text-sm capitalize transition-colors";
                                if status_filter.get() == status {
                                    format!("{} bg-primary-600 text-white", base)
                                } else {
                                    format!("{} bg-gray-700 text-gray-400 hover:bg-gray-600", base)
                                }
                            }
                        >
                            {status}
                        </button>
                    }
                }).collect_view()}
            </div>

            // Payment form modal
            {move || {
                if show_form.get() {
                    view! {
                        <PaymentModal
                            existing=editing.get()
                            custom_fields=custom_fields
                            on_close=move || set_show_form.set(false)
                            on_saved=upsert
                        />
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            // Payment list
            {move || {
                if loading.get() {
                    return view! { <ListSkeleton count=5 /> }.into_view();
                }

                let list = filtered.get();
                if list.is_empty() {
                    return view! {
                        <div class="text-center py-12 bg-gray-800 rounded-xl">
                            <p class="text-gray-400">"No payments match the current filter."</p>
                        </div>
                    }.into_view();
                }

                list.into_iter().map(|payment| {
                    let id = payment.id;
                    view! {
                        <PaymentRow
                            payment=payment
                            can_edit=can_edit
                            can_approve=can_approve
                            expanded=Signal::derive(move || expanded.get() == Some(id))
                            on_toggle=move || {
                                set_expanded.update(|e| {
                                    *e = if *e == Some(id) { None } else { Some(id) };
                                });
                            }
                            on_edit=move |p: Payment| {
                                editing.set(Some(p));
                                set_show_form.set(true);
                            }
                            on_updated=upsert
                            on_deleted=move |deleted: u32| {
                                payments.update(|list| list.retain(|p| p.id != deleted));
                            }
                        />
                    }
                }).collect_view()
            }}
        </div>
    }
}

/// Load shared reference data used by the payment form selects
async fn load_reference_data(state: &GlobalState) {
    if state.categories.get_untracked().is_empty() {
        if let Ok(categories) = api::fetch_categories().await {
            state.categories.set(categories);
        }
    }
    if state.services.get_untracked().is_empty() {
        if let Ok(services) = api::fetch_services().await {
            state.services.set(services);
        }
    }
    if state.contractors.get_untracked().is_empty() {
        if let Ok(contractors) = api::fetch_contractors().await {
            state.contractors.set(contractors);
        }
    }
    if state.legal_entities.get_untracked().is_empty() {
        if let Ok(entities) = api::fetch_legal_entities().await {
            state.legal_entities.set(entities);
        }
    }
    if state.departments.get_untracked().is_empty() {
        if let Ok(departments) = api::fetch_departments().await {
            state.departments.set(departments);
        }
    }
}

/// Single payment list row with actions and expandable approval history
#[component]
fn PaymentRow(
    payment: Payment,
    #[prop(into)]
    can_edit: Signal<bool>,
    #[prop(into)]
    can_approve: Signal<bool>,
    #[prop(into)]
    expanded: Signal<bool>,
    on_toggle: impl Fn() + 'static + Clone,
    on_edit: impl Fn(Payment) + 'static + Clone,
    on_updated: impl Fn(Payment) + 'static + Copy,
    on_deleted: impl Fn(u32) + 'static + Copy,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let id = payment.id;
    let status = payment.status;
    let due = chrono::DateTime::from_timestamp_millis(payment.due_date)
        .map(|dt| dt.format("%b %d, %Y").to_string())
        .unwrap_or_default();

    let state_for_action = state.clone();
    let run_action = move |action: &'static str| {
        let state = state_for_action.clone();
        spawn_local(async move {
            let result = match action {
                "submit" => api::submit_payment(id).await,
                "approve" => api::approve_payment(id, None).await,
                "reject" => api::reject_payment(id, None).await,
                "pay" => api::mark_payment_paid(id).await,
                _ => return,
            };

            match result {
                Ok(updated) => {
                    state.show_success(&format!("Payment {}", action_label(action)));
                    on_updated(updated);
                }
                Err(e) => state.show_error(&e),
            }
        });
    };

    let state_for_delete = state.clone();
    let delete = move || {
        let state = state_for_delete.clone();
        spawn_local(async move {
            match api::delete_payment(id).await {
                Ok(()) => {
                    state.show_success("Payment deleted");
                    on_deleted(id);
                }
                Err(e) => state.show_error(&e),
            }
        });
    };

    let payment_for_edit = payment.clone();
    let on_toggle_row = on_toggle.clone();

    let run_submit = run_action.clone();
    let run_approve = run_action.clone();
    let run_reject = run_action.clone();
    let run_pay = run_action;

    view! {
        <div class="bg-gray-800 rounded-xl border border-gray-700 hover:border-gray-600 transition-colors">
            <div class="p-4 flex items-center justify-between cursor-pointer" on:click=move |_| on_toggle_row()>
                <div class="flex items-center space-x-3 min-w-0">
                    <PaymentBadge status=status />
                    <div class="min-w-0">
                        <div class="font-medium truncate">{payment.description.clone()}</div>
                        <div class="text-sm text-gray-400 truncate">
                            {payment.service_name.clone().unwrap_or_default()}
                            " · "
                            {payment.contractor_name.clone().unwrap_or_default()}
                            " · due "
                            {due}
                        </div>
                    </div>
                </div>

                <div class="flex items-center space-x-3">
                    <span class="text-lg font-semibold">{format_amount(payment.amount)}</span>

                    // Workflow actions
                    {move || {
                        let mut actions: Vec<View> = Vec::new();

                        if can_edit.get() && status.can_submit() {
                            let run = run_submit.clone();
                            actions.push(view! {
                                <ActionButton label="Submit" class="bg-primary-600 hover:bg-primary-700"
                                    on_click=move || run("submit") />
                            }.into_view());
                        }
                        if can_approve.get() && status.can_decide() {
                            let run = run_approve.clone();
                            actions.push(view! {
                                <ActionButton label="Approve" class="bg-green-600 hover:bg-green-700"
                                    on_click=move || run("approve") />
                            }.into_view());
                            let run = run_reject.clone();
                            actions.push(view! {
                                <ActionButton label="Reject" class="bg-red-600 hover:bg-red-700"
                                    on_click=move || run("reject") />
                            }.into_view());
                        }
                        if can_edit.get() && status.can_mark_paid() {
                            let run = run_pay.clone();
                            actions.push(view! {
                                <ActionButton label="Mark paid" class="bg-blue-600 hover:bg-blue-700"
                                    on_click=move || run("pay") />
                            }.into_view());
                        }

                        actions.collect_view()
                    }}

                    // Edit / delete, drafts and rejected only
                    {move || {
                        if can_edit.get() && status.is_editable() {
                            let p = payment_for_edit.clone();
                            let on_edit = on_edit.clone();
                            let delete = delete.clone();
                            view! {
                                <button
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        on_edit(p.clone());
                                    }
                                    class="px-2 py-1 text-gray-400 hover:text-white transition-colors"
                                >
                                    "Edit"
                                </button>
                                <ConfirmButton on_confirm=delete />
                            }.into_view()
                        } else {
                            view! {}.into_view()
                        }
                    }}
                </div>
            </div>

            // Approval history
            {move || {
                if expanded.get() {
                    view! { <ApprovalHistory payment_id=id /> }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </div>
    }
}

fn action_label(action: &str) -> &'static str {
    match action {
        "submit" => "submitted",
        "approve" => "approved",
        "reject" => "rejected",
        "pay" => "marked as paid",
        _ => "updated",
    }
}

#[component]
fn ActionButton(
    label: &'static str,
    class: &'static str,
    on_click: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <button
            on:click=move |ev| {
                ev.stop_propagation();
                on_click();
            }
            class=format!("px-3 py-1 {} rounded text-sm font-medium transition-colors", class)
        >
            {label}
        </button>
    }
}

/// Approval log of one payment, fetched on expand
#[component]
fn ApprovalHistory(payment_id: u32) -> impl IntoView {
    let (approvals, set_approvals) = create_signal(None::<Vec<Approval>>);

    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_approvals(payment_id).await {
                Ok(log) => set_approvals.set(Some(log)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch approvals: {}", e).into());
                    set_approvals.set(Some(Vec::new()));
                }
            }
        });
    });

    view! {
        <div class="border-t border-gray-700 px-4 py-3">
            <h4 class="text-sm font-semibold text-gray-400 mb-2">"Approval history"</h4>
            {move || {
                match approvals.get() {
                    None => view! { <ListSkeleton count=2 /> }.into_view(),
                    Some(log) if log.is_empty() => view! {
                        <p class="text-gray-500 text-sm">"No workflow activity yet"</p>
                    }.into_view(),
                    Some(log) => log.into_iter().map(|entry| {
                        let when = chrono::DateTime::from_timestamp_millis(entry.created_at)
                            .map(|dt| dt.format("%b %d, %H:%M").to_string())
                            .unwrap_or_default();

                        view! {
                            <div class="flex items-center justify-between py-1 text-sm border-b border-gray-700 last:border-0">
                                <div class="flex items-center space-x-2">
                                    <span class="font-medium">
                                        {entry.actor_name.clone().unwrap_or_else(|| format!("User #{}", entry.actor_id))}
                                    </span>
                                    <span class="text-gray-400">{entry.action.label()}</span>
                                    {entry.comment.clone().map(|c| view! {
                                        <span class="text-gray-500 italic">{format!("\u{201c}{}\u{201d}", c)}</span>
                                    })}
                                </div>
                                <span class="text-gray-500">{when}</span>
                            </div>
                        }
                    }).collect_view(),
                }
            }}
        </div>
    }
}

/// Create / edit payment modal
#[component]
fn PaymentModal(
    existing: Option<Payment>,
    custom_fields: RwSignal<Vec<CustomField>>,
    on_close: impl Fn() + 'static + Clone,
    on_saved: impl Fn(Payment) + 'static + Copy,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let editing_id = existing.as_ref().map(|p| p.id);
    let title = if editing_id.is_some() { "Edit Payment" } else { "Create Payment" };

    let (description, set_description) =
        create_signal(existing.as_ref().map(|p| p.description.clone()).unwrap_or_default());
    let (amount, set_amount) = create_signal(
        existing.as_ref().map(|p| p.amount.to_string()).unwrap_or_default(),
    );
    let (due_date, set_due_date) = create_signal(
        existing
            .as_ref()
            .and_then(|p| chrono::DateTime::from_timestamp_millis(p.due_date))
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
    );
    let (category_id, set_category_id) =
        create_signal(existing.as_ref().map(|p| p.category_id).unwrap_or(0));
    let (service_id, set_service_id) =
        create_signal(existing.as_ref().map(|p| p.service_id).unwrap_or(0));
    let (contractor_id, set_contractor_id) =
        create_signal(existing.as_ref().map(|p| p.contractor_id).unwrap_or(0));
    let (legal_entity_id, set_legal_entity_id) =
        create_signal(existing.as_ref().map(|p| p.legal_entity_id).unwrap_or(0));
    let (department_id, set_department_id) =
        create_signal(existing.as_ref().map(|p| p.department_id).unwrap_or(0));
    let custom_values = create_rw_signal(
        existing.as_ref().map(|p| p.custom_values.clone()).unwrap_or_default(),
    );
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let on_close_for_x = on_close.clone();
    let on_close_for_cancel = on_close;

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let state = state_for_submit.clone();
        let desc = description.get();
        let parsed_amount: f64 = match amount.get().parse() {
            Ok(v) => v,
            Err(_) => {
                state.show_error("Amount must be a number");
                return;
            }
        };

        if desc.is_empty() {
            state.show_error("Description is required");
            return;
        }
        if parsed_amount <= 0.0 {
            state.show_error("Amount must be positive");
            return;
        }

        let due = match chrono::NaiveDate::parse_from_str(&due_date.get(), "%Y-%m-%d") {
            Ok(date) => date
                .and_hms_opt(0, 0, 0)
                .map(|dt| dt.and_utc().timestamp_millis())
                .unwrap_or(0),
            Err(_) => {
                state.show_error("Due date is required");
                return;
            }
        };

        // Required custom fields must have a value
        for field in custom_fields.get() {
            if field.required && !custom_values.get().contains_key(&field.name) {
                state.show_error(&format!("{} is required", field.label));
                return;
            }
        }

        let payload = api::PaymentPayload {
            amount: parsed_amount,
            description: desc,
            due_date: due,
            category_id: category_id.get(),
            service_id: service_id.get(),
            contractor_id: contractor_id.get(),
            legal_entity_id: legal_entity_id.get(),
            department_id: department_id.get(),
            custom_values: custom_values.get(),
        };

        set_submitting.set(true);

        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update_payment(id, &payload).await,
                None => api::create_payment(&payload).await,
            };

            match result {
                Ok(payment) => {
                    state.show_success(if editing_id.is_some() {
                        "Payment updated"
                    } else {
                        "Payment created"
                    });
                    on_saved(payment);
                    on_close_inner();
                }
                Err(e) => state.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    let state_for_view = state;

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50 overflow-y-auto">
            <div class="bg-gray-800 rounded-xl p-6 w-full max-w-lg mx-4 my-8">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-xl font-semibold">{title}</h2>
                    <button
                        on:click=move |_| on_close_for_x()
                        class="text-gray-400 hover:text-white"
                    >
                        "✕"
                    </button>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    // Description
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Description"</label>
                        <input
                            type="text"
                            placeholder="e.g., Annual SaaS renewal"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Amount and due date
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
                            <label class="block text-sm text-gray-400 mb-2">"Due date"</label>
                            <input
                                type="date"
                                prop:value=move || due_date.get()
                                on:input=move |ev| set_due_date.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                        </div>
                    </div>

                    // Associations
                    <div class="grid grid-cols-2 gap-4">
                        <ReferenceSelect
                            label="Category"
                            selected=category_id
                            on_change=set_category_id
                            options=Signal::derive({
                                let state = state_for_view.clone();
                                move || state.categories.get().into_iter().map(|c| (c.id, c.name)).collect()
                            })
                        />
                        <ReferenceSelect
                            label="Service"
                            selected=service_id
                            on_change=set_service_id
                            options=Signal::derive({
                                let state = state_for_view.clone();
                                move || state.services.get().into_iter().map(|s| (s.id, s.name)).collect()
                            })
                        />
                        <ReferenceSelect
                            label="Contractor"
                            selected=contractor_id
                            on_change=set_contractor_id
                            options=Signal::derive({
                                let state = state_for_view.clone();
                                move || state.contractors.get().into_iter().map(|c| (c.id, c.name)).collect()
                            })
                        />
                        <ReferenceSelect
                            label="Legal entity"
                            selected=legal_entity_id
                            on_change=set_legal_entity_id
                            options=Signal::derive({
                                let state = state_for_view.clone();
                                move || state.legal_entities.get().into_iter().map(|e| (e.id, e.name)).collect()
                            })
                        />
                        <ReferenceSelect
                            label="Department"
                            selected=department_id
                            on_change=set_department_id
                            options=Signal::derive({
                                let state = state_for_view.clone();
                                move || state.departments.get().into_iter().map(|d| (d.id, d.name)).collect()
                            })
                        />
                    </div>

                    // Admin-defined custom fields
                    {move || {
                        custom_fields.get().into_iter().map(|field| {
                            view! { <CustomFieldInput field=field values=custom_values /> }
                        }).collect_view()
                    }}

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
                            {move || if submitting.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Select fed from a reference-data cache
#[component]
fn ReferenceSelect(
    label: &'static str,
    selected: ReadSignal<u32>,
    on_change: WriteSignal<u32>,
    #[prop(into)]
    options: Signal<Vec<(u32, String)>>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <select
                on:change=move |ev| {
                    if let Ok(id) = event_target_value(&ev).parse() {
                        on_change.set(id);
                    }
                }
                prop:value=move || selected.get().to_string()
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            >
                <option value="0">"— select —"</option>
                {move || {
                    options.get().into_iter().map(|(id, name)| {
                        view! { <option value=id.to_string()>{name}</option> }
                    }).collect_view()
                }}
            </select>
        </div>
    }
}

/// One admin-defined custom field input, rendered by kind
#[component]
fn CustomFieldInput(
    field: CustomField,
    values: RwSignal<HashMap<String, serde_json::Value>>,
) -> impl IntoView {
    let name = field.name.clone();
    let label = if field.required {
        format!("{} *", field.label)
    } else {
        field.label.clone()
    };

    let current_string = {
        let name = name.clone();
        move || {
            values
                .get()
                .get(&name)
                .and_then(|v| v.as_str().map(|s| s.to_string()))
                .unwrap_or_default()
        }
    };

    let set_value = move |name: String, value: serde_json::Value| {
        values.update(|map| {
            map.insert(name, value);
        });
    };

    match field.kind {
        CustomFieldKind::Text => {
            let name = name.clone();
            view! {
                <div>
                    <label class="block text-sm text-gray-400 mb-2">{label}</label>
                    <input
                        type="text"
                        prop:value=current_string
                        on:input=move |ev| {
                            set_value(name.clone(), serde_json::Value::String(event_target_value(&ev)));
                        }
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
            }
            .into_view()
        }
        CustomFieldKind::Select { options } => {
            let name = name.clone();
            view! {
                <div>
                    <label class="block text-sm text-gray-400 mb-2">{label}</label>
                    <select
                        on:change=move |ev| {
                            set_value(name.clone(), serde_json::Value::String(event_target_value(&ev)));
                        }
                        prop:value=current_string
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        <option value="">"— select —"</option>
                        {options.into_iter().map(|opt| {
                            view! { <option value=opt.clone()>{opt}</option> }
                        }).collect_view()}
                    </select>
                </div>
            }
            .into_view()
        }
        CustomFieldKind::Toggle => {
            let name_for_check = name.clone();
            let checked = move || {
                values
                    .get()
                    .get(&name_for_check)
                    .and_then(|v| v.as_bool())
                    .unwrap_or(false)
            };
            view! {
                <div class="flex items-center justify-between p-3 bg-gray-700 rounded-lg">
                    <span class="text-sm text-gray-300">{label}</span>
                    <input
                        type="checkbox"
                        prop:checked=checked
                        on:change=move |ev| {
                            set_value(name.clone(), serde_json::Value::Bool(event_target_checked(&ev)));
                        }
                        class="w-5 h-5"
                    />
                </div>
            }
            .into_view()
        }
        CustomFieldKind::File => {
            view! {
                <div>
                    <label class="block text-sm text-gray-400 mb-2">{label}</label>
                    <input
                        type="file"
                        on:change=move |ev| {
                            let input: web_sys::HtmlInputElement = ev
                                .target()
                                .unwrap()
                                .dyn_into()
                                .unwrap();
                            if let Some(file) = input.files().and_then(|f| f.get(0)) {
                                set_value(name.clone(), serde_json::Value::String(file.name()));
                            }
                        }
                        class="w-full text-sm text-gray-300"
                    />
                    {
                        let current = current_string.clone();
                        move || {
                            let v = current();
                            if v.is_empty() {
                                view! {}.into_view()
                            } else {
                                view! {
                                    <p class="text-xs text-gray-500 mt-1">{format!("Attached: {}", v)}</p>
                                }.into_view()
                            }
                        }
                    }
                </div>
            }
            .into_view()
        }
    }
}
