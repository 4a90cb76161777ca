//! Services Page
//!
//! Manage billable IT offerings and their approver chains.

use leptos::*;

use crate::api;
use crate::components::stat_card::format_amount;
use crate::components::{ConfirmButton, ListSkeleton};
use crate::models::{permissions, Service, User};
use crate::state::global::GlobalState;

/// Services management page
#[component]
pub fn Services() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (loading, set_loading) = create_signal(true);
    let (show_form, set_show_form) = create_signal(false);
    let editing = create_rw_signal(None::<Service>);

    let services = state.services;

    // Fetch services and the categories their badges come from
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            set_loading.set(true);

            match api::fetch_services().await {
                Ok(list) => state.services.set(list),
                Err(e) => state.show_error(&e),
            }

            if state.categories.get_untracked().is_empty() {
                match api::fetch_categories().await {
                    Ok(categories) => state.categories.set(categories),
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to fetch categories: {}", e).into());
                    }
                }
            }

            set_loading.set(false);
        });
    });

    let state_for_edit = state.clone();
    let can_edit = Signal::derive(move || state_for_edit.has_permission(permissions::DIRECTORY_EDIT));

    let state_for_delete = state.clone();
    let delete_service = move |id: u32| {
        let state = state_for_delete.clone();
        spawn_local(async move {
            match api::delete_service(id).await {
                Ok(()) => {
                    state.services.update(|list| list.retain(|s| s.id != id));
                    state.show_success("Service deleted");
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
                    <h1 class="text-3xl font-bold">"Services"</h1>
                    <p class="text-gray-400 mt-1">"Billable IT offerings and approver chains"</p>
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
                                "+ New Service"
                            </button>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>

            // Service form modal
            {move || {
                if show_form.get() {
                    view! {
                        <ServiceModal
                            existing=editing.get()
                            on_close=move || set_show_form.set(false)
                        />
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            // Services list
            {move || {
                if loading.get() {
                    return view! { <ListSkeleton count=4 /> }.into_view();
                }

                let list = services.get();
                if list.is_empty() {
                    return view! {
                        <div class="text-center py-12 bg-gray-800 rounded-xl">
                            <p class="text-gray-400">"No services yet. Create your first one!"</p>
                        </div>
                    }.into_view();
                }

                view! {
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                        {list.into_iter().map(|service| {
                            let id = service.id;
                            let service_for_edit = service.clone();
                            let delete_service = delete_service.clone();
                            view! {
                                <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 hover:border-gray-600 transition-colors">
                                    <div class="flex items-start justify-between">
                                        <div>
                                            <div class="flex items-center space-x-2">
                                                <h3 class="font-semibold">{service.name.clone()}</h3>
                                                {if !service.active {
                                                    Some(view! {
                                                        <span class="bg-gray-600 text-xs px-2 py-0.5 rounded-full text-white">
                                                            "Inactive"
                                                        </span>
                                                    })
                                                } else {
                                                    None
                                                }}
                                            </div>
                                            <p class="text-gray-400 text-sm mt-1">
                                                {service.category_name.clone().unwrap_or_default()}
                                                {service.contractor_name.clone().map(|c| format!(" · {}", c)).unwrap_or_default()}
                                            </p>
                                        </div>

                                        {move || {
                                            if can_edit.get() {
                                                let p = service_for_edit.clone();
                                                let delete = delete_service.clone();
                                                view! {
                                                    <div class="flex items-center space-x-1">
                                                        <button
                                                            on:click=move |_| {
                                                                editing.set(Some(p.clone()));
                                                                set_show_form.set(true);
                                                            }
                                                            class="px-2 py-1 text-gray-400 hover:text-white transition-colors text-sm"
                                                        >
                                                            "Edit"
                                                        </button>
                                                        <ConfirmButton on_confirm=move || delete(id) />
                                                    </div>
                                                }.into_view()
                                            } else {
                                                view! {}.into_view()
                                            }
                                        }}
                                    </div>

                                    <div class="flex items-center space-x-4 mt-4 text-sm text-gray-400">
                                        {service.monthly_cost.map(|cost| view! {
                                            <span>"Monthly: "{format_amount(cost)}</span>
                                        })}
                                        <span>{format!("{} approver(s)", service.approver_ids.len())}</span>
                                    </div>

                                    {service.description.clone().map(|d| view! {
                                        <p class="text-gray-500 text-sm mt-2">{d}</p>
                                    })}
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_view()
            }}
        </div>
    }
}

/// Create / edit service modal
#[component]
fn ServiceModal(
    existing: Option<Service>,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let editing_id = existing.as_ref().map(|s| s.id);
    let title = if editing_id.is_some() { "Edit Service" } else { "Create Service" };

    let (name, set_name) = create_signal(existing.as_ref().map(|s| s.name.clone()).unwrap_or_default());
    let (category_id, set_category_id) =
        create_signal(existing.as_ref().map(|s| s.category_id).unwrap_or(0));
    let (contractor_id, set_contractor_id) =
        create_signal(existing.as_ref().and_then(|s| s.contractor_id).unwrap_or(0));
    let (monthly_cost, set_monthly_cost) = create_signal(
        existing
            .as_ref()
            .and_then(|s| s.monthly_cost)
            .map(|c| c.to_string())
            .unwrap_or_default(),
    );
    let (active, set_active) = create_signal(existing.as_ref().map(|s| s.active).unwrap_or(true));
    let (description, set_description) = create_signal(
        existing
            .as_ref()
            .and_then(|s| s.description.clone())
            .unwrap_or_default(),
    );
    let approvers = create_rw_signal(existing.as_ref().map(|s| s.approver_ids.clone()).unwrap_or_default());
    let (submitting, set_submitting) = create_signal(false);

    // Users feed the approver picker
    let users = create_rw_signal(Vec::<User>::new());
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(list) => users.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch users: {}", e).into());
                }
            }
        });
    });

    // Contractors feed the vendor select
    let state_for_refs = state.clone();
    create_effect(move |_| {
        let state = state_for_refs.clone();
        spawn_local(async move {
            if state.contractors.get_untracked().is_empty() {
                if let Ok(contractors) = api::fetch_contractors().await {
                    state.contractors.set(contractors);
                }
            }
        });
    });

    let toggle_approver = move |user_id: u32| {
        approvers.update(|ids| {
            if ids.contains(&user_id) {
                ids.retain(|id| *id != user_id);
            } else {
                ids.push(user_id);
            }
        });
    };

    let on_close_for_submit = on_close.clone();
    let on_close_for_x = on_close.clone();
    let on_close_for_cancel = on_close;

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let state = state_for_submit.clone();
        let n = name.get();

        if n.is_empty() {
            state.show_error("Name is required");
            return;
        }
        if category_id.get() == 0 {
            state.show_error("Category is required");
            return;
        }

        let cost = monthly_cost.get();
        let parsed_cost = if cost.is_empty() {
            None
        } else {
            match cost.parse::<f64>() {
                Ok(v) => Some(v),
                Err(_) => {
                    state.show_error("Monthly cost must be a number");
                    return;
                }
            }
        };

        let contractor = contractor_id.get();
        let desc = description.get();
        let payload = api::ServicePayload {
            name: n,
            category_id: category_id.get(),
            contractor_id: if contractor == 0 { None } else { Some(contractor) },
            monthly_cost: parsed_cost,
            approver_ids: approvers.get(),
            active: active.get(),
            description: if desc.is_empty() { None } else { Some(desc) },
        };

        set_submitting.set(true);

        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update_service(id, &payload).await,
                None => api::create_service(&payload).await,
            };

            match result {
                Ok(service) => {
                    state.services.update(|list| {
                        if let Some(existing) = list.iter_mut().find(|s| s.id == service.id) {
                            *existing = service;
                        } else {
                            list.push(service);
                        }
                    });
                    state.show_success(if editing_id.is_some() {
                        "Service updated"
                    } else {
                        "Service created"
                    });
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
                    // Name
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Name"</label>
                        <input
                            type="text"
                            placeholder="e.g., Cloud hosting"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Category
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Category"</label>
                        <select
                            on:change=move |ev| {
                                if let Ok(id) = event_target_value(&ev).parse() {
                                    set_category_id.set(id);
                                }
                            }
                            prop:value=move || category_id.get().to_string()
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        >
                            <option value="0">"— select —"</option>
                            {
                                let state = state_for_view.clone();
                                move || {
                                    state.categories.get().into_iter().map(|c| {
                                        view! { <option value=c.id.to_string()>{c.name}</option> }
                                    }).collect_view()
                                }
                            }
                        </select>
                    </div>

                    // Contractor
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Contractor"</label>
                        <select
                            on:change=move |ev| {
                                if let Ok(id) = event_target_value(&ev).parse() {
                                    set_contractor_id.set(id);
                                }
                            }
                            prop:value=move || contractor_id.get().to_string()
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        >
                            <option value="0">"— none —"</option>
                            {
                                let state = state_for_view.clone();
                                move || {
                                    state.contractors.get().into_iter().map(|c| {
                                        view! { <option value=c.id.to_string()>{c.name}</option> }
                                    }).collect_view()
                                }
                            }
                        </select>
                    </div>

                    // Monthly cost
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Monthly cost (optional)"</label>
                        <input
                            type="number"
                            step="0.01"
                            min="0"
                            prop:value=move || monthly_cost.get()
                            on:input=move |ev| set_monthly_cost.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Approver chain
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Approvers"</label>
                        <div class="flex flex-wrap gap-2">
                            {move || {
                                users.get().into_iter().map(|user| {
                                    let user_id = user.id;
                                    view! {
                                        <button
                                            type="button"
                                            on:click=move |_| toggle_approver(user_id)
                                            class=move || {
                                                let base = "px-3 py-1 rounded-lg text-sm transition-colors";
                                                if approvers.get().contains(&user_id) {
                                                    format!("{} bg-primary-600 text-white", base)
                                                } else {
                                                    format!("{} bg-gray-700 text-gray-400 hover:bg-gray-600", base)
                                                }
                                            }
                                        >
                                            {user.name}
                                        </button>
                                    }
                                }).collect_view()
                            }}
                        </div>
                    </div>

                    // Active toggle
                    <div class="flex items-center justify-between p-3 bg-gray-700 rounded-lg">
                        <span class="text-sm text-gray-300">"Active"</span>
                        <input
                            type="checkbox"
                            prop:checked=move || active.get()
                            on:change=move |ev| set_active.set(event_target_checked(&ev))
                            class="w-5 h-5"
                        />
                    </div>

                    // Description
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Description (optional)"</label>
                        <textarea
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 h-20
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
                            {move || if submitting.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
