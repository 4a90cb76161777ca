//! Admin Page
//!
//! Users, roles with permission checkboxes, and custom field definitions.
//! Everything here is gated by the `admin.manage` permission.

use leptos::*;

use crate::api;
use crate::components::{ConfirmButton, ListSkeleton};
use crate::models::{permissions, CustomField, CustomFieldKind, Role, User};
use crate::state::global::GlobalState;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Users,
    Roles,
    CustomFields,
}

impl AdminTab {
    fn label(&self) -> &'static str {
        match self {
            AdminTab::Users => "Users",
            AdminTab::Roles => "Roles",
            AdminTab::CustomFields => "Custom Fields",
        }
    }
}

/// Admin page component
#[component]
pub fn Admin() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (tab, set_tab) = create_signal(AdminTab::Users);

    let state_for_gate = state.clone();
    let allowed = move || state_for_gate.has_permission(permissions::ADMIN_MANAGE);

    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Admin"</h1>
                <p class="text-gray-400 mt-1">"Users, roles, and custom fields"</p>
            </div>

            {move || {
                if !allowed() {
                    return view! {
                        <div class="text-center py-12 bg-gray-800 rounded-xl">
                            <p class="text-gray-400">"You don't have permission to manage the console."</p>
                        </div>
                    }.into_view();
                }

                view! {
                    // Tab bar
                    <div class="flex space-x-2 border-b border-gray-700">
                        {[AdminTab::Users, AdminTab::Roles, AdminTab::CustomFields].into_iter().map(|t| {
                            view! {
                                <button
                                    on:click=move |_| set_tab.set(t)
                                    class=move || {
                                        let base = "px-4 py-2 text-sm font-medium transition-colors border-b-2 -mb-px";
                                        if tab.get() == t {
                                            format!("{} border-primary-500 text-white", base)
                                        } else {
                                            format!("{} border-transparent text-gray-400 hover:text-white", base)
                                        }
                                    }
                                >
                                    {t.label()}
                                </button>
                            }
                        }).collect_view()}
                    </div>

                    {move || match tab.get() {
                        AdminTab::Users => view! { <UsersTab /> }.into_view(),
                        AdminTab::Roles => view! { <RolesTab /> }.into_view(),
                        AdminTab::CustomFields => view! { <CustomFieldsTab /> }.into_view(),
                    }}
                }.into_view()
            }}
        </div>
    }
}

// ============ Users ============

#[component]
fn UsersTab() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let users = create_rw_signal(Vec::<User>::new());
    let roles = create_rw_signal(Vec::<Role>::new());
    let (loading, set_loading) = create_signal(true);
    let (show_form, set_show_form) = create_signal(false);
    let editing = create_rw_signal(None::<User>);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            set_loading.set(true);

            match api::fetch_users().await {
                Ok(list) => users.set(list),
                Err(e) => state.show_error(&e),
            }
            match api::fetch_roles().await {
                Ok(list) => roles.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch roles: {}", e).into());
                }
            }

            set_loading.set(false);
        });
    });

    let state_for_delete = state.clone();
    let delete = move |id: u32| {
        let state = state_for_delete.clone();
        spawn_local(async move {
            match api::delete_user(id).await {
                Ok(()) => {
                    users.update(|list| list.retain(|u| u.id != id));
                    state.show_success("User deleted");
                }
                Err(e) => state.show_error(&e),
            }
        });
    };

    view! {
        <div class="space-y-4">
            <div class="flex justify-end">
                <button
                    on:click=move |_| {
                        editing.set(None);
                        set_show_form.set(true);
                    }
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "+ Add User"
                </button>
            </div>

            {move || {
                if show_form.get() {
                    view! {
                        <UserModal
                            existing=editing.get()
                            roles=roles
                            on_close=move || set_show_form.set(false)
                            on_saved=move |user: User| {
                                users.update(|list| {
                                    if let Some(existing) = list.iter_mut().find(|u| u.id == user.id) {
                                        *existing = user;
                                    } else {
                                        list.push(user);
                                    }
                                });
                            }
                        />
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            {move || {
                if loading.get() {
                    return view! { <ListSkeleton count=4 /> }.into_view();
                }

                let list = users.get();
                if list.is_empty() {
                    return view! {
                        <div class="text-center py-12 bg-gray-800 rounded-xl">
                            <p class="text-gray-400">"No users yet."</p>
                        </div>
                    }.into_view();
                }

                list.into_iter().map(|user| {
                    let id = user.id;
                    let for_edit = user.clone();
                    let delete = delete.clone();
                    view! {
                        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 flex items-center justify-between">
                            <div>
                                <div class="flex items-center space-x-2">
                                    <span class="font-semibold">{user.name.clone()}</span>
                                    {if !user.active {
                                        Some(view! {
                                            <span class="bg-gray-600 text-xs px-2 py-0.5 rounded-full text-white">
                                                "Inactive"
                                            </span>
                                        })
                                    } else {
                                        None
                                    }}
                                </div>
                                <p class="text-sm text-gray-400">
                                    {user.email.clone()}
                                    " · "
                                    {user.role_name.clone().unwrap_or_else(|| format!("Role #{}", user.role_id))}
                                </p>
                            </div>

                            <div class="flex items-center space-x-1">
                                <button
                                    on:click=move |_| {
                                        editing.set(Some(for_edit.clone()));
                                        set_show_form.set(true);
                                    }
                                    class="px-2 py-1 text-gray-400 hover:text-white text-sm transition-colors"
                                >
                                    "Edit"
                                </button>
                                <ConfirmButton on_confirm=move || delete(id) />
                            </div>
                        </div>
                    }
                }).collect_view()
            }}
        </div>
    }
}

#[component]
fn UserModal(
    existing: Option<User>,
    roles: RwSignal<Vec<Role>>,
    on_close: impl Fn() + 'static + Clone,
    on_saved: impl Fn(User) + 'static + Copy,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let editing_id = existing.as_ref().map(|u| u.id);
    let title = if editing_id.is_some() { "Edit User" } else { "Add User" };

    let (name, set_name) = create_signal(existing.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let (email, set_email) = create_signal(existing.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let (role_id, set_role_id) = create_signal(existing.as_ref().map(|u| u.role_id).unwrap_or(0));
    let (active, set_active) = create_signal(existing.as_ref().map(|u| u.active).unwrap_or(true));
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let on_close_for_x = on_close.clone();
    let on_close_for_cancel = on_close;

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let state = state_for_submit.clone();
        let n = name.get();
        let e = email.get();

        if n.is_empty() || e.is_empty() {
            state.show_error("Name and email are required");
            return;
        }
        if role_id.get() == 0 {
            state.show_error("Role is required");
            return;
        }

        let payload = api::UserPayload {
            name: n,
            email: e,
            role_id: role_id.get(),
            active: active.get(),
        };

        set_submitting.set(true);

        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update_user(id, &payload).await,
                None => api::create_user(&payload).await,
            };

            match result {
                Ok(user) => {
                    state.show_success("User saved");
                    on_saved(user);
                    on_close_inner();
                }
                Err(e) => state.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4">
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
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Email
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Role
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Role"</label>
                        <select
                            on:change=move |ev| {
                                if let Ok(id) = event_target_value(&ev).parse() {
                                    set_role_id.set(id);
                                }
                            }
                            prop:value=move || role_id.get().to_string()
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        >
                            <option value="0">"— select —"</option>
                            {move || {
                                roles.get().into_iter().map(|r| {
                                    view! { <option value=r.id.to_string()>{r.name}</option> }
                                }).collect_view()
                            }}
                        </select>
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

// ============ Roles ============

#[component]
fn RolesTab() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let roles = create_rw_signal(Vec::<Role>::new());
    let (loading, set_loading) = create_signal(true);
    let (show_form, set_show_form) = create_signal(false);
    let editing = create_rw_signal(None::<Role>);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            set_loading.set(true);
            match api::fetch_roles().await {
                Ok(list) => roles.set(list),
                Err(e) => state.show_error(&e),
            }
            set_loading.set(false);
        });
    });

    let state_for_delete = state.clone();
    let delete = move |id: u32| {
        let state = state_for_delete.clone();
        spawn_local(async move {
            match api::delete_role(id).await {
                Ok(()) => {
                    roles.update(|list| list.retain(|r| r.id != id));
                    state.show_success("Role deleted");
                }
                Err(e) => state.show_error(&e),
            }
        });
    };

    view! {
        <div class="space-y-4">
            <div class="flex justify-end">
                <button
                    on:click=move |_| {
                        editing.set(None);
                        set_show_form.set(true);
                    }
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "+ Add Role"
                </button>
            </div>

            {move || {
                if show_form.get() {
                    view! {
                        <RoleModal
                            existing=editing.get()
                            on_close=move || set_show_form.set(false)
                            on_saved=move |role: Role| {
                                roles.update(|list| {
                                    if let Some(existing) = list.iter_mut().find(|r| r.id == role.id) {
                                        *existing = role;
                                    } else {
                                        list.push(role);
                                    }
                                });
                            }
                        />
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            {move || {
                if loading.get() {
                    return view! { <ListSkeleton count=3 /> }.into_view();
                }

                let list = roles.get();
                if list.is_empty() {
                    return view! {
                        <div class="text-center py-12 bg-gray-800 rounded-xl">
                            <p class="text-gray-400">"No roles yet."</p>
                        </div>
                    }.into_view();
                }

                list.into_iter().map(|role| {
                    let id = role.id;
                    let for_edit = role.clone();
                    let delete = delete.clone();
                    view! {
                        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 flex items-center justify-between">
                            <div>
                                <span class="font-semibold">{role.name.clone()}</span>
                                <div class="flex flex-wrap gap-1 mt-2">
                                    {role.permissions.iter().map(|p| {
                                        view! {
                                            <span class="bg-gray-700 text-xs px-2 py-0.5 rounded text-gray-300">
                                                {p.clone()}
                                            </span>
                                        }
                                    }).collect_view()}
                                </div>
                            </div>

                            <div class="flex items-center space-x-1">
                                <button
                                    on:click=move |_| {
                                        editing.set(Some(for_edit.clone()));
                                        set_show_form.set(true);
                                    }
                                    class="px-2 py-1 text-gray-400 hover:text-white text-sm transition-colors"
                                >
                                    "Edit"
                                </button>
                                <ConfirmButton on_confirm=move || delete(id) />
                            </div>
                        </div>
                    }
                }).collect_view()
            }}
        </div>
    }
}

#[component]
fn RoleModal(
    existing: Option<Role>,
    on_close: impl Fn() + 'static + Clone,
    on_saved: impl Fn(Role) + 'static + Copy,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let editing_id = existing.as_ref().map(|r| r.id);
    let title = if editing_id.is_some() { "Edit Role" } else { "Add Role" };

    let (name, set_name) = create_signal(existing.as_ref().map(|r| r.name.clone()).unwrap_or_default());
    let granted = create_rw_signal(existing.as_ref().map(|r| r.permissions.clone()).unwrap_or_default());
    let (submitting, set_submitting) = create_signal(false);

    let toggle = move |permission: &'static str| {
        granted.update(|perms| {
            if perms.iter().any(|p| p == permission) {
                perms.retain(|p| p != permission);
            } else {
                perms.push(permission.to_string());
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

        let payload = api::RolePayload {
            name: n,
            permissions: granted.get(),
        };

        set_submitting.set(true);

        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update_role(id, &payload).await,
                None => api::create_role(&payload).await,
            };

            match result {
                Ok(role) => {
                    state.show_success("Role saved");
                    on_saved(role);
                    on_close_inner();
                }
                Err(e) => state.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4">
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
                            placeholder="e.g., Approver"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Permission checkboxes
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Permissions"</label>
                        <div class="space-y-2">
                            {permissions::ALL.into_iter().map(|permission| {
                                view! {
                                    <label class="flex items-center space-x-3 p-2 bg-gray-700 rounded-lg cursor-pointer">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || granted.get().iter().any(|p| p == permission)
                                            on:change=move |_| toggle(permission)
                                            class="w-4 h-4"
                                        />
                                        <span class="text-sm">{permission}</span>
                                    </label>
                                }
                            }).collect_view()}
                        </div>
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

// ============ Custom fields ============

#[component]
fn CustomFieldsTab() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let fields = create_rw_signal(Vec::<CustomField>::new());
    let (loading, set_loading) = create_signal(true);
    let (show_form, set_show_form) = create_signal(false);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            set_loading.set(true);
            match api::fetch_custom_fields().await {
                Ok(mut list) => {
                    list.sort_by_key(|f| f.position);
                    fields.set(list);
                }
                Err(e) => state.show_error(&e),
            }
            set_loading.set(false);
        });
    });

    let state_for_delete = state.clone();
    let delete = move |id: u32| {
        let state = state_for_delete.clone();
        spawn_local(async move {
            match api::delete_custom_field(id).await {
                Ok(()) => {
                    fields.update(|list| list.retain(|f| f.id != id));
                    state.show_success("Custom field deleted");
                }
                Err(e) => state.show_error(&e),
            }
        });
    };

    view! {
        <div class="space-y-4">
            <div class="flex justify-end">
                <button
                    on:click=move |_| set_show_form.set(true)
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "+ Add Field"
                </button>
            </div>

            {move || {
                if show_form.get() {
                    view! {
                        <CustomFieldModal
                            next_position=fields.get().len() as i32
                            on_close=move || set_show_form.set(false)
                            on_saved=move |field: CustomField| {
                                fields.update(|list| list.push(field));
                            }
                        />
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            {move || {
                if loading.get() {
                    return view! { <ListSkeleton count=3 /> }.into_view();
                }

                let list = fields.get();
                if list.is_empty() {
                    return view! {
                        <div class="text-center py-12 bg-gray-800 rounded-xl">
                            <p class="text-gray-400">"No custom fields defined."</p>
                        </div>
                    }.into_view();
                }

                list.into_iter().map(|field| {
                    let id = field.id;
                    let delete = delete.clone();
                    let options_note = match &field.kind {
                        CustomFieldKind::Select { options } => Some(options.join(", ")),
                        _ => None,
                    };
                    view! {
                        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 flex items-center justify-between">
                            <div>
                                <div class="flex items-center space-x-2">
                                    <span class="font-semibold">{field.label.clone()}</span>
                                    <span class="bg-gray-700 text-xs px-2 py-0.5 rounded text-gray-300">
                                        {field.kind.label()}
                                    </span>
                                    {if field.required {
                                        Some(view! {
                                            <span class="bg-yellow-600 text-xs px-2 py-0.5 rounded-full text-white">
                                                "Required"
                                            </span>
                                        })
                                    } else {
                                        None
                                    }}
                                </div>
                                <p class="text-sm text-gray-400 mt-1">
                                    "Key: "{field.name.clone()}
                                    {options_note.map(|o| format!(" · Options: {}", o)).unwrap_or_default()}
                                </p>
                            </div>

                            <ConfirmButton on_confirm=move || delete(id) />
                        </div>
                    }
                }).collect_view()
            }}
        </div>
    }
}

#[component]
fn CustomFieldModal(
    next_position: i32,
    on_close: impl Fn() + 'static + Clone,
    on_saved: impl Fn(CustomField) + 'static + Copy,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let (label, set_label) = create_signal(String::new());
    let (kind, set_kind) = create_signal("text".to_string());
    let (options, set_options) = create_signal(String::new());
    let (required, set_required) = create_signal(false);
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let on_close_for_x = on_close.clone();
    let on_close_for_cancel = on_close;

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let state = state_for_submit.clone();
        let n = name.get();
        let l = label.get();

        if n.is_empty() || l.is_empty() {
            state.show_error("Key and label are required");
            return;
        }

        let field_kind = match kind.get().as_str() {
            "select" => {
                let opts: Vec<String> = options
                    .get()
                    .split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect();
                if opts.is_empty() {
                    state.show_error("Select fields need at least one option");
                    return;
                }
                CustomFieldKind::Select { options: opts }
            }
            "file" => CustomFieldKind::File,
            "toggle" => CustomFieldKind::Toggle,
            _ => CustomFieldKind::Text,
        };

        let payload = api::CustomFieldPayload {
            name: n,
            label: l,
            kind: field_kind,
            required: required.get(),
            position: next_position,
        };

        set_submitting.set(true);

        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            match api::create_custom_field(&payload).await {
                Ok(field) => {
                    state.show_success("Custom field created");
                    on_saved(field);
                    on_close_inner();
                }
                Err(e) => state.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-xl font-semibold">"Add Custom Field"</h2>
                    <button
                        on:click=move |_| on_close_for_x()
                        class="text-gray-400 hover:text-white"
                    >
                        "✕"
                    </button>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    // Key
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Key"</label>
                        <input
                            type="text"
                            placeholder="e.g., po_number"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Label
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Label"</label>
                        <input
                            type="text"
                            placeholder="e.g., PO number"
                            prop:value=move || label.get()
                            on:input=move |ev| set_label.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Kind
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Type"</label>
                        <select
                            on:change=move |ev| set_kind.set(event_target_value(&ev))
                            prop:value=move || kind.get()
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        >
                            <option value="text">"Text"</option>
                            <option value="select">"Select"</option>
                            <option value="file">"File"</option>
                            <option value="toggle">"Toggle"</option>
                        </select>
                    </div>

                    // Options, select only
                    {move || {
                        if kind.get() == "select" {
                            view! {
                                <div>
                                    <label class="block text-sm text-gray-400 mb-2">"Options (comma-separated)"</label>
                                    <input
                                        type="text"
                                        placeholder="e.g., PO, Invoice, Card"
                                        prop:value=move || options.get()
                                        on:input=move |ev| set_options.set(event_target_value(&ev))
                                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                                    />
                                </div>
                            }.into_view()
                        } else {
                            view! {}.into_view()
                        }
                    }}

                    // Required toggle
                    <div class="flex items-center justify-between p-3 bg-gray-700 rounded-lg">
                        <span class="text-sm text-gray-300">"Required"</span>
                        <input
                            type="checkbox"
                            prop:checked=move || required.get()
                            on:change=move |ev| set_required.set(event_target_checked(&ev))
                            class="w-5 h-5"
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
                            {move || if submitting.get() { "Creating..." } else { "Create" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
