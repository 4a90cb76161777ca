//! Directory Page
//!
//! Tabbed CRUD over contractors, legal entities, customer departments, and
//! spend categories.

use leptos::*;

use crate::api;
use crate::components::{ConfirmButton, ListSkeleton};
use crate::models::{permissions, Category, Contractor, Department, LegalEntity};
use crate::state::global::GlobalState;

#[derive(Clone, Copy, PartialEq, Eq)]
enum DirectoryTab {
    Contractors,
    LegalEntities,
    Departments,
    Categories,
}

impl DirectoryTab {
    fn label(&self) -> &'static str {
        match self {
            DirectoryTab::Contractors => "Contractors",
            DirectoryTab::LegalEntities => "Legal Entities",
            DirectoryTab::Departments => "Departments",
            DirectoryTab::Categories => "Categories",
        }
    }
}

/// Directory page component
#[component]
pub fn Directory() -> impl IntoView {
    let (tab, set_tab) = create_signal(DirectoryTab::Contractors);

    let tabs = [
        DirectoryTab::Contractors,
        DirectoryTab::LegalEntities,
        DirectoryTab::Departments,
        DirectoryTab::Categories,
    ];

    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Directory"</h1>
                <p class="text-gray-400 mt-1">"Vendors, entities, departments, and categories"</p>
            </div>

            // Tab bar
            <div class="flex space-x-2 border-b border-gray-700">
                {tabs.into_iter().map(|t| {
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

            // Active tab
            {move || match tab.get() {
                DirectoryTab::Contractors => view! { <ContractorsTab /> }.into_view(),
                DirectoryTab::LegalEntities => view! { <LegalEntitiesTab /> }.into_view(),
                DirectoryTab::Departments => view! { <DepartmentsTab /> }.into_view(),
                DirectoryTab::Categories => view! { <CategoriesTab /> }.into_view(),
            }}
        </div>
    }
}

/// Shared list frame with a permission-gated create button
#[component]
fn TabFrame(
    #[prop(into)]
    loading: Signal<bool>,
    #[prop(into)]
    empty: Signal<bool>,
    empty_message: &'static str,
    on_create: impl Fn() + 'static + Clone,
    children: Children,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let can_edit = move || state.has_permission(permissions::DIRECTORY_EDIT);

    view! {
        <div class="space-y-4">
            <div class="flex justify-end">
                {move || {
                    if can_edit() {
                        let on_create = on_create.clone();
                        view! {
                            <button
                                on:click=move |_| on_create()
                                class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                            >
                                "+ Add"
                            </button>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>

            {move || {
                if loading.get() {
                    view! { <ListSkeleton count=4 /> }.into_view()
                } else if empty.get() {
                    view! {
                        <div class="text-center py-12 bg-gray-800 rounded-xl">
                            <p class="text-gray-400">{empty_message}</p>
                        </div>
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            {children()}
        </div>
    }
}

// ============ Contractors ============

#[component]
fn ContractorsTab() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (loading, set_loading) = create_signal(true);
    let (show_form, set_show_form) = create_signal(false);
    let editing = create_rw_signal(None::<Contractor>);

    let contractors = state.contractors;

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            set_loading.set(true);
            match api::fetch_contractors().await {
                Ok(list) => state.contractors.set(list),
                Err(e) => state.show_error(&e),
            }
            set_loading.set(false);
        });
    });

    let state_for_delete = state.clone();
    let delete = move |id: u32| {
        let state = state_for_delete.clone();
        spawn_local(async move {
            match api::delete_contractor(id).await {
                Ok(()) => {
                    state.contractors.update(|list| list.retain(|c| c.id != id));
                    state.show_success("Contractor deleted");
                }
                Err(e) => state.show_error(&e),
            }
        });
    };

    let state_for_perm = state.clone();
    let can_edit = Signal::derive(move || state_for_perm.has_permission(permissions::DIRECTORY_EDIT));

    view! {
        <TabFrame
            loading=loading
            empty=Signal::derive(move || !loading.get() && contractors.get().is_empty())
            empty_message="No contractors yet."
            on_create=move || {
                editing.set(None);
                set_show_form.set(true);
            }
        >
            {move || {
                if show_form.get() {
                    view! {
                        <ContractorModal
                            existing=editing.get()
                            on_close=move || set_show_form.set(false)
                        />
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            <div class="grid md:grid-cols-2 gap-4">
                {move || {
                    contractors.get().into_iter().map(|contractor| {
                        let id = contractor.id;
                        let for_edit = contractor.clone();

                        let delete = delete.clone();
                        view! {
                            <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
                                <div class="flex items-start justify-between">
                                    <div>
                                        <h3 class="font-semibold">{contractor.name.clone()}</h3>
                                        <p class="text-gray-400 text-sm mt-1">
                                            {contractor.contact_email.clone().unwrap_or_default()}
                                            {contractor.phone.clone().map(|p| format!(" · {}", p)).unwrap_or_default()}
                                        </p>
                                        {contractor.legal_entity_name.clone().map(|n| view! {
                                            <p class="text-gray-500 text-xs mt-1">"Entity: "{n}</p>
                                        })}
                                    </div>

                                    {move || {
                                        if can_edit.get() {
                                            let c = for_edit.clone();
                                            let delete = delete.clone();
                                            view! {
                                                <div class="flex items-center space-x-1">
                                                    <button
                                                        on:click=move |_| {
                                                            editing.set(Some(c.clone()));
                                                            set_show_form.set(true);
                                                        }
                                                        class="px-2 py-1 text-gray-400 hover:text-white text-sm transition-colors"
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
                            </div>
                        }
                    }).collect_view()
                }}
            </div>
        </TabFrame>
    }
}

#[component]
fn ContractorModal(
    existing: Option<Contractor>,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let editing_id = existing.as_ref().map(|c| c.id);
    let (name, set_name) = create_signal(existing.as_ref().map(|c| c.name.clone()).unwrap_or_default());
    let (email, set_email) = create_signal(
        existing.as_ref().and_then(|c| c.contact_email.clone()).unwrap_or_default(),
    );
    let (phone, set_phone) = create_signal(
        existing.as_ref().and_then(|c| c.phone.clone()).unwrap_or_default(),
    );
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let state = state_for_submit.clone();
        let n = name.get();
        if n.is_empty() {
            state.show_error("Name is required");
            return;
        }

        let e = email.get();
        let p = phone.get();
        let payload = api::ContractorPayload {
            name: n,
            contact_email: if e.is_empty() { None } else { Some(e) },
            phone: if p.is_empty() { None } else { Some(p) },
            legal_entity_id: None,
        };

        set_submitting.set(true);

        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update_contractor(id, &payload).await,
                None => api::create_contractor(&payload).await,
            };

            match result {
                Ok(contractor) => {
                    state.contractors.update(|list| {
                        if let Some(existing) = list.iter_mut().find(|c| c.id == contractor.id) {
                            *existing = contractor;
                        } else {
                            list.push(contractor);
                        }
                    });
                    state.show_success("Contractor saved");
                    on_close_inner();
                }
                Err(e) => state.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <RecordModal
            title=if editing_id.is_some() { "Edit Contractor" } else { "Add Contractor" }
            submitting=submitting
            on_close=on_close
            on_submit=on_submit
        >
            <FormField label="Name" value=name on_input=set_name />
            <FormField label="Contact email" value=email on_input=set_email />
            <FormField label="Phone" value=phone on_input=set_phone />
        </RecordModal>
    }
}

// ============ Legal entities ============

#[component]
fn LegalEntitiesTab() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (loading, set_loading) = create_signal(true);
    let (show_form, set_show_form) = create_signal(false);
    let editing = create_rw_signal(None::<LegalEntity>);

    let entities = state.legal_entities;

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            set_loading.set(true);
            match api::fetch_legal_entities().await {
                Ok(list) => state.legal_entities.set(list),
                Err(e) => state.show_error(&e),
            }
            set_loading.set(false);
        });
    });

    let state_for_delete = state.clone();
    let delete = move |id: u32| {
        let state = state_for_delete.clone();
        spawn_local(async move {
            match api::delete_legal_entity(id).await {
                Ok(()) => {
                    state.legal_entities.update(|list| list.retain(|e| e.id != id));
                    state.show_success("Legal entity deleted");
                }
                Err(e) => state.show_error(&e),
            }
        });
    };

    let state_for_perm = state.clone();
    let can_edit = Signal::derive(move || state_for_perm.has_permission(permissions::DIRECTORY_EDIT));

    view! {
        <TabFrame
            loading=loading
            empty=Signal::derive(move || !loading.get() && entities.get().is_empty())
            empty_message="No legal entities yet."
            on_create=move || {
                editing.set(None);
                set_show_form.set(true);
            }
        >
            {move || {
                if show_form.get() {
                    view! {
                        <LegalEntityModal
                            existing=editing.get()
                            on_close=move || set_show_form.set(false)
                        />
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            <div class="grid md:grid-cols-2 gap-4">
                {move || {
                    entities.get().into_iter().map(|entity| {
                        let id = entity.id;
                        let for_edit = entity.clone();

                        let delete = delete.clone();
                        view! {
                            <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
                                <div class="flex items-start justify-between">
                                    <div>
                                        <h3 class="font-semibold">{entity.name.clone()}</h3>
                                        <p class="text-gray-400 text-sm mt-1">
                                            "Tax ID: "{entity.tax_id.clone()}
                                            {entity.country.clone().map(|c| format!(" · {}", c)).unwrap_or_default()}
                                        </p>
                                    </div>

                                    {move || {
                                        if can_edit.get() {
                                            let e = for_edit.clone();
                                            let delete = delete.clone();
                                            view! {
                                                <div class="flex items-center space-x-1">
                                                    <button
                                                        on:click=move |_| {
                                                            editing.set(Some(e.clone()));
                                                            set_show_form.set(true);
                                                        }
                                                        class="px-2 py-1 text-gray-400 hover:text-white text-sm transition-colors"
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
                            </div>
                        }
                    }).collect_view()
                }}
            </div>
        </TabFrame>
    }
}

#[component]
fn LegalEntityModal(
    existing: Option<LegalEntity>,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let editing_id = existing.as_ref().map(|e| e.id);
    let (name, set_name) = create_signal(existing.as_ref().map(|e| e.name.clone()).unwrap_or_default());
    let (tax_id, set_tax_id) = create_signal(existing.as_ref().map(|e| e.tax_id.clone()).unwrap_or_default());
    let (country, set_country) = create_signal(
        existing.as_ref().and_then(|e| e.country.clone()).unwrap_or_default(),
    );
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let state = state_for_submit.clone();
        let n = name.get();
        let t = tax_id.get();
        if n.is_empty() || t.is_empty() {
            state.show_error("Name and tax ID are required");
            return;
        }

        let c = country.get();
        let payload = api::LegalEntityPayload {
            name: n,
            tax_id: t,
            country: if c.is_empty() { None } else { Some(c) },
        };

        set_submitting.set(true);

        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update_legal_entity(id, &payload).await,
                None => api::create_legal_entity(&payload).await,
            };

            match result {
                Ok(entity) => {
                    state.legal_entities.update(|list| {
                        if let Some(existing) = list.iter_mut().find(|e| e.id == entity.id) {
                            *existing = entity;
                        } else {
                            list.push(entity);
                        }
                    });
                    state.show_success("Legal entity saved");
                    on_close_inner();
                }
                Err(e) => state.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <RecordModal
            title=if editing_id.is_some() { "Edit Legal Entity" } else { "Add Legal Entity" }
            submitting=submitting
            on_close=on_close
            on_submit=on_submit
        >
            <FormField label="Name" value=name on_input=set_name />
            <FormField label="Tax ID" value=tax_id on_input=set_tax_id />
            <FormField label="Country" value=country on_input=set_country />
        </RecordModal>
    }
}

// ============ Departments ============

#[component]
fn DepartmentsTab() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (loading, set_loading) = create_signal(true);
    let (show_form, set_show_form) = create_signal(false);
    let editing = create_rw_signal(None::<Department>);

    let departments = state.departments;

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            set_loading.set(true);
            match api::fetch_departments().await {
                Ok(list) => state.departments.set(list),
                Err(e) => state.show_error(&e),
            }
            set_loading.set(false);
        });
    });

    let state_for_delete = state.clone();
    let delete = move |id: u32| {
        let state = state_for_delete.clone();
        spawn_local(async move {
            match api::delete_department(id).await {
                Ok(()) => {
                    state.departments.update(|list| list.retain(|d| d.id != id));
                    state.show_success("Department deleted");
                }
                Err(e) => state.show_error(&e),
            }
        });
    };

    let state_for_perm = state.clone();
    let can_edit = Signal::derive(move || state_for_perm.has_permission(permissions::DIRECTORY_EDIT));

    view! {
        <TabFrame
            loading=loading
            empty=Signal::derive(move || !loading.get() && departments.get().is_empty())
            empty_message="No departments yet."
            on_create=move || {
                editing.set(None);
                set_show_form.set(true);
            }
        >
            {move || {
                if show_form.get() {
                    view! {
                        <DepartmentModal
                            existing=editing.get()
                            on_close=move || set_show_form.set(false)
                        />
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            <div class="grid md:grid-cols-2 gap-4">
                {move || {
                    departments.get().into_iter().map(|department| {
                        let id = department.id;
                        let for_edit = department.clone();

                        let delete = delete.clone();
                        view! {
                            <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
                                <div class="flex items-start justify-between">
                                    <div>
                                        <h3 class="font-semibold">{department.name.clone()}</h3>
                                        {department.manager_name.clone().map(|m| view! {
                                            <p class="text-gray-400 text-sm mt-1">"Manager: "{m}</p>
                                        })}
                                    </div>

                                    {move || {
                                        if can_edit.get() {
                                            let d = for_edit.clone();
                                            let delete = delete.clone();
                                            view! {
                                                <div class="flex items-center space-x-1">
                                                    <button
                                                        on:click=move |_| {
                                                            editing.set(Some(d.clone()));
                                                            set_show_form.set(true);
                                                        }
                                                        class="px-2 py-1 text-gray-400 hover:text-white text-sm transition-colors"
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
                            </div>
                        }
                    }).collect_view()
                }}
            </div>
        </TabFrame>
    }
}

#[component]
fn DepartmentModal(
    existing: Option<Department>,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let editing_id = existing.as_ref().map(|d| d.id);
    let (name, set_name) = create_signal(existing.as_ref().map(|d| d.name.clone()).unwrap_or_default());
    let (manager, set_manager) = create_signal(
        existing.as_ref().and_then(|d| d.manager_name.clone()).unwrap_or_default(),
    );
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let state = state_for_submit.clone();
        let n = name.get();
        if n.is_empty() {
            state.show_error("Name is required");
            return;
        }

        let m = manager.get();
        let payload = api::DepartmentPayload {
            name: n,
            manager_name: if m.is_empty() { None } else { Some(m) },
        };

        set_submitting.set(true);

        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update_department(id, &payload).await,
                None => api::create_department(&payload).await,
            };

            match result {
                Ok(department) => {
                    state.departments.update(|list| {
                        if let Some(existing) = list.iter_mut().find(|d| d.id == department.id) {
                            *existing = department;
                        } else {
                            list.push(department);
                        }
                    });
                    state.show_success("Department saved");
                    on_close_inner();
                }
                Err(e) => state.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <RecordModal
            title=if editing_id.is_some() { "Edit Department" } else { "Add Department" }
            submitting=submitting
            on_close=on_close
            on_submit=on_submit
        >
            <FormField label="Name" value=name on_input=set_name />
            <FormField label="Manager" value=manager on_input=set_manager />
        </RecordModal>
    }
}

// ============ Categories ============

#[component]
fn CategoriesTab() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (loading, set_loading) = create_signal(true);
    let (show_form, set_show_form) = create_signal(false);
    let editing = create_rw_signal(None::<Category>);

    let categories = state.categories;

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            set_loading.set(true);
            match api::fetch_categories().await {
                Ok(list) => state.categories.set(list),
                Err(e) => state.show_error(&e),
            }
            set_loading.set(false);
        });
    });

    let state_for_delete = state.clone();
    let delete = move |id: u32| {
        let state = state_for_delete.clone();
        spawn_local(async move {
            match api::delete_category(id).await {
                Ok(()) => {
                    state.categories.update(|list| list.retain(|c| c.id != id));
                    state.show_success("Category deleted");
                }
                Err(e) => state.show_error(&e),
            }
        });
    };

    let state_for_perm = state.clone();
    let can_edit = Signal::derive(move || state_for_perm.has_permission(permissions::DIRECTORY_EDIT));

    view! {
        <TabFrame
            loading=loading
            empty=Signal::derive(move || !loading.get() && categories.get().is_empty())
            empty_message="No categories yet."
            on_create=move || {
                editing.set(None);
                set_show_form.set(true);
            }
        >
            {move || {
                if show_form.get() {
                    view! {
                        <CategoryModal
                            existing=editing.get()
                            on_close=move || set_show_form.set(false)
                        />
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            <div class="grid md:grid-cols-3 gap-4">
                {move || {
                    categories.get().into_iter().map(|category| {
                        let id = category.id;
                        let for_edit = category.clone();

                        let delete = delete.clone();
                        view! {
                            <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
                                <div class="flex items-start justify-between">
                                    <div>
                                        <h3 class="font-semibold">{category.name.clone()}</h3>
                                        {category.description.clone().map(|d| view! {
                                            <p class="text-gray-400 text-sm mt-1">{d}</p>
                                        })}
                                    </div>

                                    {move || {
                                        if can_edit.get() {
                                            let c = for_edit.clone();
                                            let delete = delete.clone();
                                            view! {
                                                <div class="flex items-center space-x-1">
                                                    <button
                                                        on:click=move |_| {
                                                            editing.set(Some(c.clone()));
                                                            set_show_form.set(true);
                                                        }
                                                        class="px-2 py-1 text-gray-400 hover:text-white text-sm transition-colors"
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
                            </div>
                        }
                    }).collect_view()
                }}
            </div>
        </TabFrame>
    }
}

#[component]
fn CategoryModal(
    existing: Option<Category>,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let editing_id = existing.as_ref().map(|c| c.id);
    let (name, set_name) = create_signal(existing.as_ref().map(|c| c.name.clone()).unwrap_or_default());
    let (description, set_description) = create_signal(
        existing.as_ref().and_then(|c| c.description.clone()).unwrap_or_default(),
    );
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let state = state_for_submit.clone();
        let n = name.get();
        if n.is_empty() {
            state.show_error("Name is required");
            return;
        }

        let d = description.get();
        let payload = api::CategoryPayload {
            name: n,
            description: if d.is_empty() { None } else { Some(d) },
        };

        set_submitting.set(true);

        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update_category(id, &payload).await,
                None => api::create_category(&payload).await,
            };

            match result {
                Ok(category) => {
                    state.categories.update(|list| {
                        if let Some(existing) = list.iter_mut().find(|c| c.id == category.id) {
                            *existing = category;
                        } else {
                            list.push(category);
                        }
                    });
                    state.show_success("Category saved");
                    on_close_inner();
                }
                Err(e) => state.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <RecordModal
            title=if editing_id.is_some() { "Edit Category" } else { "Add Category" }
            submitting=submitting
            on_close=on_close
            on_submit=on_submit
        >
            <FormField label="Name" value=name on_input=set_name />
            <FormField label="Description" value=description on_input=set_description />
        </RecordModal>
    }
}

// ============ Shared form pieces ============

/// Modal shell shared by the directory forms
#[component]
fn RecordModal(
    title: &'static str,
    submitting: ReadSignal<bool>,
    on_close: impl Fn() + 'static + Clone,
    on_submit: impl Fn(web_sys::SubmitEvent) + 'static,
    children: Children,
) -> impl IntoView {
    let on_close_for_x = on_close.clone();
    let on_close_for_cancel = on_close;

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
                    {children()}

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

/// Labeled text input bound to a signal pair
#[component]
fn FormField(
    label: &'static str,
    value: ReadSignal<String>,
    on_input: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| on_input.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}
