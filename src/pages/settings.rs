//! Settings Page
//!
//! API connection, auth token, and display preferences.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::state::global::{GlobalState, TimeRange};

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-gray-400 mt-1">"Configure your OpSpend console"</p>
            </div>

            // API Connection
            <ApiSettings />

            // Display Settings
            <DisplaySettings />

            // Data Management
            <DataManagement />

            // About
            <AboutSection />
        </div>
    }
}

/// API connection settings
#[component]
fn ApiSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (token, set_token) = create_signal(api::get_auth_token().unwrap_or_default());
    let (testing, set_testing) = create_signal(false);
    let (test_result, set_test_result) = create_signal(None::<bool>);

    let state_for_test = state.clone();
    let test_connection = move |_| {
        set_testing.set(true);
        set_test_result.set(None);

        api::set_api_base(&api_url.get());
        api::set_auth_token(&token.get());

        let state_clone = state_for_test.clone();
        spawn_local(async move {
            match api::check_health().await {
                Ok(_) => {
                    set_test_result.set(Some(true));
                    state_clone.show_success("Connection successful!");
                }
                Err(e) => {
                    set_test_result.set(Some(false));
                    state_clone.show_error(&format!("Connection failed: {}", e));
                }
            }
            set_testing.set(false);
        });
    };

    let state_for_save = state;
    let save = move |_| {
        api::set_api_base(&api_url.get());
        api::set_auth_token(&token.get());
        state_for_save.show_success("Connection settings saved");
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"API Connection"</h2>

            <div class="space-y-4">
                // API URL
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"OpSpend API URL"</label>
                    <input
                        type="text"
                        prop:value=move || api_url.get()
                        on:input=move |ev| set_api_url.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                // Auth token
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Auth token"</label>
                    <input
                        type="password"
                        placeholder="Bearer token issued by your administrator"
                        prop:value=move || token.get()
                        on:input=move |ev| set_token.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div class="flex space-x-2">
                    <button
                        on:click=test_connection
                        disabled=move || testing.get()
                        class="px-4 py-3 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if testing.get() { "Testing..." } else { "Test" }}
                    </button>
                    <button
                        on:click=save
                        class="px-4 py-3 bg-primary-600 hover:bg-primary-700
                               rounded-lg font-medium transition-colors"
                    >
                        "Save"
                    </button>
                </div>

                // Connection status
                <div class="flex items-center space-x-2">
                    <span class="text-sm text-gray-400">"Status:"</span>
                    {move || {
                        match test_result.get() {
                            Some(true) => view! {
                                <span class="text-green-400">"✓ Connected"</span>
                            }.into_view(),
                            Some(false) => view! {
                                <span class="text-red-400">"✕ Failed"</span>
                            }.into_view(),
                            None => view! {
                                <span class="text-gray-400">"Not tested"</span>
                            }.into_view(),
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

/// Display settings
#[component]
fn DisplaySettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let time_range = state.time_range;

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Display Settings"</h2>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Default reporting window"</label>
                <select
                    on:change=move |ev| {
                        if let Ok(days) = event_target_value(&ev).parse::<i64>() {
                            time_range.set(TimeRange::last_days(days));
                        }
                    }
                    prop:value=move || time_range.get().duration_days().to_string()
                    class="bg-gray-700 rounded-lg px-4 py-3 w-full max-w-xs
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    <option value="7">"Last 7 days"</option>
                    <option value="30">"Last 30 days"</option>
                    <option value="90">"Last 90 days"</option>
                </select>
            </div>
        </section>
    }
}

/// Data management section
#[component]
fn DataManagement() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (exporting, set_exporting) = create_signal(false);

    let state_for_export = state;
    let export_payments = move |_| {
        set_exporting.set(true);

        let state_clone = state_for_export.clone();
        spawn_local(async move {
            match api::export_payments(None).await {
                Ok(data) => {
                    // Create download
                    if let Some(window) = web_sys::window() {
                        let blob = web_sys::Blob::new_with_str_sequence(
                            &js_sys::Array::of1(&data.into()),
                        ).ok();

                        if let Some(blob) = blob {
                            let url = web_sys::Url::create_object_url_with_blob(&blob).ok();
                            if let Some(url) = url {
                                let document = window.document().unwrap();
                                let a = document.create_element("a").unwrap();
                                let _ = a.set_attribute("href", &url);
                                let _ = a.set_attribute("download", "opspend-payments.json");
                                let _ = a.dyn_ref::<web_sys::HtmlElement>().unwrap().click();
                                let _ = web_sys::Url::revoke_object_url(&url);
                            }
                        }
                    }
                    state_clone.show_success("Payments exported");
                }
                Err(e) => {
                    state_clone.show_error(&e);
                }
            }
            set_exporting.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Data Management"</h2>

            <div class="flex items-center justify-between p-4 bg-gray-700 rounded-lg">
                <div>
                    <h3 class="font-medium">"Export Payments"</h3>
                    <p class="text-sm text-gray-400">"Download every payment record as JSON"</p>
                </div>
                <button
                    on:click=export_payments
                    disabled=move || exporting.get()
                    class="px-4 py-2 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                           rounded-lg font-medium transition-colors"
                >
                    {move || if exporting.get() { "Exporting..." } else { "Export" }}
                </button>
            </div>
        </section>
    }
}

/// About section
#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"About OpSpend"</h2>

            <div class="space-y-4 text-gray-300">
                <p>
                    "OpSpend is an administration console for IT expenditures. "
                    "Track payments through approval, keep your vendor directory current, "
                    "and record the savings you negotiate."
                </p>

                <p class="text-sm text-gray-400">
                    "Version 0.1.0 • Built with Leptos (WASM)"
                </p>
            </div>
        </section>
    }
}
