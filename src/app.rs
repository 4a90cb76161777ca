//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{Nav, Toast};
use crate::pages::{Admin, Dashboard, Directory, Payments, Savings, Services, Settings, Tickets};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    // Resolve the session once so permission gates can render
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    create_effect(move |_| {
        let state = state.clone();
        spawn_local(async move {
            match api::fetch_session().await {
                Ok(session) => state.session.set(Some(session)),
                Err(e) => {
                    web_sys::console::warn_1(&format!("Session unavailable: {}", e).into());
                }
            }
        });
    });

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/payments" view=Payments />
                        <Route path="/services" view=Services />
                        <Route path="/directory" view=Directory />
                        <Route path="/savings" view=Savings />
                        <Route path="/tickets" view=Tickets />
                        <Route path="/admin" view=Admin />
                        <Route path="/settings" view=Settings />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer with session status
                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Footer component showing who is signed in
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                // Session
                <div class="flex items-center space-x-2">
                    {move || {
                        match state.session.get() {
                            Some(session) => view! {
                                <span class="flex items-center space-x-1 text-green-400">
                                    <span class="w-2 h-2 bg-green-400 rounded-full" />
                                    <span>{format!("Signed in as {}", session.user.name)}</span>
                                </span>
                            }.into_view(),
                            None => view! {
                                <span class="flex items-center space-x-1 text-gray-400">
                                    <span class="w-2 h-2 bg-gray-500 rounded-full" />
                                    <span>"Not signed in"</span>
                                </span>
                            }.into_view(),
                        }
                    }}
                </div>

                // Reporting window
                <div class="text-gray-400">
                    {move || format!("Window: {}", state.time_range.get().label)}
                </div>

                // Loading indicator
                {move || {
                    if state.loading.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-primary-400">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Loading..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
