//! Tickets Page
//!
//! Support ticket list with a detail pane showing the comment thread and
//! status transitions.

use leptos::*;

use crate::api;
use crate::components::{ListSkeleton, TicketBadge};
use crate::models::{permissions, Comment, Ticket, TicketStatus};
use crate::state::global::GlobalState;

/// Tickets page component
#[component]
pub fn Tickets() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let tickets = create_rw_signal(Vec::<Ticket>::new());
    let (loading, set_loading) = create_signal(true);
    let (selected, set_selected) = create_signal(None::<u32>);
    let (show_form, set_show_form) = create_signal(false);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            set_loading.set(true);
            match api::fetch_tickets().await {
                Ok(list) => tickets.set(list),
                Err(e) => state.show_error(&e),
            }
            set_loading.set(false);
        });
    });

    let selected_ticket = create_memo(move |_| {
        selected
            .get()
            .and_then(|id| tickets.get().into_iter().find(|t| t.id == id))
    });

    let upsert = move |ticket: Ticket| {
        tickets.update(|list| {
            if let Some(existing) = list.iter_mut().find(|t| t.id == ticket.id) {
                *existing = ticket;
            } else {
                list.push(ticket);
            }
        });
    };

    view! {
        <div class="space-y-8">
            // Header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Tickets"</h1>
                    <p class="text-gray-400 mt-1">"Support requests and questions"</p>
                </div>

                <button
                    on:click=move |_| set_show_form.set(true)
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "+ New Ticket"
                </button>
            </div>

            // Create ticket modal
            {move || {
                if show_form.get() {
                    view! {
                        <TicketModal
                            on_close=move || set_show_form.set(false)
                            on_saved=upsert
                        />
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            <div class="grid lg:grid-cols-2 gap-8">
                // Ticket list
                <section class="space-y-3">
                    {move || {
                        if loading.get() {
                            return view! { <ListSkeleton count=5 /> }.into_view();
                        }

                        let mut list = tickets.get();
                        if list.is_empty() {
                            return view! {
                                <div class="text-center py-12 bg-gray-800 rounded-xl">
                                    <p class="text-gray-400">"No tickets yet."</p>
                                </div>
                            }.into_view();
                        }
                        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));

                        list.into_iter().map(|ticket| {
                            let id = ticket.id;
                            let created = chrono::DateTime::from_timestamp_millis(ticket.created_at)
                                .map(|dt| dt.format("%b %d, %Y").to_string())
                                .unwrap_or_default();

                            view! {
                                <div
                                    on:click=move |_| set_selected.set(Some(id))
                                    class=move || {
                                        let base = "bg-gray-800 rounded-xl p-4 border cursor-pointer transition-colors";
                                        if selected.get() == Some(id) {
                                            format!("{} border-primary-500", base)
                                        } else {
                                            format!("{} border-gray-700 hover:border-gray-600", base)
                                        }
                                    }
                                >
                                    <div class="flex items-center justify-between">
                                        <h3 class="font-semibold truncate">{ticket.subject.clone()}</h3>
                                        <TicketBadge status=ticket.status />
                                    </div>
                                    <p class="text-sm text-gray-400 mt-1">
                                        {ticket.author_name.clone().unwrap_or_else(|| format!("User #{}", ticket.author_id))}
                                        " · "
                                        {created}
                                    </p>
                                </div>
                            }
                        }).collect_view()
                    }}
                </section>

                // Detail pane
                <section>
                    {move || {
                        match selected_ticket.get() {
                            Some(ticket) => view! {
                                <TicketDetail ticket=ticket on_updated=upsert />
                            }.into_view(),
                            None => view! {
                                <div class="text-center py-12 bg-gray-800 rounded-xl">
                                    <p class="text-gray-400">"Select a ticket to see its thread."</p>
                                </div>
                            }.into_view(),
                        }
                    }}
                </section>
            </div>
        </div>
    }
}

/// Ticket detail with status actions and comment thread
#[component]
fn TicketDetail(
    ticket: Ticket,
    on_updated: impl Fn(Ticket) + 'static + Copy,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let id = ticket.id;
    let comments = create_rw_signal(None::<Vec<Comment>>);
    let (comment_body, set_comment_body) = create_signal(String::new());
    let (posting, set_posting) = create_signal(false);

    // Load the thread whenever a different ticket is shown
    create_effect(move |_| {
        comments.set(None);
        spawn_local(async move {
            match api::fetch_comments(id).await {
                Ok(thread) => comments.set(Some(thread)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch comments: {}", e).into());
                    comments.set(Some(Vec::new()));
                }
            }
        });
    });

    let state_for_status = state.clone();
    let change_status = move |status: TicketStatus| {
        let state = state_for_status.clone();
        spawn_local(async move {
            match api::update_ticket_status(id, status).await {
                Ok(updated) => {
                    state.show_success(&format!("Ticket {}", updated.status.label().to_lowercase()));
                    on_updated(updated);
                }
                Err(e) => state.show_error(&e),
            }
        });
    };

    let state_for_comment = state.clone();
    let post_comment = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let state = state_for_comment.clone();
        let body = comment_body.get();
        if body.is_empty() {
            state.show_error("Comment cannot be empty");
            return;
        }

        set_posting.set(true);
        spawn_local(async move {
            match api::add_comment(id, &body).await {
                Ok(comment) => {
                    comments.update(|thread| {
                        if let Some(thread) = thread {
                            thread.push(comment);
                        }
                    });
                    set_comment_body.set(String::new());
                }
                Err(e) => state.show_error(&e),
            }
            set_posting.set(false);
        });
    };

    let status = ticket.status;
    let state_for_perm = state;
    let can_transition = move || state_for_perm.has_permission(permissions::TICKETS_EDIT);

    view! {
        <div class="bg-gray-800 rounded-xl p-6 space-y-4">
            // Ticket header
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold">{ticket.subject.clone()}</h2>
                <TicketBadge status=status />
            </div>

            <p class="text-gray-300 whitespace-pre-wrap">{ticket.body.clone()}</p>

            // Status transitions
            {move || {
                if can_transition() {
                    let next: Vec<(TicketStatus, &'static str)> = match status {
                        TicketStatus::Open => vec![
                            (TicketStatus::InProgress, "Start progress"),
                            (TicketStatus::Closed, "Close"),
                        ],
                        TicketStatus::InProgress => vec![(TicketStatus::Closed, "Close")],
                        TicketStatus::Closed => vec![(TicketStatus::Open, "Reopen")],
                    };

                    let change_status = change_status.clone();
                    view! {
                        <div class="flex space-x-2">
                            {next.into_iter().map(|(target, label)| {
                                let change = change_status.clone();
                                view! {
                                    <button
                                        on:click=move |_| change(target)
                                        class="px-3 py-1 bg-gray-700 hover:bg-gray-600 rounded text-sm transition-colors"
                                    >
                                        {label}
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            // Comment thread
            <div class="border-t border-gray-700 pt-4">
                <h3 class="text-sm font-semibold text-gray-400 mb-3">"Comments"</h3>

                {move || {
                    match comments.get() {
                        None => view! { <ListSkeleton count=2 /> }.into_view(),
                        Some(thread) if thread.is_empty() => view! {
                            <p class="text-gray-500 text-sm">"No comments yet."</p>
                        }.into_view(),
                        Some(thread) => thread.into_iter().map(|comment| {
                            let when = chrono::DateTime::from_timestamp_millis(comment.created_at)
                                .map(|dt| dt.format("%b %d, %H:%M").to_string())
                                .unwrap_or_default();

                            view! {
                                <div class="py-2 border-b border-gray-700 last:border-0">
                                    <div class="flex items-center justify-between text-sm">
                                        <span class="font-medium">
                                            {comment.author_name.clone().unwrap_or_else(|| "Unknown".to_string())}
                                        </span>
                                        <span class="text-gray-500">{when}</span>
                                    </div>
                                    <p class="text-gray-300 text-sm mt-1 whitespace-pre-wrap">{comment.body.clone()}</p>
                                </div>
                            }
                        }).collect_view(),
                    }
                }}

                // Add comment
                <form on:submit=post_comment class="flex space-x-2 mt-4">
                    <input
                        type="text"
                        placeholder="Write a comment..."
                        prop:value=move || comment_body.get()
                        on:input=move |ev| set_comment_body.set(event_target_value(&ev))
                        class="flex-1 bg-gray-700 rounded-lg px-4 py-2 text-sm
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <button
                        type="submit"
                        disabled=move || posting.get()
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg text-sm font-medium transition-colors"
                    >
                        {move || if posting.get() { "..." } else { "Post" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Create ticket modal
#[component]
fn TicketModal(
    on_close: impl Fn() + 'static + Clone,
    on_saved: impl Fn(Ticket) + 'static + Copy,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (subject, set_subject) = create_signal(String::new());
    let (body, set_body) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let on_close_for_x = on_close.clone();
    let on_close_for_cancel = on_close;

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let state = state_for_submit.clone();
        let s = subject.get();
        let b = body.get();

        if s.is_empty() || b.is_empty() {
            state.show_error("Subject and description are required");
            return;
        }

        set_submitting.set(true);

        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            match api::create_ticket(&s, &b).await {
                Ok(ticket) => {
                    state.show_success("Ticket created");
                    on_saved(ticket);
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
                    <h2 class="text-xl font-semibold">"New Ticket"</h2>
                    <button
                        on:click=move |_| on_close_for_x()
                        class="text-gray-400 hover:text-white"
                    >
                        "✕"
                    </button>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    // Subject
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Subject"</label>
                        <input
                            type="text"
                            placeholder="Short summary"
                            prop:value=move || subject.get()
                            on:input=move |ev| set_subject.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Body
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Description"</label>
                        <textarea
                            placeholder="What do you need?"
                            prop:value=move || body.get()
                            on:input=move |ev| set_body.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 h-28
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
                            {move || if submitting.get() { "Creating..." } else { "Create" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
