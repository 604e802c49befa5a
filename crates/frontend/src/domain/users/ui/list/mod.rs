pub mod state;

use contracts::domain::user::{Status, User};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::users::api;
use crate::routes::{use_navigation, Destination};
use crate::shared::components::navbar::Navbar;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::date_utils::format_date;
use crate::shared::list_view::{
    DateWindow, ListViewModel, RecordEditor, SelectionTracker, CATEGORY_ALL,
};
use crate::system::auth::context::is_admin;

/// User management table: search, permissions/joined filters, paging,
/// row selection and admin-only status/edit actions.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let model: RwSignal<ListViewModel<User>> = RwSignal::new(state::create_model());
    let selection = RwSignal::new(SelectionTracker::new());
    let editor = RwSignal::new(RecordEditor::<User>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(true);

    let admin = is_admin();
    let destination = use_navigation();

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(data) => {
                    model.update(|m| m.set_records(data));
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("fetching users: {}", e);
                    set_error.set(Some("Failed to load users. Please try again later.".into()));
                    set_loading.set(false);
                }
            }
        });
    });

    let visible = Memo::new(move |_| model.get().visible_page());
    let visible_ids =
        Memo::new(move |_| visible.get().iter().map(|u| u.id.clone()).collect::<Vec<_>>());

    // Selection is page-local: drop anything that left the visible
    // page after a filter or page change.
    Effect::new(move |_| {
        let ids = visible_ids.get();
        selection.update(|s| s.prune(&ids));
    });

    let on_search = Callback::new(move |term: String| {
        model.update(|m| m.set_search_term(term));
    });
    let on_page_change = Callback::new(move |page: usize| {
        model.update(|m| m.set_page(page));
    });

    let header_checked = Signal::derive(move || {
        let ids = visible_ids.get();
        !ids.is_empty() && selection.get().is_all_selected(&ids)
    });
    let toggle_all = move |_| {
        let ids = visible_ids.get_untracked();
        selection.update(|s| s.toggle_all_on_page(&ids));
    };

    // Optimistic status flip; the PATCH goes out best-effort.
    let set_status = move |id: String, status: Status| {
        model.update(|m| {
            let records: Vec<User> = m
                .records()
                .iter()
                .cloned()
                .map(|mut u| {
                    if u.id == id {
                        u.status = status;
                    }
                    u
                })
                .collect();
            m.set_records(records);
        });
        spawn_local(async move {
            api::patch_user_status(&id, status).await;
        });
    };

    let apply_saved = Callback::new(move |updated: User| {
        let for_sync = updated.clone();
        model.update(|m| {
            let records: Vec<User> = m
                .records()
                .iter()
                .cloned()
                .map(|u| if u.id == updated.id { updated.clone() } else { u })
                .collect();
            m.set_records(records);
        });
        spawn_local(async move {
            api::update_user(&for_sync).await;
        });
    });

    // Re-created only when the edited id changes, so keystrokes in the
    // modal do not tear down its inputs.
    let editing_id = Memo::new(move |_| editor.with(|e| e.editing_id().map(str::to_string)));

    view! {
        <div class="container">
            <Navbar current=Destination::Dashboard />
            <h2>"User Management"</h2>

            <div class="header-container">
                <SearchInput on_change=on_search placeholder="Search user ..." />
                <div class="dropdown-container">
                    <label class="dropdown-label">"Permissions"</label>
                    <select
                        class="dropdown"
                        on:change=move |ev| {
                            model.update(|m| m.set_category(event_target_value(&ev)));
                        }
                    >
                        <option value=CATEGORY_ALL>"All"</option>
                        <option value="admin">"Admin"</option>
                        <option value="contributor">"Contributor"</option>
                    </select>
                </div>

                <div class="dropdown-container">
                    <label class="dropdown-label">"Joined"</label>
                    <select
                        class="dropdown"
                        on:change=move |ev| {
                            let window = DateWindow::from_param(&event_target_value(&ev));
                            model.update(|m| m.set_date_window(window));
                        }
                    >
                        <option value="anytime">"Anytime"</option>
                        <option value="latest">"Latest"</option>
                        <option value="earliest">"Earliest"</option>
                    </select>
                </div>

                {move || admin.get().then(|| view! {
                    <button
                        class="new-user-btn"
                        on:click=move |_| destination.set(Destination::Signup)
                    >
                        "+ Add User"
                    </button>
                })}
            </div>

            {move || loading.get().then(|| view! { <div class="loading">"Loading users..."</div> })}
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <table class="user-table">
                <thead>
                    <tr>
                        <th>
                            <input
                                type="checkbox"
                                prop:checked=move || header_checked.get()
                                on:change=toggle_all
                                disabled=move || visible_ids.get().is_empty()
                            />
                        </th>
                        <th>"Full Name"</th>
                        <th>"Email Address"</th>
                        <th>"Location"</th>
                        <th>"Joined"</th>
                        <th>"Permissions"</th>
                        <th>"Status"</th>
                        {move || admin.get().then(|| view! { <th>"Actions"</th> })}
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || !visible.get().is_empty()
                        fallback=|| view! { <tr><td colspan="8">"No users found"</td></tr> }
                    >
                        <For
                            each=move || visible.get()
                            key=|u| u.id.clone()
                            children=move |user| {
                                let row_id = user.id.clone();
                                let toggle_id = user.id.clone();
                                let status_id = user.id.clone();
                                let user_for_edit = user.clone();
                                let next_status = user.status.toggled();
                                view! {
                                    <tr>
                                        <td>
                                            <input
                                                type="checkbox"
                                                prop:checked=move || {
                                                    selection.get().is_selected(&row_id)
                                                }
                                                on:change=move |_| {
                                                    selection.update(|s| s.toggle(&toggle_id));
                                                }
                                            />
                                        </td>
                                        <td>{user.full_name.clone()}</td>
                                        <td>{user.email.clone()}</td>
                                        <td>{user.location.clone()}</td>
                                        <td>{format_date(&user.joined)}</td>
                                        <td>{user.permissions.to_string()}</td>
                                        <td>
                                            <span class=format!("status-badge {}", user.status)>
                                                {user.status.to_string()}
                                            </span>
                                        </td>
                                        {move || admin.get().then(|| {
                                            let status_id = status_id.clone();
                                            let user_for_edit = user_for_edit.clone();
                                            view! {
                                                <td>
                                                    <button
                                                        class=match next_status {
                                                            Status::Inactive => "deactivate-btn",
                                                            Status::Active => "activate-btn",
                                                        }
                                                        on:click=move |_| {
                                                            set_status(status_id.clone(), next_status);
                                                        }
                                                    >
                                                        {match next_status {
                                                            Status::Inactive => "Deactivate",
                                                            Status::Active => "Activate",
                                                        }}
                                                    </button>
                                                    <button
                                                        class="edit-btn"
                                                        on:click=move |_| {
                                                            editor.update(|e| {
                                                                e.begin(user_for_edit.clone())
                                                            });
                                                        }
                                                    >
                                                        "Edit"
                                                    </button>
                                                </td>
                                            }
                                        })}
                                    </tr>
                                }
                            }
                        />
                    </Show>
                </tbody>
            </table>

            {move || {
                editing_id
                    .get()
                    .and_then(|_| editor.with_untracked(|e| e.draft().cloned()))
                    .map(|initial| view! {
                        <EditUserModal editor=editor initial=initial on_saved=apply_saved />
                    })
            }}

            <PaginationControls
                current_page=Signal::derive(move || model.get().current_page())
                page_count=Signal::derive(move || model.get().page_count())
                on_page_change=on_page_change
            />
        </div>
    }
}

/// Edit modal driven by the record editor: inputs write draft fields,
/// Save hands the merged record back to the page, Cancel discards.
#[component]
fn EditUserModal(
    editor: RwSignal<RecordEditor<User>>,
    initial: User,
    on_saved: Callback<User>,
) -> impl IntoView {
    let edit_field = move |field: &'static str| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            editor.update(|e| {
                if let Err(err) = e.update_field(field, &value) {
                    log::warn!("user edit: {}", err);
                }
            });
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(Ok(updated)) = editor.try_update(|e| e.save()) {
            on_saved.run(updated);
        }
    };

    view! {
        <div class="modal-overlay">
            <div class="modal">
                <h3>"Edit User"</h3>
                <form on:submit=on_submit>
                    <label>"Full Name:"</label>
                    <input
                        type="text"
                        value=initial.full_name.clone()
                        on:input=edit_field("full_name")
                        required
                    />
                    <label>"Email:"</label>
                    <input
                        type="email"
                        value=initial.email.clone()
                        on:input=edit_field("email")
                        required
                    />
                    <label>"Location:"</label>
                    <input
                        type="text"
                        value=initial.location.clone()
                        on:input=edit_field("location")
                        required
                    />
                    <label>"Permissions:"</label>
                    <select
                        prop:value=initial.permissions.as_str()
                        on:change=edit_field("permissions")
                    >
                        <option value="admin">"Admin"</option>
                        <option value="contributor">"Contributor"</option>
                    </select>
                    <button class="save-btn" type="submit">"Save"</button>
                    <button
                        class="cancel-btn"
                        type="button"
                        on:click=move |_| editor.update(|e| e.cancel())
                    >
                        "Cancel"
                    </button>
                </form>
            </div>
        </div>
    }
}
