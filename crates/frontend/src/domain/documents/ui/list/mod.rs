pub mod state;

use contracts::domain::document::Document;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::documents::api;
use crate::routes::{use_navigation, Destination};
use crate::shared::components::navbar::Navbar;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::date_utils::format_date;
use crate::shared::list_view::{
    DateWindow, ListViewModel, RecordEditor, SelectionTracker, CATEGORY_ALL,
};
use crate::system::auth::context::is_admin;

/// Document table: search, category/uploaded filters, paging,
/// selection with admin-only bulk delete, edit and download actions.
#[component]
pub fn DocumentListPage() -> impl IntoView {
    let model: RwSignal<ListViewModel<Document>> = RwSignal::new(state::create_model());
    let selection = RwSignal::new(SelectionTracker::new());
    let editor = RwSignal::new(RecordEditor::<Document>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(true);

    let admin = is_admin();
    let destination = use_navigation();

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_documents().await {
                Ok(data) => {
                    model.update(|m| m.set_records(data));
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("fetching documents: {}", e);
                    set_error
                        .set(Some("Failed to load documents. Please try again later.".into()));
                    set_loading.set(false);
                }
            }
        });
    });

    let visible = Memo::new(move |_| model.get().visible_page());
    let visible_ids =
        Memo::new(move |_| visible.get().iter().map(|d| d.id.clone()).collect::<Vec<_>>());

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

    // Optimistic removal; the selection prune effect drops any
    // removed ids still checked.
    let drop_records = move |ids: &[String]| {
        model.update(|m| {
            let records: Vec<Document> = m
                .records()
                .iter()
                .filter(|d| !ids.contains(&d.id))
                .cloned()
                .collect();
            m.set_records(records);
        });
    };

    let delete_one = move |id: String| {
        if !confirm("Are you sure you want to delete this document?") {
            return;
        }
        drop_records(std::slice::from_ref(&id));
        spawn_local(async move {
            api::delete_document(&id).await;
        });
    };

    let bulk_delete = move |_| {
        if !admin.get_untracked() {
            return;
        }
        let ids = selection.with_untracked(|s| s.ids());
        if ids.is_empty() {
            return;
        }
        if !confirm("Are you sure you want to delete the selected documents?") {
            return;
        }
        drop_records(&ids);
        selection.update(|s| s.clear());
        spawn_local(async move {
            api::delete_documents(&ids).await;
        });
    };

    let apply_saved = Callback::new(move |updated: Document| {
        let for_sync = updated.clone();
        model.update(|m| {
            let records: Vec<Document> = m
                .records()
                .iter()
                .cloned()
                .map(|d| if d.id == updated.id { updated.clone() } else { d })
                .collect();
            m.set_records(records);
        });
        spawn_local(async move {
            api::update_document(&for_sync).await;
        });
    });

    let editing_id = Memo::new(move |_| editor.with(|e| e.editing_id().map(str::to_string)));

    let selected_count = Signal::derive(move || selection.get().len());

    view! {
        <div class="container">
            <Navbar current=Destination::Documents />
            <h2>"Document Management"</h2>

            <div class="header-container">
                <SearchInput on_change=on_search placeholder="Search document ..." />
                <div class="dropdown-container">
                    <label class="dropdown-label">"Category"</label>
                    <select
                        class="dropdown"
                        on:change=move |ev| {
                            model.update(|m| m.set_category(event_target_value(&ev)));
                        }
                    >
                        <option value=CATEGORY_ALL>"All"</option>
                        <option value="report">"Report"</option>
                        <option value="invoice">"Invoice"</option>
                        <option value="contract">"Contract"</option>
                    </select>
                </div>

                <div class="dropdown-container">
                    <label class="dropdown-label">"Uploaded"</label>
                    <select
                        class="dropdown"
                        on:change=move |ev| {
                            let window = DateWindow::from_param(&event_target_value(&ev));
                            model.update(|m| m.set_date_window(window));
                        }
                    >
                        <option value="anytime">"Anytime"</option>
                        <option value="latest">"Last 30 Days"</option>
                        <option value="earliest">"Older than 1 Year"</option>
                    </select>
                </div>
                <button
                    class="new-user-btn"
                    on:click=move |_| destination.set(Destination::Upload)
                >
                    "+ Upload Document"
                </button>
            </div>

            {move || (selected_count.get() > 0 && admin.get()).then(|| view! {
                <div class="bulk-actions">
                    <button class="delete-s-btn" on:click=bulk_delete>
                        {move || format!("Delete Selected ({})", selected_count.get())}
                    </button>
                </div>
            })}

            {move || loading.get().then(|| view! {
                <div class="loading">"Loading documents..."</div>
            })}
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <table class="document-table">
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
                        <th>"Name"</th>
                        <th>"Description"</th>
                        <th>"Category"</th>
                        <th>"Uploaded"</th>
                        <th>"Size"</th>
                        {move || admin.get().then(|| view! { <th>"Actions"</th> })}
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || !visible.get().is_empty()
                        fallback=|| view! { <tr><td colspan="7">"No documents found"</td></tr> }
                    >
                        <For
                            each=move || visible.get()
                            key=|d| d.id.clone()
                            children=move |doc| {
                                let row_id = doc.id.clone();
                                let toggle_id = doc.id.clone();
                                let delete_id = doc.id.clone();
                                let doc_for_edit = doc.clone();
                                let download_url = doc.download_url.clone();
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
                                        <td>{doc.name.clone()}</td>
                                        <td>{doc.description.clone()}</td>
                                        <td>{doc.category.label()}</td>
                                        <td>{format_date(&doc.uploaded)}</td>
                                        <td>{doc.size.clone()}</td>
                                        {move || admin.get().then(|| {
                                            let delete_id = delete_id.clone();
                                            let doc_for_edit = doc_for_edit.clone();
                                            let download_url = download_url.clone();
                                            view! {
                                                <td>
                                                    <button
                                                        class="edit-btn"
                                                        on:click=move |_| {
                                                            editor.update(|e| {
                                                                e.begin(doc_for_edit.clone())
                                                            });
                                                        }
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="delete-btn"
                                                        on:click=move |_| {
                                                            delete_one(delete_id.clone());
                                                        }
                                                    >
                                                        "Delete"
                                                    </button>
                                                    {download_url.map(|url| view! {
                                                        <button
                                                            class="download-btn"
                                                            on:click=move |_| open_download(&url)
                                                        >
                                                            "Download"
                                                        </button>
                                                    })}
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
                        <EditDocumentModal editor=editor initial=initial on_saved=apply_saved />
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

fn open_download(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url(url);
    }
}

/// Browser confirm dialog; answers false when no window exists.
fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

#[component]
fn EditDocumentModal(
    editor: RwSignal<RecordEditor<Document>>,
    initial: Document,
    on_saved: Callback<Document>,
) -> impl IntoView {
    let edit_field = move |field: &'static str| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            editor.update(|e| {
                if let Err(err) = e.update_field(field, &value) {
                    log::warn!("document edit: {}", err);
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
                <h3>"Edit Document"</h3>
                <form on:submit=on_submit>
                    <label>"Name:"</label>
                    <input
                        type="text"
                        value=initial.name.clone()
                        on:input=edit_field("name")
                        required
                    />
                    <label>"Description:"</label>
                    <input
                        type="text"
                        value=initial.description.clone()
                        on:input=edit_field("description")
                        required
                    />
                    <label>"Category:"</label>
                    <select
                        prop:value=initial.category.as_str()
                        on:change=edit_field("category")
                    >
                        <option value="report">"Report"</option>
                        <option value="invoice">"Invoice"</option>
                        <option value="contract">"Contract"</option>
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
