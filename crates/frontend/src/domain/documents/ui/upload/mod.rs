use chrono::Utc;
use contracts::domain::document::{Category, NewDocument};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlInputElement;

use crate::domain::documents::api;
use crate::routes::{use_navigation, Destination};
use crate::shared::date_utils::today_string;

/// Upload form. Only metadata is sent to the collection endpoint; the
/// picked file contributes its name and size.
#[component]
pub fn UploadDocumentPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (category, set_category) = signal(Category::Report);
    // Name and size (bytes) of the picked file.
    let (file, set_file) = signal(Option::<(String, f64)>::None);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (success_message, set_success_message) = signal(Option::<String>::None);

    let destination = use_navigation();

    let on_file_change = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let picked = input.files().and_then(|files| files.get(0));
        set_file.set(picked.map(|f| (f.name(), f.size())));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let picked = file.get();
        if name.get().trim().is_empty() || description.get().trim().is_empty() || picked.is_none()
        {
            set_error_message.set(Some(
                "Please fill out all fields and select a file.".to_string(),
            ));
            return;
        }
        let (file_name, file_size) = match picked {
            Some(p) => p,
            None => return,
        };

        let new_document = NewDocument {
            name: name.get(),
            description: description.get(),
            category: category.get(),
            uploaded: today_string(Utc::now().date_naive()),
            size: format!("{:.2} KB", file_size / 1024.0),
            file_name,
        };

        set_error_message.set(None);

        spawn_local(async move {
            match api::create_document(&new_document).await {
                Ok(()) => {
                    set_success_message.set(Some("Document uploaded successfully!".to_string()));
                    set_name.set(String::new());
                    set_description.set(String::new());
                    set_category.set(Category::Report);
                    set_file.set(None);
                    // Show the success message briefly, then return to
                    // the list.
                    TimeoutFuture::new(2_000).await;
                    destination.set(Destination::Documents);
                }
                Err(e) => {
                    log::error!("uploading document: {}", e);
                    set_success_message.set(None);
                    set_error_message
                        .set(Some("Failed to upload document. Please try again.".to_string()));
                }
            }
        });
    };

    view! {
        <div class="container">
            <form class="upload-form" on:submit=on_submit>
                <h2>"Upload Document"</h2>
                <div class="form-group">
                    <label>"Name:"</label>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        required
                    />
                </div>

                <div class="form-group">
                    <label>"Description:"</label>
                    <textarea
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                        required
                    />
                </div>

                <div class="form-group">
                    <label>"Category:"</label>
                    <select
                        prop:value=move || category.get().as_str()
                        on:change=move |ev| {
                            if let Ok(picked) = event_target_value(&ev).parse() {
                                set_category.set(picked);
                            }
                        }
                        required
                    >
                        <option value="report">"Report"</option>
                        <option value="invoice">"Invoice"</option>
                        <option value="contract">"Contract"</option>
                    </select>
                </div>

                <div class="form-group">
                    <label>"File:"</label>
                    <input type="file" on:change=on_file_change required />
                </div>

                {move || error_message.get().map(|e| view! { <p class="error">{e}</p> })}
                {move || success_message.get().map(|s| view! { <p class="success">{s}</p> })}

                <button type="submit" class="submit-btn">"Upload"</button>
                <button
                    type="button"
                    class="back-btn"
                    on:click=move |_| destination.set(Destination::Documents)
                >
                    "Back to Documents"
                </button>
            </form>
        </div>
    }
}
