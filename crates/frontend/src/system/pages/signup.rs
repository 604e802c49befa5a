use chrono::Utc;
use contracts::domain::user::{NewUser, Permissions, Status};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::users::api;
use crate::routes::{use_navigation, Destination};
use crate::shared::date_utils::today_string;

/// Create-user form. Validation happens locally before any network
/// call; a failed POST is shown and the form stays put.
#[component]
pub fn SignupPage() -> impl IntoView {
    let (full_name, set_full_name) = signal(String::new());
    let (location, set_location) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (role, set_role) = signal(Permissions::Contributor);
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let destination = use_navigation();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if full_name.get().trim().is_empty()
            || email.get().trim().is_empty()
            || password.get().is_empty()
            || location.get().trim().is_empty()
        {
            set_error_message.set(Some("All fields are required.".to_string()));
            return;
        }

        // The password is collected for the form but not part of the
        // user record sent to the collection endpoint.
        let new_user = NewUser {
            full_name: full_name.get(),
            email: email.get(),
            location: location.get(),
            joined: today_string(Utc::now().date_naive()),
            permissions: role.get(),
            status: Status::Active,
        };

        set_error_message.set(None);

        spawn_local(async move {
            match api::create_user(&new_user).await {
                Ok(()) => destination.set(Destination::Dashboard),
                Err(e) => {
                    log::error!("creating user: {}", e);
                    set_error_message.set(Some("Failed to create user.".to_string()));
                }
            }
        });
    };

    view! {
        <div class="auth-container">
            <div class="auth-box">
                <h2>"Create User Account"</h2>
                <p class="subheading">"Add users to your DMS"</p>

                {move || error_message.get().map(|e| view! { <p class="error">{e}</p> })}

                <form class="auth-form" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Full Name"
                        prop:value=move || full_name.get()
                        on:input=move |ev| set_full_name.set(event_target_value(&ev))
                        required
                    />
                    <input
                        type="text"
                        placeholder="Location"
                        prop:value=move || location.get()
                        on:input=move |ev| set_location.set(event_target_value(&ev))
                        required
                    />
                    <input
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        required
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        required
                    />

                    <div class="select-wrapper">
                        <select
                            prop:value=move || role.get().as_str()
                            on:change=move |ev| {
                                if let Ok(picked) = event_target_value(&ev).parse() {
                                    set_role.set(picked);
                                }
                            }
                            required
                        >
                            <option value="contributor">"Contributor"</option>
                            <option value="admin">"Admin"</option>
                        </select>
                    </div>

                    <button type="submit" class="submit-btn">"Create Account"</button>
                </form>

                <button class="back-btn" on:click=move |_| destination.set(Destination::Dashboard)>
                    "Return to Dashboard"
                </button>

                <footer>"© 2025 All rights reserved."</footer>
            </div>
        </div>
    }
}
