use contracts::system::auth::Role;
use leptos::prelude::*;

use crate::routes::{use_navigation, Destination};
use crate::system::auth::context::{use_auth, AuthState};
use crate::system::auth::credentials::authenticate;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (role, set_role) = signal(Role::Admin);
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let destination = use_navigation();
    let auth_state = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        match authenticate(&username.get(), &password.get(), role.get()) {
            Ok(session) => {
                auth_state.set(AuthState {
                    session: Some(session),
                });
                destination.set(Destination::Dashboard);
            }
            Err(e) => set_error_message.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="auth-container">
            <div class="auth-box">
                <h2>"Login"</h2>
                <p class="subheading">"Welcome back! Please log in to your account."</p>

                <form class="auth-form" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        required
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        required
                    />

                    <p class="forgot-password">"Forgot password? Contact HR."</p>

                    <div class="dropdown-container">
                        <label for="role">"Login as?"</label>
                        <select
                            id="role"
                            class="dropdown"
                            prop:value=move || role.get().as_str()
                            on:change=move |ev| {
                                if let Ok(picked) = event_target_value(&ev).parse() {
                                    set_role.set(picked);
                                }
                            }
                        >
                            <option value="admin">"Admin"</option>
                            <option value="contributor">"Contributor"</option>
                        </select>
                    </div>

                    <button type="submit" class="submit-btn">"Log in"</button>
                </form>

                {move || error_message.get().map(|e| view! { <p class="error">{e}</p> })}

                <footer>"© 2025 All rights reserved."</footer>
            </div>
        </div>
    }
}
