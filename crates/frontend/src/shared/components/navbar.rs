use leptos::prelude::*;

use crate::routes::{use_navigation, Destination};
use crate::system::auth::context::{use_auth, AuthState};

/// Top bar with the Users/Documents cross-link and Logout.
#[component]
pub fn Navbar(
    /// View the navbar is rendered on; decides which cross-link shows.
    current: Destination,
) -> impl IntoView {
    let destination = use_navigation();
    let auth_state = use_auth();

    let handle_logout = move |_| {
        auth_state.set(AuthState::default());
        destination.set(Destination::Login);
    };

    view! {
        <nav class="navbar">
            <div class="navbar-left">
                <span class="navbar-title">"Document Management Console"</span>
            </div>
            <div class="navbar-right">
                {match current {
                    Destination::Dashboard => view! {
                        <button
                            class="nav-link-btn"
                            on:click=move |_| destination.set(Destination::Documents)
                        >
                            "Documents"
                        </button>
                    }
                    .into_any(),
                    Destination::Documents => view! {
                        <button
                            class="nav-link-btn"
                            on:click=move |_| destination.set(Destination::Dashboard)
                        >
                            "Users"
                        </button>
                    }
                    .into_any(),
                    _ => view! { <></> }.into_any(),
                }}
                <button class="logout-btn" on:click=handle_logout>"Logout"</button>
            </div>
        </nav>
    }
}
