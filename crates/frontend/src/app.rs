use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::routes::Destination;
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // Navigation state for the whole app: one destination signal
    // provided via context.
    provide_context(RwSignal::new(Destination::Login));

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
