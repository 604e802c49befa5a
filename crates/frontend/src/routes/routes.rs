use leptos::prelude::*;

use crate::domain::documents::ui::list::DocumentListPage;
use crate::domain::documents::ui::upload::UploadDocumentPage;
use crate::domain::users::ui::list::DashboardPage;
use crate::routes::{use_navigation, Destination};
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::signup::SignupPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let destination = use_navigation();

    view! {
        <div class="content">
            {move || match destination.get() {
                Destination::Login => view! { <LoginPage /> }.into_any(),
                Destination::Signup => view! {
                    <RequireAuth>
                        <SignupPage />
                    </RequireAuth>
                }
                .into_any(),
                Destination::Dashboard => view! {
                    <RequireAuth>
                        <DashboardPage />
                    </RequireAuth>
                }
                .into_any(),
                Destination::Documents => view! {
                    <RequireAuth>
                        <DocumentListPage />
                    </RequireAuth>
                }
                .into_any(),
                Destination::Upload => view! {
                    <RequireAuth>
                        <UploadDocumentPage />
                    </RequireAuth>
                }
                .into_any(),
            }}
        </div>
    }
}
