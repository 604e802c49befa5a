pub mod routes;

use leptos::prelude::*;

/// Closed set of views the console can show. The navigation
/// collaborator owns no state beyond the current destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Destination {
    #[default]
    Login,
    Signup,
    Dashboard,
    Documents,
    Upload,
}

/// Access the navigation signal provided by `App`.
pub fn use_navigation() -> RwSignal<Destination> {
    use_context::<RwSignal<Destination>>().expect("navigation context not found in component tree")
}
