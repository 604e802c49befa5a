use contracts::system::auth::{AuthSession, Role};
use leptos::prelude::*;

/// Auth state passed to views through context rather than a global
/// store: role and authentication flag are read from here, never from
/// ambient state. An absent session means no elevated privileges.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<AuthSession>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let auth_state = RwSignal::new(AuthState::default());
    provide_context(auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> RwSignal<AuthState> {
    use_context::<RwSignal<AuthState>>().expect("AuthProvider not found in component tree")
}

/// Helper: reactive admin check for gating action buttons.
pub fn is_admin() -> Signal<bool> {
    let auth_state = use_auth();
    Signal::derive(move || auth_state.get().is_admin())
}
