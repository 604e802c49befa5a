use contracts::system::auth::{AuthSession, Role};
use thiserror::Error;

/// Hardcoded credential list, compared entirely in the browser. There
/// is no token issuance and nothing is enforced server-side.
const KNOWN_USERS: &[(&str, &str, Role)] = &[
    ("admin", "pass123", Role::Admin),
    ("user", "userpass", Role::Contributor),
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Selected role does not match credentials")]
    RoleMismatch,
}

/// Match the submitted credentials against the known list. The role
/// picked in the login form must agree with the one on the credential.
pub fn authenticate(
    username: &str,
    password: &str,
    requested_role: Role,
) -> Result<AuthSession, LoginError> {
    let (name, _, role) = KNOWN_USERS
        .iter()
        .find(|(name, pass, _)| *name == username && *pass == password)
        .ok_or(LoginError::InvalidCredentials)?;

    if *role != requested_role {
        return Err(LoginError::RoleMismatch);
    }

    Ok(AuthSession {
        username: name.to_string(),
        role: *role,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_credentials_yield_a_session_with_the_matching_role() {
        let session = authenticate("admin", "pass123", Role::Admin).unwrap();
        assert_eq!(session.username, "admin");
        assert_eq!(session.role, Role::Admin);

        let session = authenticate("user", "userpass", Role::Contributor).unwrap();
        assert_eq!(session.role, Role::Contributor);
    }

    #[test]
    fn wrong_password_is_rejected() {
        assert_eq!(
            authenticate("admin", "nope", Role::Admin),
            Err(LoginError::InvalidCredentials)
        );
    }

    #[test]
    fn role_must_match_the_credential() {
        assert_eq!(
            authenticate("user", "userpass", Role::Admin),
            Err(LoginError::RoleMismatch)
        );
    }
}
