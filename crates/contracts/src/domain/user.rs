use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Access level granted to a console user.
///
/// Serialized lowercase to match the mock server's records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permissions {
    Admin,
    Contributor,
}

impl Permissions {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permissions::Admin => "admin",
            Permissions::Contributor => "contributor",
        }
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permissions {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Permissions::Admin),
            "contributor" => Ok(Permissions::Contributor),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Inactive,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
        }
    }

    pub fn toggled(&self) -> Status {
        match self {
            Status::Active => Status::Inactive,
            Status::Inactive => Status::Active,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub location: String,
    /// Join date as YYYY-MM-DD.
    pub joined: String,
    pub permissions: Permissions,
    pub status: Status,
}

/// Payload for POST /users. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub location: String,
    pub joined: String,
    pub permissions: Permissions,
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_round_trips_with_camel_case_wire_names() {
        let json = r#"{
            "id": "3",
            "fullName": "Ada Lovelace",
            "email": "ada@example.com",
            "location": "London",
            "joined": "2024-01-15",
            "permissions": "admin",
            "status": "active"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.full_name, "Ada Lovelace");
        assert_eq!(user.permissions, Permissions::Admin);

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["fullName"], "Ada Lovelace");
        assert_eq!(back["status"], "active");
    }

    #[test]
    fn permissions_parse_is_strict() {
        assert_eq!("contributor".parse(), Ok(Permissions::Contributor));
        assert!("superuser".parse::<Permissions>().is_err());
    }

    #[test]
    fn status_toggles_between_the_two_states() {
        assert_eq!(Status::Active.toggled(), Status::Inactive);
        assert_eq!(Status::Inactive.toggled(), Status::Active);
    }
}
