use chrono::{NaiveDate, Utc};
use contracts::domain::user::User;

use crate::shared::date_utils::parse_date;
use crate::shared::list_view::{Editable, ListRecord, ListViewModel};

pub const ROWS_PER_PAGE: usize = 6;

impl ListRecord for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn matches_search(&self, term: &str) -> bool {
        self.full_name.to_lowercase().contains(term) || self.email.to_lowercase().contains(term)
    }

    fn category(&self) -> &str {
        self.permissions.as_str()
    }

    fn date(&self) -> Option<NaiveDate> {
        parse_date(&self.joined)
    }
}

impl Editable for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn apply_field(&mut self, field: &str, value: &str) -> bool {
        match field {
            "full_name" => self.full_name = value.to_string(),
            "email" => self.email = value.to_string(),
            "location" => self.location = value.to_string(),
            "permissions" => match value.parse() {
                Ok(p) => self.permissions = p,
                Err(()) => return false,
            },
            _ => return false,
        }
        true
    }
}

pub fn create_model() -> ListViewModel<User> {
    ListViewModel::new(ROWS_PER_PAGE, Utc::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::user::{Permissions, Status};

    fn user() -> User {
        User {
            id: "1".into(),
            full_name: "Grace Hopper".into(),
            email: "grace@example.com".into(),
            location: "Arlington".into(),
            joined: "2024-11-02".into(),
            permissions: Permissions::Admin,
            status: Status::Active,
        }
    }

    #[test]
    fn search_covers_name_and_email() {
        let u = user();
        assert!(u.matches_search("hopper"));
        assert!(u.matches_search("grace@"));
        assert!(!u.matches_search("arlington"));
    }

    #[test]
    fn permissions_edit_rejects_unknown_values() {
        let mut u = user();
        assert!(u.apply_field("permissions", "contributor"));
        assert_eq!(u.permissions, Permissions::Contributor);
        assert!(!u.apply_field("permissions", "root"));
        assert!(!u.apply_field("status", "inactive"));
    }
}
