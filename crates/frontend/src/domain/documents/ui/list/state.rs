use chrono::{NaiveDate, Utc};
use contracts::domain::document::Document;

use crate::shared::date_utils::parse_date;
use crate::shared::list_view::{Editable, ListRecord, ListViewModel};

pub const ROWS_PER_PAGE: usize = 5;

impl ListRecord for Document {
    fn id(&self) -> &str {
        &self.id
    }

    fn matches_search(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(term) || self.description.to_lowercase().contains(term)
    }

    fn category(&self) -> &str {
        self.category.as_str()
    }

    fn date(&self) -> Option<NaiveDate> {
        parse_date(&self.uploaded)
    }
}

impl Editable for Document {
    fn id(&self) -> &str {
        &self.id
    }

    fn apply_field(&mut self, field: &str, value: &str) -> bool {
        match field {
            "name" => self.name = value.to_string(),
            "description" => self.description = value.to_string(),
            "category" => match value.parse() {
                Ok(c) => self.category = c,
                Err(()) => return false,
            },
            _ => return false,
        }
        true
    }
}

pub fn create_model() -> ListViewModel<Document> {
    ListViewModel::new(ROWS_PER_PAGE, Utc::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::document::Category;

    fn document() -> Document {
        Document {
            id: "7".into(),
            name: "Invoice Q1".into(),
            description: "First quarter billing".into(),
            category: Category::Invoice,
            uploaded: "2025-03-01".into(),
            size: "8.12 KB".into(),
            file_name: None,
            download_url: None,
        }
    }

    #[test]
    fn search_covers_name_and_description() {
        let d = document();
        assert!(d.matches_search("inv"));
        assert!(d.matches_search("billing"));
        assert!(!d.matches_search("contract"));
    }

    #[test]
    fn category_edit_rejects_unknown_values() {
        let mut d = document();
        assert!(d.apply_field("category", "report"));
        assert_eq!(d.category, Category::Report);
        assert!(!d.apply_field("category", "memo"));
        assert!(!d.apply_field("size", "1 KB"));
    }
}
