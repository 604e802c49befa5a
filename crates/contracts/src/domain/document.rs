use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Report,
    Invoice,
    Contract,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Report, Category::Invoice, Category::Contract];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Report => "report",
            Category::Invoice => "invoice",
            Category::Contract => "contract",
        }
    }

    /// Capitalized label for dropdowns and table cells.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Report => "Report",
            Category::Invoice => "Invoice",
            Category::Contract => "Contract",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "report" => Ok(Category::Report),
            "invoice" => Ok(Category::Invoice),
            "contract" => Ok(Category::Contract),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    /// Upload date as YYYY-MM-DD.
    pub uploaded: String,
    /// Human-readable size, e.g. "12.40 KB".
    pub size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

/// Payload for POST /documents. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDocument {
    pub name: String,
    pub description: String,
    pub category: Category,
    pub uploaded: String,
    pub size: String,
    pub file_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_tolerates_missing_optional_fields() {
        let json = r#"{
            "id": "7",
            "name": "Invoice Q1",
            "description": "First quarter billing",
            "category": "invoice",
            "uploaded": "2025-03-01",
            "size": "8.12 KB"
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.category, Category::Invoice);
        assert_eq!(doc.file_name, None);

        let back = serde_json::to_value(&doc).unwrap();
        assert!(back.get("fileName").is_none());
    }

    #[test]
    fn category_parse_matches_wire_values() {
        for cat in Category::ALL {
            assert_eq!(cat.as_str().parse(), Ok(cat));
        }
        assert!("memo".parse::<Category>().is_err());
    }
}
