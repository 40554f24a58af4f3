use serde::{Deserialize, Serialize};

use crate::store::attributes::AttributeMap;
use crate::store::StoredItem;

/// Placeholder for any attribute that is missing or not a plain string.
pub const MISSING: &str = "N/A";

/// Message body published when a new record has been stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPayload {
    #[serde(rename = "Document")]
    pub document: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "WorkExperience")]
    pub work_experience: String,
    #[serde(rename = "Education")]
    pub education: String,
    #[serde(rename = "Skills")]
    pub skills: String,
    #[serde(rename = "Certifications")]
    pub certifications: String,
    #[serde(rename = "LinkedIn")]
    pub linkedin: String,
    #[serde(rename = "GitHub")]
    pub github: String,
}

fn string_or_missing(data: &AttributeMap, key: &str) -> String {
    data.get(key)
        .and_then(|v| v.as_s())
        .unwrap_or(MISSING)
        .to_string()
}

/// Reads the payload out of the stored representation.
///
/// List-valued attributes (work history, education) have no string form and
/// therefore always come through as `"N/A"`.
pub fn build_payload(document_key: &str, data: &AttributeMap) -> NotificationPayload {
    NotificationPayload {
        document: document_key.to_string(),
        name: string_or_missing(data, "Name"),
        email: string_or_missing(data, "Email"),
        work_experience: string_or_missing(data, "WorkExperience"),
        education: string_or_missing(data, "Education"),
        skills: string_or_missing(data, "Skills"),
        certifications: string_or_missing(data, "Certifications"),
        linkedin: string_or_missing(data, "LinkedIn"),
        github: string_or_missing(data, "GitHub"),
    }
}

pub fn subject_for(document_key: &str) -> String {
    format!("New CV Processed: {document_key}")
}

/// Subject and pretty-printed JSON message for one stored item.
pub fn render_notification(item: &StoredItem) -> Result<(String, String), serde_json::Error> {
    let payload = build_payload(&item.document_key, &item.extracted_data);
    let message = serde_json::to_string_pretty(&payload)?;
    Ok((subject_for(&item.document_key), message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::build_record;
    use crate::store::attributes::{to_attribute_map, AttributeValue};

    #[test]
    fn test_absent_attributes_default_to_na() {
        let payload = build_payload("cv/empty.pdf", &AttributeMap::new());
        assert_eq!(payload.document, "cv/empty.pdf");
        assert_eq!(payload.name, "N/A");
        assert_eq!(payload.github, "N/A");
    }

    #[test]
    fn test_string_attributes_pass_through() {
        let record = build_record(["Name: Jane Doe", "Email: jane@x.com"]);
        let payload = build_payload("cv/jane.pdf", &to_attribute_map(&record));
        assert_eq!(payload.name, "Jane Doe");
        assert_eq!(payload.email, "jane@x.com");
        // Present but empty strings are not replaced.
        assert_eq!(payload.skills, "");
    }

    #[test]
    fn test_work_experience_without_string_form_is_na() {
        let record = build_record([
            "Experience",
            "Company: Acme",
            "Title: Engineer",
            "Date: 2020-2022",
        ]);
        assert_eq!(record.work_experience.len(), 1);

        let mut data = to_attribute_map(&record);
        let payload = build_payload("cv/jane.pdf", &data);
        assert_eq!(payload.work_experience, "N/A");
        assert_eq!(payload.education, "N/A");

        data.remove("WorkExperience");
        let payload = build_payload("cv/jane.pdf", &data);
        assert_eq!(payload.work_experience, "N/A");
    }

    #[test]
    fn test_string_valued_work_experience_is_used() {
        let mut data = AttributeMap::new();
        data.insert(
            "WorkExperience".to_string(),
            AttributeValue::S("Acme 2020".to_string()),
        );
        assert_eq!(build_payload("k", &data).work_experience, "Acme 2020");
    }

    #[test]
    fn test_render_uses_subject_and_pretty_json() {
        let item = StoredItem::new("uploads/jane.pdf", &build_record(["Name: Jane"]));
        let (subject, message) = render_notification(&item).unwrap();
        assert_eq!(subject, "New CV Processed: uploads/jane.pdf");
        assert!(message.starts_with("{\n  \"Document\": \"uploads/jane.pdf\",\n  \"Name\": \"Jane\""));
        let decoded: NotificationPayload = serde_json::from_str(&message).unwrap();
        assert_eq!(decoded.linkedin, "");
    }
}
