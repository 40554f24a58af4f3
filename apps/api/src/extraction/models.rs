use serde::{Deserialize, Serialize};

/// Document region the scan is currently inside, inferred from header lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    #[default]
    None,
    WorkExperience,
    Education,
    Skills,
    Certifications,
}

/// Scalar record fields that can be filled from a `key: value` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyField {
    Name,
    Email,
    Phone,
    LinkedIn,
    GitHub,
}

impl KeyField {
    /// Delimiter key looked up in the line, without the trailing colon.
    pub fn key(self) -> &'static str {
        match self {
            KeyField::Name => "name",
            KeyField::Email => "email",
            KeyField::Phone => "phone",
            KeyField::LinkedIn => "linkedin",
            KeyField::GitHub => "github",
        }
    }
}

/// One job assembled from consecutive lines of the experience section.
///
/// Classified fields hold the whole source line, e.g. `"Company: Acme"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperienceEntry {
    #[serde(rename = "Company")]
    pub company: Option<String>,
    #[serde(rename = "JobTitle")]
    pub job_title: Option<String>,
    #[serde(rename = "Dates")]
    pub dates: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: Vec<String>,
}

/// One degree assembled from consecutive lines of the education section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(rename = "Degree")]
    pub degree: Option<String>,
    #[serde(rename = "Institution")]
    pub institution: Option<String>,
    #[serde(rename = "GraduationDate")]
    pub graduation_date: Option<String>,
}

/// Structured output of one scanned résumé.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "WorkExperience")]
    pub work_experience: Vec<WorkExperienceEntry>,
    #[serde(rename = "Education")]
    pub education: Vec<EducationEntry>,
    #[serde(rename = "Skills")]
    pub skills: String,
    #[serde(rename = "Certifications")]
    pub certifications: String,
    #[serde(rename = "LinkedIn")]
    pub linkedin: String,
    #[serde(rename = "GitHub")]
    pub github: String,
}

impl ResumeRecord {
    pub fn set_field(&mut self, field: KeyField, value: String) {
        match field {
            KeyField::Name => self.name = value,
            KeyField::Email => self.email = value,
            KeyField::Phone => self.phone = value,
            KeyField::LinkedIn => self.linkedin = value,
            KeyField::GitHub => self.github = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_with_pascal_case_keys() {
        let record = ResumeRecord {
            linkedin: "in/jane".to_string(),
            github: "jane".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["LinkedIn"], "in/jane");
        assert_eq!(json["GitHub"], "jane");
        assert_eq!(json["WorkExperience"], serde_json::json!([]));
        assert!(json.get("linkedin").is_none());
    }

    #[test]
    fn test_section_default_is_none() {
        assert_eq!(Section::default(), Section::None);
    }

    #[test]
    fn test_set_field_targets_matching_scalar() {
        let mut record = ResumeRecord::default();
        record.set_field(KeyField::Phone, "555-0100".to_string());
        assert_eq!(record.phone, "555-0100");
        assert!(record.name.is_empty());
    }
}
