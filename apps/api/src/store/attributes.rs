//! Typed attribute-map encoding of a `ResumeRecord` as it is persisted.
//!
//! Every value carries its type tag: `{"S": "..."}` for strings,
//! `{"L": [...]}` for lists and `{"M": {...}}` for maps. Downstream consumers
//! read this encoding, not the in-memory record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::extraction::models::{EducationEntry, ResumeRecord, WorkExperienceEntry};

pub type AttributeMap = BTreeMap<String, AttributeValue>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeValue {
    S(String),
    L(Vec<AttributeValue>),
    M(AttributeMap),
}

impl AttributeValue {
    pub fn as_s(&self) -> Option<&str> {
        match self {
            AttributeValue::S(s) => Some(s),
            _ => None,
        }
    }
}

fn s(value: &str) -> AttributeValue {
    AttributeValue::S(value.to_string())
}

fn put_opt(map: &mut AttributeMap, key: &str, value: &Option<String>) {
    if let Some(v) = value {
        map.insert(key.to_string(), s(v));
    }
}

fn work_entry_to_attribute(entry: &WorkExperienceEntry) -> AttributeValue {
    let mut map = AttributeMap::new();
    put_opt(&mut map, "Company", &entry.company);
    put_opt(&mut map, "JobTitle", &entry.job_title);
    put_opt(&mut map, "Dates", &entry.dates);
    if !entry.description.is_empty() {
        map.insert(
            "Description".to_string(),
            AttributeValue::L(entry.description.iter().map(|d| s(d)).collect()),
        );
    }
    AttributeValue::M(map)
}

fn education_entry_to_attribute(entry: &EducationEntry) -> AttributeValue {
    let mut map = AttributeMap::new();
    put_opt(&mut map, "Degree", &entry.degree);
    put_opt(&mut map, "Institution", &entry.institution);
    put_opt(&mut map, "GraduationDate", &entry.graduation_date);
    AttributeValue::M(map)
}

pub fn to_attribute_map(record: &ResumeRecord) -> AttributeMap {
    let mut map = AttributeMap::new();
    for (key, value) in [
        ("Name", &record.name),
        ("Email", &record.email),
        ("Phone", &record.phone),
        ("Skills", &record.skills),
        ("Certifications", &record.certifications),
        ("LinkedIn", &record.linkedin),
        ("GitHub", &record.github),
    ] {
        map.insert(key.to_string(), s(value));
    }
    map.insert(
        "WorkExperience".to_string(),
        AttributeValue::L(
            record
                .work_experience
                .iter()
                .map(work_entry_to_attribute)
                .collect(),
        ),
    );
    map.insert(
        "Education".to_string(),
        AttributeValue::L(
            record
                .education
                .iter()
                .map(education_entry_to_attribute)
                .collect(),
        ),
    );
    map
}
