//! Line classifier: maps one text line to a routing signal using keyword rules.
//!
//! Rules are ordered tables evaluated top to bottom; matching is a
//! case-insensitive substring test. Section keywords are exclusive: a header
//! line never also fills a scalar field.

use crate::extraction::models::{KeyField, Section};

/// Routing decision for a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    SectionChange(Section),
    /// One or more scalar fields, in rule order. Never empty.
    KeyFields(Vec<KeyField>),
    NoSignal,
}

/// Section headers, first match wins.
pub const SECTION_RULES: &[(&str, Section)] = &[
    ("experience", Section::WorkExperience),
    ("education", Section::Education),
    ("skills", Section::Skills),
    ("certifications", Section::Certifications),
];

/// Profile links, first match wins, checked only when no section rule fired.
pub const LINK_RULES: &[(&str, KeyField)] = &[
    ("linkedin", KeyField::LinkedIn),
    ("github", KeyField::GitHub),
];

/// Contact fields, all of them tested independently.
pub const CONTACT_RULES: &[(&str, KeyField)] = &[
    ("name", KeyField::Name),
    ("email", KeyField::Email),
    ("phone", KeyField::Phone),
];

pub fn classify(line: &str) -> Signal {
    let lower = line.to_ascii_lowercase();

    if let Some((_, section)) = SECTION_RULES.iter().find(|(kw, _)| lower.contains(kw)) {
        return Signal::SectionChange(*section);
    }

    if let Some((_, field)) = LINK_RULES.iter().find(|(kw, _)| lower.contains(kw)) {
        return Signal::KeyFields(vec![*field]);
    }

    let fields: Vec<KeyField> = CONTACT_RULES
        .iter()
        .filter(|(kw, _)| lower.contains(kw))
        .map(|(_, field)| *field)
        .collect();

    if fields.is_empty() {
        Signal::NoSignal
    } else {
        Signal::KeyFields(fields)
    }
}
