//! Record builder: drives one pass over a document's lines and produces a `ResumeRecord`.
//!
//! The scan is pure and total: any sequence of strings, including an empty
//! one, yields a record. Header lines only switch the active section. Key-field
//! lines only fill scalars. Every other line goes to the active section, or
//! is ignored when no section is active.

use tracing::debug;

use crate::extraction::assembler::EntryAssembler;
use crate::extraction::classifier::{classify, Signal};
use crate::extraction::key_value::extract_value_after_key;
use crate::extraction::models::{EducationEntry, ResumeRecord, Section, WorkExperienceEntry};
use crate::extraction::section::SectionTracker;

const LIST_SEPARATOR: &str = ", ";

/// Per-scan state. Built fresh for every document.
#[derive(Default)]
pub struct RecordBuilder {
    record: ResumeRecord,
    sections: SectionTracker,
    work_experience: EntryAssembler<WorkExperienceEntry>,
    education: EntryAssembler<EducationEntry>,
    skills: Vec<String>,
    certifications: Vec<String>,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: &str) {
        let signal = classify(line);
        self.sections.observe(&signal);

        match signal {
            Signal::SectionChange(_) => {}
            Signal::KeyFields(fields) => {
                for field in fields {
                    self.record
                        .set_field(field, extract_value_after_key(line, field.key()));
                }
            }
            Signal::NoSignal => self.route_to_section(self.sections.current(), line),
        }
    }

    fn route_to_section(&mut self, section: Section, line: &str) {
        match section {
            Section::WorkExperience => self.work_experience.feed(line),
            Section::Education => self.education.feed(line),
            Section::Skills => self.skills.push(line.to_string()),
            Section::Certifications => self.certifications.push(line.to_string()),
            Section::None => debug!("Ignoring line outside any section"),
        }
    }

    pub fn finish(self) -> ResumeRecord {
        ResumeRecord {
            work_experience: self.work_experience.finish(),
            education: self.education.finish(),
            skills: self.skills.join(LIST_SEPARATOR),
            certifications: self.certifications.join(LIST_SEPARATOR),
            ..self.record
        }
    }
}

/// Builds a record from the ordered lines of one document.
pub fn build_record<I, S>(lines: I) -> ResumeRecord
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = RecordBuilder::new();
    for line in lines {
        builder.push_line(line.as_ref());
    }
    builder.finish()
}
