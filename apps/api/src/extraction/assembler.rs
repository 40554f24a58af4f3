//! Entry assembler: a small state machine that folds section lines into entries.
//!
//! Each entry shape decides how one line updates an entry in progress and when
//! the entry is complete. The assembler emits a complete entry immediately and
//! starts a fresh one; whatever is still partial at end of input is dropped.

use tracing::debug;

use crate::extraction::models::{EducationEntry, WorkExperienceEntry};

/// Shape-specific rules for one kind of entry.
pub trait EntryShape: Default + PartialEq {
    /// Label used in logs.
    const KIND: &'static str;

    /// Applies one line. Returns `false` when the line matched no rule and was discarded.
    fn apply(&mut self, line: &str) -> bool;

    fn is_complete(&self) -> bool;
}

impl EntryShape for WorkExperienceEntry {
    const KIND: &'static str = "work_experience";

    fn apply(&mut self, line: &str) -> bool {
        let lower = line.to_ascii_lowercase();
        if lower.contains("company") {
            self.company = Some(line.to_string());
        } else if lower.contains("title") {
            self.job_title = Some(line.to_string());
        } else if lower.contains("date") {
            self.dates = Some(line.to_string());
        } else {
            self.description.push(line.to_string());
        }
        true
    }

    fn is_complete(&self) -> bool {
        self.company.is_some() && self.job_title.is_some() && self.dates.is_some()
    }
}

impl EntryShape for EducationEntry {
    const KIND: &'static str = "education";

    fn apply(&mut self, line: &str) -> bool {
        let lower = line.to_ascii_lowercase();
        if contains_any(&lower, &["degree", "bachelor", "master"]) {
            self.degree = Some(line.to_string());
        } else if contains_any(&lower, &["institution", "university"]) {
            self.institution = Some(line.to_string());
        } else if contains_any(&lower, &["graduation", "date"]) {
            self.graduation_date = Some(line.to_string());
        } else {
            // Unlike work history, education has no free-text field.
            return false;
        }
        true
    }

    fn is_complete(&self) -> bool {
        self.degree.is_some() && self.institution.is_some() && self.graduation_date.is_some()
    }
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| haystack.contains(kw))
}

/// Pure transition: feeds `line` into `current`, returning the next entry in
/// progress and the entry that completed on this line, if any.
pub fn accept<E: EntryShape>(mut current: E, line: &str) -> (E, Option<E>) {
    if !current.apply(line) {
        debug!(kind = E::KIND, "Discarding unmatched line");
    }
    if current.is_complete() {
        (E::default(), Some(current))
    } else {
        (current, None)
    }
}

/// Accumulates completed entries of one shape across a scan.
#[derive(Debug, Default)]
pub struct EntryAssembler<E: EntryShape> {
    current: E,
    completed: Vec<E>,
}

impl<E: EntryShape> EntryAssembler<E> {
    pub fn feed(&mut self, line: &str) {
        let (next, emitted) = accept(std::mem::take(&mut self.current), line);
        self.current = next;
        if let Some(entry) = emitted {
            self.completed.push(entry);
        }
    }

    /// Ends the scan. A partially filled entry is not emitted.
    pub fn finish(self) -> Vec<E> {
        if self.current != E::default() {
            debug!(kind = E::KIND, "Dropping incomplete trailing entry");
        }
        self.completed
    }
}
