//! Student records and grade derivation

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{MarkbookError, Result};

/// Letter grade derived from a student's GPA
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// All letters, best first
    pub const ALL: [Grade; 6] = [Grade::APlus, Grade::A, Grade::B, Grade::C, Grade::D, Grade::F];

    /// Map a GPA to a letter.
    ///
    /// Thresholds are right-inclusive lower bounds, evaluated highest-first.
    pub fn from_gpa(gpa: f64) -> Self {
        match gpa {
            g if g >= 90.0 => Grade::APlus,
            g if g >= 80.0 => Grade::A,
            g if g >= 70.0 => Grade::B,
            g if g >= 60.0 => Grade::C,
            g if g >= 50.0 => Grade::D,
            _ => Grade::F,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        write!(f, "{}", letter)
    }
}

/// A single student record.
///
/// `gpa` and `grade` are derived from `marks` and recomputed eagerly on
/// every mutation; they are persisted alongside the marks so the roster
/// file is self-describing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    id: String,
    name: String,
    marks: BTreeMap<String, f64>,
    gpa: f64,
    grade: Grade,
    created: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated: Option<DateTime<Utc>>,
}

impl Student {
    /// Create a student enrolled in the given subjects, all marks zeroed
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        subjects: &[String],
    ) -> Self {
        let marks: BTreeMap<String, f64> =
            subjects.iter().map(|s| (s.clone(), 0.0)).collect();
        let mut student = Student {
            id: id.into(),
            name: name.into(),
            marks,
            gpa: 0.0,
            grade: Grade::F,
            created: Utc::now(),
            updated: None,
        };
        student.recompute();
        student
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gpa(&self) -> f64 {
        self.gpa
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn updated(&self) -> Option<DateTime<Utc>> {
        self.updated
    }

    /// Subject/mark pairs in deterministic (alphabetical) order
    pub fn marks(&self) -> impl Iterator<Item = (&str, f64)> {
        self.marks.iter().map(|(s, m)| (s.as_str(), *m))
    }

    /// The mark for one subject, if the student carries it
    pub fn mark(&self, subject: &str) -> Option<f64> {
        self.marks.get(subject).copied()
    }

    pub fn has_subject(&self, subject: &str) -> bool {
        self.marks.contains_key(subject)
    }

    /// Set the mark for one subject.
    ///
    /// Values outside [0, 100] are silently clamped, never rejected;
    /// non-finite values are stored as 0. GPA and grade are recomputed
    /// before returning.
    pub fn set_mark(&mut self, subject: &str, value: f64) -> Result<()> {
        let Some(entry) = self.marks.get_mut(subject) else {
            return Err(MarkbookError::UnknownSubject {
                subject: subject.to_string(),
            });
        };
        *entry = clamp_mark(value);
        self.updated = Some(Utc::now());
        self.recompute();
        Ok(())
    }

    fn recompute(&mut self) {
        self.gpa = if self.marks.is_empty() {
            0.0
        } else {
            self.marks.values().sum::<f64>() / self.marks.len() as f64
        };
        self.grade = Grade::from_gpa(self.gpa);
    }
}

fn clamp_mark(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}
