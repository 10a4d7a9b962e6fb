//! The roster: ordered collection of students with CRUD and aggregates
//!
//! Insertion order is preserved and ids are unique, compared
//! case-insensitively. Lookups are linear scans; the roster is small and
//! lives entirely in memory.

use serde::{Deserialize, Serialize};

use crate::error::{MarkbookError, Result};
use crate::student::{Grade, Student};

/// Ordered collection of student records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }

    /// Add a new student with every subject zeroed
    pub fn add(&mut self, name: &str, id: &str, subjects: &[String]) -> Result<&Student> {
        if self.find_by_id(id).is_some() {
            return Err(MarkbookError::DuplicateId { id: id.to_string() });
        }
        self.students.push(Student::new(name, id, subjects));
        Ok(self.students.last().expect("roster is non-empty after push"))
    }

    /// First student whose id matches, case-insensitively
    pub fn find_by_id(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id().eq_ignore_ascii_case(id))
    }

    /// All students whose name contains the query, case-insensitively,
    /// in roster order
    pub fn find_by_name(&self, query: &str) -> Vec<&Student> {
        let needle = query.to_lowercase();
        self.students
            .iter()
            .filter(|s| s.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Apply a partial mark update.
    ///
    /// Omitted subjects are left untouched. Every pair is validated against
    /// the student's subjects before any mark is written, so a bad pair
    /// leaves the record unchanged.
    pub fn update(&mut self, id: &str, marks: &[(String, f64)]) -> Result<&Student> {
        let pos = self.position(id)?;
        for (subject, _) in marks {
            if !self.students[pos].has_subject(subject) {
                return Err(MarkbookError::UnknownSubject {
                    subject: subject.clone(),
                });
            }
        }
        for (subject, value) in marks {
            self.students[pos].set_mark(subject, *value)?;
        }
        Ok(&self.students[pos])
    }

    /// Remove and return the student with the given id
    pub fn remove(&mut self, id: &str) -> Result<Student> {
        let pos = self.position(id)?;
        Ok(self.students.remove(pos))
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.students
            .iter()
            .position(|s| s.id().eq_ignore_ascii_case(id))
            .ok_or_else(|| MarkbookError::StudentNotFound { id: id.to_string() })
    }

    /// Aggregate class statistics. `None` when the roster is empty.
    pub fn report(&self) -> Option<ClassReport> {
        let first = self.students.first()?;
        let total = self.students.len();
        let average_gpa =
            self.students.iter().map(Student::gpa).sum::<f64>() / total as f64;

        // ties go to the earliest student, so strictly-greater only
        let mut top = first;
        for student in &self.students[1..] {
            if student.gpa() > top.gpa() {
                top = student;
            }
        }

        let distribution = Grade::ALL
            .iter()
            .map(|&grade| {
                let count = self.students.iter().filter(|s| s.grade() == grade).count();
                GradeCount {
                    grade,
                    count,
                    percent: count as f64 * 100.0 / total as f64,
                }
            })
            .collect();

        Some(ClassReport {
            total,
            average_gpa,
            top: TopStudent {
                id: top.id().to_string(),
                name: top.name().to_string(),
                gpa: top.gpa(),
            },
            distribution,
        })
    }
}

/// Aggregate class statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassReport {
    pub total: usize,
    pub average_gpa: f64,
    pub top: TopStudent,
    pub distribution: Vec<GradeCount>,
}

/// The student with the highest GPA
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopStudent {
    pub id: String,
    pub name: String,
    pub gpa: f64,
}

/// Count and share of the class for one letter grade.
///
/// Zero counts are included; display layers decide whether to show them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeCount {
    pub grade: Grade,
    pub count: usize,
    pub percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subjects() -> Vec<String> {
        ["Mathematics", "Physics", "Chemistry", "Programming", "English"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn roster_with(entries: &[(&str, &str, f64)]) -> Roster {
        let mut roster = Roster::new();
        for (name, id, mark) in entries {
            roster.add(name, id, &subjects()).unwrap();
            let pairs: Vec<(String, f64)> =
                subjects().iter().map(|s| (s.clone(), *mark)).collect();
            roster.update(id, &pairs).unwrap();
        }
        roster
    }

    #[test]
    fn test_add_and_find() {
        let mut roster = Roster::new();
        roster.add("Alice", "S1", &subjects()).unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.find_by_id("S1").unwrap().name(), "Alice");
        assert_eq!(roster.find_by_id("s1").unwrap().name(), "Alice");
        assert!(roster.find_by_id("S2").is_none());
    }

    #[test]
    fn test_add_duplicate_id_case_insensitive() {
        let mut roster = Roster::new();
        roster.add("Alice", "S1", &subjects()).unwrap();
        let err = roster.add("Bob", "s1", &subjects()).unwrap_err();
        assert!(matches!(err, MarkbookError::DuplicateId { .. }));
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.find_by_id("S1").unwrap().name(), "Alice");
    }

    #[test]
    fn test_find_by_name_substring() {
        let mut roster = Roster::new();
        roster.add("Alice Smith", "S1", &subjects()).unwrap();
        roster.add("Bob Smith", "S2", &subjects()).unwrap();
        roster.add("Carol Jones", "S3", &subjects()).unwrap();

        let smiths = roster.find_by_name("smith");
        assert_eq!(smiths.len(), 2);
        assert_eq!(smiths[0].id(), "S1");
        assert_eq!(smiths[1].id(), "S2");

        assert!(roster.find_by_name("zzz").is_empty());
    }

    #[test]
    fn test_update_partial() {
        let mut roster = Roster::new();
        roster.add("Alice", "S1", &subjects()).unwrap();
        roster
            .update(
                "S1",
                &[
                    ("Mathematics".to_string(), 95.0),
                    ("Physics".to_string(), 85.0),
                    ("Chemistry".to_string(), 75.0),
                    ("Programming".to_string(), 100.0),
                    ("English".to_string(), 70.0),
                ],
            )
            .unwrap();
        assert_eq!(roster.find_by_id("S1").unwrap().gpa(), 85.0);
        assert_eq!(roster.find_by_id("S1").unwrap().grade(), Grade::A);

        let student = roster
            .update("S1", &[("Mathematics".to_string(), 50.0)])
            .unwrap();
        assert_eq!(student.gpa(), 76.0);
        assert_eq!(student.grade(), Grade::B);
        // untouched subjects keep their marks
        assert_eq!(student.mark("Physics"), Some(85.0));
    }

    #[test]
    fn test_update_missing_student() {
        let mut roster = Roster::new();
        let err = roster
            .update("S9", &[("Mathematics".to_string(), 50.0)])
            .unwrap_err();
        assert!(matches!(err, MarkbookError::StudentNotFound { .. }));
    }

    #[test]
    fn test_update_unknown_subject_applies_nothing() {
        let mut roster = Roster::new();
        roster.add("Alice", "S1", &subjects()).unwrap();
        let err = roster
            .update(
                "S1",
                &[
                    ("Mathematics".to_string(), 95.0),
                    ("Latin".to_string(), 80.0),
                ],
            )
            .unwrap_err();
        assert!(matches!(err, MarkbookError::UnknownSubject { .. }));
        // the valid pair before the bad one was not applied either
        assert_eq!(roster.find_by_id("S1").unwrap().mark("Mathematics"), Some(0.0));
    }

    #[test]
    fn test_remove() {
        let mut roster = Roster::new();
        roster.add("Alice", "S1", &subjects()).unwrap();
        roster.add("Bob", "S2", &subjects()).unwrap();

        let removed = roster.remove("s1").unwrap();
        assert_eq!(removed.id(), "S1");
        assert_eq!(roster.len(), 1);
        assert!(roster.find_by_id("S1").is_none());

        let err = roster.remove("S1").unwrap_err();
        assert!(matches!(err, MarkbookError::StudentNotFound { .. }));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_report_empty_roster() {
        assert!(Roster::new().report().is_none());
    }

    #[test]
    fn test_report_aggregates() {
        let roster = roster_with(&[("Alice", "S1", 95.0), ("Bob", "S2", 65.0)]);
        let report = roster.report().unwrap();

        assert_eq!(report.total, 2);
        assert_eq!(report.average_gpa, 80.0);
        assert_eq!(report.top.id, "S1");
        assert_eq!(report.top.gpa, 95.0);

        let counts: usize = report.distribution.iter().map(|g| g.count).sum();
        assert_eq!(counts, report.total);
        assert_eq!(report.distribution.len(), Grade::ALL.len());

        let a_plus = &report.distribution[0];
        assert_eq!(a_plus.grade, Grade::APlus);
        assert_eq!(a_plus.count, 1);
        assert_eq!(a_plus.percent, 50.0);
    }

    #[test]
    fn test_report_top_tie_goes_to_first() {
        let roster = roster_with(&[
            ("Alice", "S1", 90.0),
            ("Bob", "S2", 90.0),
            ("Carol", "S3", 10.0),
        ]);
        let report = roster.report().unwrap();
        assert_eq!(report.top.id, "S1");
    }

    #[test]
    fn test_report_average_is_mean_of_gpas() {
        let roster = roster_with(&[
            ("Alice", "S1", 90.0),
            ("Bob", "S2", 50.0),
            ("Carol", "S3", 70.0),
        ]);
        let report = roster.report().unwrap();
        let mean = roster.iter().map(Student::gpa).sum::<f64>() / roster.len() as f64;
        assert_eq!(report.average_gpa, mean);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let roster = roster_with(&[
            ("Carol", "S3", 10.0),
            ("Alice", "S1", 20.0),
            ("Bob", "S2", 30.0),
        ]);
        let ids: Vec<&str> = roster.iter().map(Student::id).collect();
        assert_eq!(ids, vec!["S3", "S1", "S2"]);
    }
}
