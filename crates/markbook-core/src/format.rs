//! Output format handling and human rendering
//!
//! Two output formats:
//! - human: readable output for terminal use
//! - json: stable, machine-readable JSON
//!
//! The human renderings for a student, the roster table, and the class
//! report live here so the subcommands and the interactive session print
//! identical text.

use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MarkbookError;
use crate::roster::{ClassReport, Roster};
use crate::student::Student;

/// Output format for markbook commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = MarkbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(MarkbookError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render one student in full: id, name, every subject mark, GPA, grade
pub fn student_details(student: &Student) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Student ID: {}", student.id());
    let _ = writeln!(out, "Name: {}", student.name());
    let _ = writeln!(out, "Subjects and marks:");
    for (subject, mark) in student.marks() {
        let _ = writeln!(out, "  {:<15} {:>6.2}", subject, mark);
    }
    let _ = writeln!(out, "GPA: {:.2}", student.gpa());
    let _ = writeln!(out, "Grade: {}", student.grade());
    out
}

/// Render the roster as an aligned table of id, name, GPA, grade
pub fn roster_table(roster: &Roster) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<10} {:<20} {:>8} {:>6}", "ID", "Name", "GPA", "Grade");
    let _ = writeln!(out, "{}", "-".repeat(47));
    for student in roster.iter() {
        let _ = writeln!(
            out,
            "{:<10} {:<20} {:>8.2} {:>6}",
            student.id(),
            student.name(),
            student.gpa(),
            student.grade()
        );
    }
    out
}

/// Render the class report. Grades with zero students are omitted.
pub fn report_text(report: &ClassReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- Class Report ---");
    let _ = writeln!(out, "Total students: {}", report.total);
    let _ = writeln!(out, "Average GPA: {:.2}", report.average_gpa);
    let _ = writeln!(out);
    let _ = writeln!(out, "Top student:");
    let _ = writeln!(out, "  Name: {}", report.top.name);
    let _ = writeln!(out, "  GPA: {:.2}", report.top.gpa);
    let _ = writeln!(out);
    let _ = writeln!(out, "Grade distribution:");
    for entry in &report.distribution {
        if entry.count > 0 {
            let _ = writeln!(
                out,
                "  {}: {} ({:.1}%)",
                entry.grade, entry.count, entry.percent
            );
        }
    }
    out
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

    #[test]
    fn test_format_from_str() {
        assert_eq!("human".parse::<OutputFormat>().unwrap(), OutputFormat::Human);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "xml".parse::<OutputFormat>(),
            Err(MarkbookError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_format_display_round_trip() {
        for format in [OutputFormat::Human, OutputFormat::Json] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_student_details() {
        let mut student = Student::new("Alice", "S1", &subjects());
        student.set_mark("Mathematics", 95.0).unwrap();

        let text = student_details(&student);
        assert!(text.contains("Student ID: S1"));
        assert!(text.contains("Name: Alice"));
        assert!(text.contains("Mathematics"));
        assert!(text.contains("95.00"));
        assert!(text.contains("GPA: 19.00"));
        assert!(text.contains("Grade: F"));
    }

    #[test]
    fn test_roster_table_lists_every_student() {
        let mut roster = Roster::new();
        roster.add("Alice", "S1", &subjects()).unwrap();
        roster.add("Bob", "S2", &subjects()).unwrap();

        let table = roster_table(&roster);
        assert!(table.starts_with("ID"));
        assert!(table.contains("Alice"));
        assert!(table.contains("Bob"));
        assert_eq!(table.lines().count(), 4);
    }

    #[test]
    fn test_report_text_omits_zero_counts() {
        let mut roster = Roster::new();
        roster.add("Alice", "S1", &subjects()).unwrap();
        let pairs: Vec<(String, f64)> = subjects().iter().map(|s| (s.clone(), 95.0)).collect();
        roster.update("S1", &pairs).unwrap();

        let text = report_text(&roster.report().unwrap());
        assert!(text.contains("Total students: 1"));
        assert!(text.contains("Average GPA: 95.00"));
        assert!(text.contains("Name: Alice"));
        assert!(text.contains("A+: 1 (100.0%)"));
        assert!(!text.contains("F:"));
    }
}
