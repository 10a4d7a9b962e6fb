//! Interactive menu session
//!
//! The numbered menu loop over stdin/stdout: one roster loaded at startup,
//! mutated in memory, saved on exit. Malformed input is handled here by
//! re-prompting; the core never sees it.

use std::io::{self, BufRead, Write};

use tracing::debug;

use markbook_core::config::Config;
use markbook_core::error::Result;
use markbook_core::format;
use markbook_core::roster::Roster;
use markbook_core::store::RosterStore;

use crate::cli::Cli;
use crate::commands::dispatch::load_or_recover;

type Input = io::Lines<io::StdinLock<'static>>;

pub fn run(cli: &Cli, config: &Config, store: &RosterStore) -> Result<()> {
    let mut roster = load_or_recover(cli, store)?;
    let mut lines = io::stdin().lock().lines();

    debug!(students = roster.len(), "session started");

    loop {
        print_menu();
        let Some(choice) = prompt(&mut lines, "Enter your choice: ")? else {
            break;
        };
        match choice.trim() {
            "1" => add_student(&mut lines, &mut roster, config)?,
            "2" => view_students(&roster),
            "3" => search_students(&mut lines, &roster)?,
            "4" => update_student(&mut lines, &mut roster)?,
            "5" => delete_student(&mut lines, &mut roster)?,
            "6" => class_report(&roster),
            "7" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }

    store.save(&roster)?;
    if !cli.quiet {
        println!("Roster saved. Goodbye!");
    }
    Ok(())
}

fn print_menu() {
    println!();
    println!("--- Markbook Menu ---");
    println!("1. Add student");
    println!("2. View students");
    println!("3. Search students");
    println!("4. Update marks");
    println!("5. Delete student");
    println!("6. Class report");
    println!("7. Save and exit");
    println!("---------------------");
}

/// Print a prompt and read one line. `None` means EOF.
fn prompt(lines: &mut Input, text: &str) -> Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

/// Prompt until the input parses as a number. `None` means EOF.
fn prompt_number(lines: &mut Input, text: &str) -> Result<Option<f64>> {
    loop {
        let Some(input) = prompt(lines, text)? else {
            return Ok(None);
        };
        match input.trim().parse::<f64>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Invalid input! Please enter a number."),
        }
    }
}

fn add_student(lines: &mut Input, roster: &mut Roster, config: &Config) -> Result<()> {
    println!();
    println!("--- Add Student ---");

    let Some(id) = prompt(lines, "Student ID: ")? else {
        return Ok(());
    };
    let id = id.trim().to_string();
    if id.is_empty() {
        println!("Student ID must not be empty.");
        return Ok(());
    }
    if roster.find_by_id(&id).is_some() {
        println!("A student with this ID already exists!");
        return Ok(());
    }

    let Some(name) = prompt(lines, "Name: ")? else {
        return Ok(());
    };

    roster.add(name.trim(), &id, &config.subjects)?;
    for subject in &config.subjects {
        let Some(value) = prompt_number(lines, &format!("Marks for {}: ", subject))? else {
            return Ok(());
        };
        roster.update(&id, &[(subject.clone(), value)])?;
    }

    println!("Student added.");
    Ok(())
}

fn view_students(roster: &Roster) {
    if roster.is_empty() {
        println!("No students found.");
    } else {
        println!();
        print!("{}", format::roster_table(roster));
    }
}

fn search_students(lines: &mut Input, roster: &Roster) -> Result<()> {
    println!();
    println!("--- Search Students ---");
    println!("1. Search by ID");
    println!("2. Search by name");
    let Some(choice) = prompt(lines, "Enter your choice: ")? else {
        return Ok(());
    };

    match choice.trim() {
        "1" => {
            let Some(id) = prompt(lines, "Student ID: ")? else {
                return Ok(());
            };
            match roster.find_by_id(id.trim()) {
                Some(student) => {
                    println!();
                    print!("{}", format::student_details(student));
                }
                None => println!("Student not found."),
            }
        }
        "2" => {
            let Some(query) = prompt(lines, "Name: ")? else {
                return Ok(());
            };
            let matches = roster.find_by_name(query.trim());
            if matches.is_empty() {
                println!("No students found with that name.");
            } else {
                for student in matches {
                    println!();
                    print!("{}", format::student_details(student));
                }
            }
        }
        _ => println!("Invalid choice. Please try again."),
    }
    Ok(())
}

fn update_student(lines: &mut Input, roster: &mut Roster) -> Result<()> {
    let Some(id) = prompt(lines, "Student ID to update: ")? else {
        return Ok(());
    };
    let id = id.trim().to_string();
    let Some(student) = roster.find_by_id(&id) else {
        println!("Student not found.");
        return Ok(());
    };

    println!();
    println!("Current marks:");
    print!("{}", format::student_details(student));
    println!();
    println!("Enter new marks (press Enter to keep the current value):");

    let current: Vec<(String, f64)> = student
        .marks()
        .map(|(subject, mark)| (subject.to_string(), mark))
        .collect();
    for (subject, mark) in current {
        if !update_one_mark(lines, roster, &id, &subject, mark)? {
            return Ok(());
        }
    }

    println!("Student record updated.");
    Ok(())
}

/// Prompt for one subject's new mark. Returns `false` on EOF.
fn update_one_mark(
    lines: &mut Input,
    roster: &mut Roster,
    id: &str,
    subject: &str,
    current: f64,
) -> Result<bool> {
    loop {
        let text = format!("Marks for {} [{:.2}]: ", subject, current);
        let Some(input) = prompt(lines, &text)? else {
            return Ok(false);
        };
        let input = input.trim();
        if input.is_empty() {
            return Ok(true);
        }
        match input.parse::<f64>() {
            Ok(value) => {
                roster.update(id, &[(subject.to_string(), value)])?;
                return Ok(true);
            }
            Err(_) => println!("Invalid input! Please enter a number."),
        }
    }
}

fn delete_student(lines: &mut Input, roster: &mut Roster) -> Result<()> {
    let Some(id) = prompt(lines, "Student ID to delete: ")? else {
        return Ok(());
    };
    let id = id.trim().to_string();
    let Some(student) = roster.find_by_id(&id) else {
        println!("Student not found.");
        return Ok(());
    };

    let text = format!("Delete {}? (yes/no): ", student.name());
    let Some(confirmation) = prompt(lines, &text)? else {
        return Ok(());
    };
    if confirmation.trim().eq_ignore_ascii_case("yes") {
        roster.remove(&id)?;
        println!("Student deleted.");
    } else {
        println!("Deletion cancelled.");
    }
    Ok(())
}

fn class_report(roster: &Roster) {
    match roster.report() {
        Some(report) => {
            println!();
            print!("{}", format::report_text(&report));
        }
        None => println!("No students to generate a report for."),
    }
}
