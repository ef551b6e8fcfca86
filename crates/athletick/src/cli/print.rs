use athletickapp::commands::{CmdMessage, CmdResult, DayView, MessageLevel};
use athletickapp::model::{Person, Tag};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 28;
const PHONE_WIDTH: usize = 12;
const EMAIL_WIDTH: usize = 30;

/// Prints a command's outcome; `detail` shows the single affected athlete in full.
pub(super) fn print_result(result: &CmdResult, detail: bool) {
    if !result.listed_persons.is_empty() {
        print_persons(&result.listed_persons);
    }
    if let Some(day) = &result.day {
        print_day(day);
    }
    if let (true, [person]) = (detail, result.affected_persons.as_slice()) {
        print_person_detail(person);
    }
    println!("{}", feedback_line(result));
    print_messages(&result.messages);
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_error(message: &str) {
    eprintln!("{}", message.red());
}

fn feedback_line(result: &CmdResult) -> colored::ColoredString {
    if result.save_needed {
        result.feedback.green()
    } else {
        result.feedback.normal()
    }
}

pub(super) fn print_persons(persons: &[Person]) {
    let index_width = persons.len().to_string().len() + 2;
    for (i, person) in persons.iter().enumerate() {
        let index = pad_to_width(&format!("{}.", i + 1), index_width);
        println!(
            "{}{} {} {} {}",
            index.yellow(),
            pad_to_width(person.name.as_str(), NAME_WIDTH).bold(),
            pad_to_width(person.phone.as_str(), PHONE_WIDTH),
            pad_to_width(person.email.as_str(), EMAIL_WIDTH).dimmed(),
            format_tags(person).cyan()
        );
    }
}

pub(super) fn print_person_detail(person: &Person) {
    println!("{}", person.name.as_str().bold());
    println!("  Phone:       {}", person.phone);
    println!("  Email:       {}", person.email);
    println!("  Address:     {}", person.address);
    println!("  Gender:      {}", person.gender);
    println!("  Year joined: {}", person.year_joined);
    if !person.tags.is_empty() {
        println!("  Tags:        {}", format_tags(person).cyan());
    }
}

pub(super) fn print_day(day: &DayView) {
    println!("{}", day.date.to_string().bold());
    if !day.attendance.is_empty() {
        println!("{}", "Training".underline());
        for entry in &day.attendance {
            let mark = if entry.present {
                "✓".green()
            } else {
                "✗".red()
            };
            println!("  {} {}", mark, entry.person.name);
        }
    }
    for (event, records) in &day.performance {
        println!("{}", event.name().underline());
        for entry in records {
            println!(
                "  {} {}",
                pad_to_width(entry.person.name.as_str(), NAME_WIDTH),
                entry.record.timing.to_string().yellow()
            );
        }
    }
}

fn format_tags(person: &Person) -> String {
    person
        .tags
        .iter()
        .map(Tag::as_str)
        .map(|t| format!("[{t}]"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncates or right-pads `s` to exactly `width` terminal columns.
fn pad_to_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        return format!("{}{}", s, " ".repeat(width - s.width()));
    }
    let mut result = String::new();
    let mut current = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if current + w > width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current += w;
    }
    result.push('…');
    current += 1;
    result.push_str(&" ".repeat(width.saturating_sub(current)));
    result
}
