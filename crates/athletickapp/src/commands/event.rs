use super::helpers::{person_at, Index};
use super::{CmdResult, CommandResult};
use crate::model::{Event, Model, Record};

pub fn run_add_event(model: &mut Model, name: &str) -> CommandResult {
    let event = Event::new(name)?;
    let feedback = format!("New event added: {event}");
    model.add_event(event)?;
    Ok(CmdResult::changed(feedback))
}

pub fn run_add_record(model: &mut Model, event: &str, index: Index, record: Record) -> CommandResult {
    let person = person_at(model, index)?;
    let feedback = format!(
        "{} recorded for {} in {}",
        record,
        person.name,
        event.trim().to_lowercase()
    );
    model.add_record(event, &person, record)?;
    Ok(CmdResult::changed(feedback).with_affected_persons(vec![person]))
}
