use super::{CmdResult, CommandResult};
use crate::model::{Model, Person};

pub fn run(model: &mut Model, person: Person) -> CommandResult {
    model.add_person(person.clone())?;
    Ok(CmdResult::changed(format!("New athlete added: {person}")).with_affected_persons(vec![person]))
}
