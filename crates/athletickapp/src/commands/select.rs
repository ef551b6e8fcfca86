use super::helpers::{person_at, Index};
use super::{CmdMessage, CmdResult, CommandResult};
use crate::model::Model;

/// Stores the athlete at `index` for the detail view.
pub fn run(model: &mut Model, index: Index) -> CommandResult {
    let person = person_at(model, index)?;
    let rate = model.attendance_rate(&person);
    model.store_person(person.clone());
    let mut result = CmdResult::new(format!("Selected Athlete: {}", person.name))
        .with_affected_persons(vec![person]);
    if rate.total > 0 {
        result.add_message(CmdMessage::info(format!(
            "Attended {} of {} trainings ({:.0}%)",
            rate.attended,
            rate.total,
            rate.percentage()
        )));
    }
    Ok(result)
}
