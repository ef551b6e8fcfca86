//! Clear resets Athletick, Performance **and** Attendance. Trainings refer to
//! athletes, so leaving them behind would keep rosters of people who no longer
//! exist; one undo brings all three stores back.

use super::{CmdResult, CommandResult};
use crate::model::{Athletick, Attendance, Model, Performance};

pub const MESSAGE_SUCCESS: &str = "Athletick has been cleared!";

/// Empties athletes, events and trainings as one undoable step.
pub fn run(model: &mut Model) -> CommandResult {
    model.set_athletick(Athletick::new());
    model.set_performance(Performance::new());
    model.set_attendance(Attendance::new());
    Ok(CmdResult::changed(MESSAGE_SUCCESS).with_refresh())
}
