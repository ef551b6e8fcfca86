use super::{CmdResult, CommandResult};
use crate::model::Model;

pub fn run(model: &mut Model) -> CommandResult {
    model.sort_athletick_by_name();
    Ok(CmdResult::changed("Sorted all athletes by name"))
}
