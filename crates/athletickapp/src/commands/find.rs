use super::{CmdResult, CommandResult};
use crate::model::{Model, PersonFilter};

pub const MESSAGE_LIST_SUCCESS: &str = "Listed all athletes";

/// Narrows the person list to athletes whose name contains any keyword.
pub fn run_find(model: &mut Model, keywords: Vec<String>) -> CommandResult {
    model.update_filtered_person_list(PersonFilter::NameContainsKeywords(keywords));
    let listed = model.filtered_person_list().to_vec();
    Ok(CmdResult::new(format!("{} athletes listed!", listed.len())).with_listed_persons(listed))
}

pub fn run_list(model: &mut Model) -> CommandResult {
    model.update_filtered_person_list(PersonFilter::All);
    let listed = model.filtered_person_list().to_vec();
    Ok(CmdResult::new(MESSAGE_LIST_SUCCESS).with_listed_persons(listed))
}
