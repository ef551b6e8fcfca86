use super::{CmdResult, CommandResult};
use crate::model::Model;

pub const MESSAGE_NOTHING_TO_UNDO: &str = "Nothing to undo.";
pub const MESSAGE_NOTHING_TO_REDO: &str = "Nothing to redo.";

/// Steps back one command. An empty history is reported, not treated as an error.
pub fn run_undo(model: &mut Model) -> CommandResult {
    Ok(match model.undo() {
        Some(description) => CmdResult::changed(format!("Undone: {description}")).with_refresh(),
        None => CmdResult::new(MESSAGE_NOTHING_TO_UNDO),
    })
}

pub fn run_redo(model: &mut Model) -> CommandResult {
    Ok(match model.redo() {
        Some(description) => CmdResult::changed(format!("Redone: {description}")).with_refresh(),
        None => CmdResult::new(MESSAGE_NOTHING_TO_REDO),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{execute, Command};
    use crate::model::fixtures::{alice, ModelFixture};

    #[test]
    fn empty_history_is_informational() {
        let mut model = ModelFixture::new().with_persons(&[alice()]).build();
        let undo = run_undo(&mut model).unwrap();
        assert_eq!(undo.feedback, MESSAGE_NOTHING_TO_UNDO);
        assert!(!undo.save_needed);
        assert_eq!(run_redo(&mut model).unwrap().feedback, MESSAGE_NOTHING_TO_REDO);
        assert_eq!(model.athletick().len(), 1);
    }

    #[test]
    fn undo_then_redo_reports_the_command() {
        let mut model = ModelFixture::new().build();
        execute(&mut model, Command::Add { person: alice() }).unwrap();

        let undo = run_undo(&mut model).unwrap();
        assert_eq!(undo.feedback, "Undone: add Alice Pauline");
        assert!(undo.save_needed && undo.refresh);
        assert!(model.athletick().is_empty());

        let redo = run_redo(&mut model).unwrap();
        assert_eq!(redo.feedback, "Redone: add Alice Pauline");
        assert!(model.has_person(&alice()));
    }
}
