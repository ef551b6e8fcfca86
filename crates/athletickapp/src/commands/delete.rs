use super::helpers::{person_at, Index};
use super::{CmdMessage, CmdResult, CommandResult};
use crate::model::{AthletickDate, Model};

/// Deletes the athlete at `index` together with their records and their
/// entries in every training roster.
pub fn run(model: &mut Model, index: Index) -> CommandResult {
    let target = person_at(model, index)?;
    let removed = model.delete_person(&target)?;
    let records = model.delete_person_records(&removed);
    model.delete_person_attendance(&removed);

    let mut result = CmdResult::changed(format!("Deleted Athlete: {removed}"));
    if records > 0 {
        result.add_message(CmdMessage::info(format!(
            "Removed {records} performance record(s) of {}",
            removed.name
        )));
    }
    Ok(result.with_affected_persons(vec![removed]))
}

pub fn run_training(model: &mut Model, date: AthletickDate) -> CommandResult {
    model.delete_training(&date)?;
    Ok(CmdResult::changed(format!("Deleted training on {date}")))
}

pub fn run_event(model: &mut Model, name: &str) -> CommandResult {
    model.delete_event(name)?;
    Ok(CmdResult::changed(format!(
        "Deleted event: {}",
        name.trim().to_lowercase()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::MESSAGE_INVALID_PERSON_INDEX;
    use crate::error::ModelError;
    use crate::model::fixtures::{alice, benson, date, record, ModelFixture};
    use crate::model::Training;

    #[test]
    fn delete_cascades_to_records_and_attendance() {
        let mut model = ModelFixture::new()
            .with_persons(&[alice(), benson()])
            .with_event("100m")
            .build();
        model
            .add_record("100m", &alice(), record("12.00", "01012020"))
            .unwrap();
        model
            .add_training(Training::new(date("01012020"), model.athletick().persons()))
            .unwrap();

        let result = run(&mut model, Index::from_zero_based(0)).unwrap();
        assert!(result.feedback.starts_with("Deleted Athlete: Alice Pauline"));
        assert_eq!(result.messages.len(), 1);
        assert!(!model.has_person(&alice()));
        assert!(model.performance().records_of("100m", &alice()).is_empty());
        let roster = model.training_attendance_on_date(&date("01012020"));
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].person, benson());
    }

    #[test]
    fn out_of_range_index_changes_nothing() {
        let mut model = ModelFixture::new().with_persons(&[alice()]).build();
        let err = run(&mut model, Index::from_zero_based(1)).unwrap_err();
        assert_eq!(err.message, MESSAGE_INVALID_PERSON_INDEX);
        assert_eq!(model.athletick().len(), 1);
    }

    #[test]
    fn delete_training_and_event() {
        let mut model = ModelFixture::new()
            .with_persons(&[alice()])
            .with_event("100m")
            .build();
        model
            .add_training(Training::new(date("01012020"), &[]))
            .unwrap();
        run_training(&mut model, date("01012020")).unwrap();
        assert!(!model.has_training(&date("01012020")));
        assert_eq!(
            run_training(&mut model, date("01012020")).unwrap_err().cause,
            Some(ModelError::TrainingNotFound(date("01012020")))
        );

        let result = run_event(&mut model, "100M").unwrap();
        assert_eq!(result.feedback, "Deleted event: 100m");
        assert!(run_event(&mut model, "100m").is_err());
    }
}
