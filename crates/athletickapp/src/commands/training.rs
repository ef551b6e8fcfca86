use super::helpers::{persons_at, Index};
use super::{CmdResult, CommandResult};
use crate::model::{AthletickDate, Model, Training};

/// Records a session on `date` for every athlete in the directory, marking
/// the athletes at `present` (indexes into the filtered list) as attended.
pub fn run(model: &mut Model, date: AthletickDate, present: &[Index]) -> CommandResult {
    let attendees = persons_at(model, present)?;
    let mut training = Training::new(date, model.athletick().persons());
    for person in &attendees {
        training.mark_present(person)?;
    }
    let attended = training.present_count();
    let total = training.roster().len();
    model.add_training(training)?;
    Ok(CmdResult::changed(format!(
        "Training on {date} added: {attended} of {total} athletes attended"
    ))
    .with_affected_persons(attendees))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use crate::model::fixtures::{alice, benson, carl, date, ModelFixture};

    #[test]
    fn marks_listed_athletes_present() {
        let mut model = ModelFixture::new()
            .with_persons(&[alice(), benson(), carl()])
            .build();
        let present = [Index::from_zero_based(0), Index::from_zero_based(2)];
        let result = run(&mut model, date("01012020"), &present).unwrap();
        assert_eq!(
            result.feedback,
            "Training on 01 January 2020 added: 2 of 3 athletes attended"
        );
        let training = model.training_on_date(&date("01012020")).unwrap();
        assert_eq!(training.attended(&alice()), Some(true));
        assert_eq!(training.attended(&benson()), Some(false));
        assert_eq!(training.attended(&carl()), Some(true));
    }

    #[test]
    fn second_session_on_same_date_fails() {
        let mut model = ModelFixture::new().with_persons(&[alice()]).build();
        run(&mut model, date("01012020"), &[]).unwrap();
        let err = run(&mut model, date("01012020"), &[Index::from_zero_based(0)]).unwrap_err();
        assert_eq!(
            err.cause,
            Some(ModelError::DuplicateTraining(date("01012020")))
        );
        let training = model.training_on_date(&date("01012020")).unwrap();
        assert_eq!(training.present_count(), 0);
    }

    #[test]
    fn bad_index_adds_no_session() {
        let mut model = ModelFixture::new().with_persons(&[alice()]).build();
        assert!(run(&mut model, date("01012020"), &[Index::from_zero_based(3)]).is_err());
        assert!(!model.has_training(&date("01012020")));
    }
}
