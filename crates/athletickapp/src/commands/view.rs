use super::{CmdResult, CommandResult};
use crate::model::{AthletickDate, AttendanceEntry, CalendarCompatibleRecord, Event, Model};
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything logged on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayView {
    pub date: AthletickDate,
    /// Empty when no training took place.
    pub attendance: Vec<AttendanceEntry>,
    pub performance: BTreeMap<Event, Vec<CalendarCompatibleRecord>>,
}

impl DayView {
    pub fn is_empty(&self) -> bool {
        self.attendance.is_empty() && self.performance.is_empty()
    }
}

pub fn run(model: &mut Model, date: AthletickDate) -> CommandResult {
    let day = DayView {
        date,
        attendance: model.training_attendance_on_date(&date).to_vec(),
        performance: model.calendar_compatible_performance(&date),
    };
    let feedback = if day.is_empty() {
        format!("Nothing recorded on {date}")
    } else {
        let present = day.attendance.iter().filter(|e| e.present).count();
        let records: usize = day.performance.values().map(Vec::len).sum();
        format!(
            "{date}: {present} of {} athletes attended, {records} record(s) logged",
            day.attendance.len()
        )
    };
    Ok(CmdResult {
        day: Some(day),
        ..CmdResult::new(feedback)
    })
}
