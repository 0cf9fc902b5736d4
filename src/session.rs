use chrono::NaiveDate;

use crate::attendees::AttendeeList;
use crate::errors::{ListError, ReportError};
use crate::locale::LocaleFormat;
use crate::offerings::OfferingList;
use crate::report::{export, Report};

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub attendees: AttendeeList,
    pub offerings: OfferingList,
    pub date: Option<NaiveDate>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.date = date;
    }

    /// Returns the name to persist in the history, if one was added.
    pub fn add_attendee(&mut self, name: &str) -> Result<Option<String>, ListError> {
        self.attendees.add(name)
    }

    pub fn toggle_attendee(&mut self, index: usize) -> Result<bool, ListError> {
        self.attendees.toggle(index)
    }

    pub fn remove_attendee(&mut self, index: usize) -> Result<(), ListError> {
        self.attendees.remove(index).map(|_| ())
    }

    pub fn clear_attendees(&mut self, confirm: impl FnOnce(&str) -> bool) -> bool {
        self.attendees.clear(confirm)
    }

    pub fn add_offering(&mut self, description: &str, amount: &str) -> Result<(), ListError> {
        self.offerings.add(description, amount).map(|_| ())
    }

    pub fn remove_offering(&mut self, index: usize) -> Result<(), ListError> {
        self.offerings.remove(index).map(|_| ())
    }

    pub fn clear_offerings(&mut self, confirm: impl FnOnce(&str) -> bool) -> bool {
        self.offerings.clear(confirm)
    }

    pub fn report(&self, locale: &dyn LocaleFormat) -> Result<Report, ReportError> {
        export(&self.attendees, &self.offerings, self.date, locale)
    }
}
