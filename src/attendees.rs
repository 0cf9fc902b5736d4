use crate::errors::ListError;
use crate::models::Attendee;

#[derive(Debug, Clone, Default)]
pub struct AttendeeList {
    entries: Vec<Attendee>,
}

impl AttendeeList {
    pub fn new() -> Self {
        Self::default()
    }

    // Ok(None) for blank input; otherwise the trimmed name, for the history.
    pub fn add(&mut self, name: &str) -> Result<Option<String>, ListError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }

        let key = name.to_lowercase();
        if self.entries.iter().any(|a| a.name.to_lowercase() == key) {
            return Err(ListError::Duplicate(name.to_string()));
        }

        self.entries.push(Attendee {
            name: name.to_string(),
            present: false,
        });
        Ok(Some(name.to_string()))
    }

    pub fn toggle(&mut self, index: usize) -> Result<bool, ListError> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(ListError::OutOfBounds { index, len })?;
        entry.present = !entry.present;
        Ok(entry.present)
    }

    pub fn remove(&mut self, index: usize) -> Result<Attendee, ListError> {
        if index >= self.entries.len() {
            return Err(ListError::OutOfBounds {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    pub fn clear(&mut self, confirm: impl FnOnce(&str) -> bool) -> bool {
        if !confirm("Remove every attendee from the list?") {
            return false;
        }
        self.entries.clear();
        true
    }

    pub fn counts(&self) -> (usize, usize) {
        let present = self.entries.iter().filter(|a| a.present).count();
        (present, self.entries.len() - present)
    }

    pub fn entries(&self) -> &[Attendee] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
