use super::filter::Filter;
use super::record::{AssignmentFields, AssignmentId, AssignmentRecord};
use crate::classify::status_of;
use crate::error::Result;
use crate::validation::validate_fields;
use chrono::NaiveDate;

/// Ordered, in-memory collection of assignments plus the active filter
#[derive(Debug, Default)]
pub struct Store {
    /// Records in insertion order
    records: Vec<AssignmentRecord>,

    /// Counter for generating unique assignment IDs
    ///
    /// Only ever increases, so an ID is never handed out twice even after the
    /// record holding it was removed.
    id_counter: u64,

    filter: Filter,
}

impl Store {
    /// Create a new empty store showing all assignments
    pub fn new() -> Self {
        Self::default()
    }

    fn generate_id(&mut self) -> AssignmentId {
        self.id_counter += 1;
        AssignmentId(self.id_counter)
    }

    /// Append a new assignment
    ///
    /// # Returns
    /// The new record's ID, or a validation error with the collection unchanged
    pub fn add(&mut self, fields: AssignmentFields) -> Result<AssignmentId> {
        validate_fields(&fields)?;

        let id = self.generate_id();
        self.records.push(AssignmentRecord::from_fields(id, &fields));
        Ok(id)
    }

    /// Replace all mutable fields of an assignment
    ///
    /// # Returns
    /// `Ok(true)` if the record was updated, `Ok(false)` if no record has this ID,
    /// or a validation error with the record unchanged
    pub fn update(&mut self, id: AssignmentId, fields: AssignmentFields) -> Result<bool> {
        validate_fields(&fields)?;

        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.replace_fields(&fields);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove an assignment and return it, if present
    pub fn remove(&mut self, id: AssignmentId) -> Option<AssignmentRecord> {
        let pos = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(pos))
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn get(&self, id: AssignmentId) -> Option<&AssignmentRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// All records in insertion order, regardless of the filter
    pub fn records(&self) -> &[AssignmentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records passing the active filter, in insertion order
    ///
    /// The returned iterator is lazy and can be cloned to walk the view again.
    pub fn visible_records(&self, today: NaiveDate) -> VisibleRecords<'_> {
        VisibleRecords {
            inner: self.records.iter(),
            filter: self.filter,
            today,
        }
    }
}

/// Iterator over the records that pass a [`Filter`]
#[derive(Debug, Clone)]
pub struct VisibleRecords<'a> {
    inner: std::slice::Iter<'a, AssignmentRecord>,
    filter: Filter,
    today: NaiveDate,
}

impl<'a> Iterator for VisibleRecords<'a> {
    type Item = &'a AssignmentRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let (filter, today) = (self.filter, self.today);
        self.inner
            .by_ref()
            .find(|record| filter.matches(status_of(record, today)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}
