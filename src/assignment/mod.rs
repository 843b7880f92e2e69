//! Assignment data model and store
//!
//! - `record`: the assignment record, its ID and the raw form fields
//! - `filter`: the list filter (all / on track / late / blocked)
//! - `store`: the owned collection with add/update/remove and the filtered view

mod filter;
mod record;
mod store;

pub use filter::Filter;
pub use record::{
    AssignmentFields, AssignmentId, AssignmentRecord, DATE_FORMAT, format_date, local_date_today,
};
pub use store::{Store, VisibleRecords};
