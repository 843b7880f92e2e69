//! Intent handlers for the assignment tracker
//!
//! Each user intent the host can raise is handled in its own file.

pub mod delete;
pub mod edit;
pub mod filter;
pub mod submit;
