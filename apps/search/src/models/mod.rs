//! Filter request models, one per searchable entity.
//!
//! Every field is optional. Absent fields, empty lists and blank keywords do
//! not constrain the search.

pub mod candidate;
pub mod enums;
pub mod job;
pub mod opportunity;
pub mod reference;
pub mod saved;
pub mod user;

pub use candidate::CandidateSearchRequest;
pub use enums::{
    CandidateStatus, Gender, JobStage, OpportunityStage, SavedSearchType, Status, StoredEnum,
    UnhcrStatus,
};
pub use job::JobSearchRequest;
pub use opportunity::OpportunitySearchRequest;
pub use reference::{PartnerSearchRequest, ReferenceSearchRequest};
pub use saved::{SavedListSearchRequest, SavedSearchSearchRequest};
pub use user::UserSearchRequest;

use catalog_query::Value;

/// Ids as query values.
pub fn id_values(ids: &[i64]) -> Vec<Value> {
    ids.iter().copied().map(Value::Int).collect()
}
