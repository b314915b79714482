use super::enums::Status;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Filters shared by the reference-data tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct ReferenceSearchRequest {
    #[validate(length(max = 500))]
    pub keyword: Option<String>,
    pub statuses: Vec<Status>,
    /// Countries only: limit to the caller's permitted countries.
    pub restricted: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct PartnerSearchRequest {
    #[validate(length(max = 500))]
    pub keyword: Option<String>,
    pub statuses: Vec<Status>,
    pub source_partner: Option<bool>,
    pub job_creator: Option<bool>,
}
