use super::enums::SavedSearchType;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct SavedSearchSearchRequest {
    #[validate(length(max = 500))]
    pub keyword: Option<String>,
    pub saved_search_type: Option<SavedSearchType>,
    pub fixed: Option<bool>,
    pub owned: Option<bool>,
    pub shared: Option<bool>,
    pub global: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct SavedListSearchRequest {
    #[validate(length(max = 500))]
    pub keyword: Option<String>,
    pub fixed: Option<bool>,
    pub registered_job: Option<bool>,
    pub owned: Option<bool>,
    pub shared: Option<bool>,
    pub global: Option<bool>,
}
