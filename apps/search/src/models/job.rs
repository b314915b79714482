use super::enums::JobStage;
use catalog_query::SearchType;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct JobSearchRequest {
    #[validate(length(max = 500))]
    pub keyword: Option<String>,
    pub stages: Vec<JobStage>,
    pub stage_search_type: Option<SearchType>,
    pub destination_ids: Vec<i64>,
    pub partner_ids: Vec<i64>,
    pub sf_opp_closed: Option<bool>,
    pub published: Option<bool>,
    pub owned_by_me: Option<bool>,
    pub owned_by_my_partner: Option<bool>,
    pub starred_by_me: Option<bool>,
}
