use super::enums::OpportunityStage;
use catalog_query::SearchType;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct OpportunitySearchRequest {
    #[validate(length(max = 500))]
    pub keyword: Option<String>,
    pub stages: Vec<OpportunityStage>,
    pub stage_search_type: Option<SearchType>,
    pub sf_opp_closed: Option<bool>,
    pub job_ids: Vec<i64>,
    pub candidate_ids: Vec<i64>,
    /// Next step due before today.
    pub overdue: Option<bool>,
    pub owned_by_me: Option<bool>,
    pub owned_by_my_partner: Option<bool>,
}
