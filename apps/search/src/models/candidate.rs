use super::enums::{CandidateStatus, Gender, UnhcrStatus};
use catalog_query::SearchType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct CandidateSearchRequest {
    #[validate(length(max = 500))]
    pub keyword: Option<String>,
    pub statuses: Vec<CandidateStatus>,
    pub gender: Vec<Gender>,
    pub unhcr_statuses: Vec<UnhcrStatus>,

    pub occupation_ids: Vec<i64>,
    #[validate(range(max = 100))]
    pub min_yrs: Option<u32>,
    #[validate(range(max = 100))]
    pub max_yrs: Option<u32>,

    pub nationality_ids: Vec<i64>,
    pub nationality_search_type: Option<SearchType>,
    pub country_ids: Vec<i64>,
    pub country_search_type: Option<SearchType>,
    pub partner_ids: Vec<i64>,
    pub survey_type_ids: Vec<i64>,
    pub education_major_ids: Vec<i64>,
    pub min_education_level: Option<i64>,

    pub english_min_spoken_level: Option<i64>,
    pub english_min_written_level: Option<i64>,
    pub other_language_id: Option<i64>,
    pub other_min_spoken_level: Option<i64>,
    pub other_min_written_level: Option<i64>,

    #[validate(range(max = 120))]
    pub min_age: Option<u32>,
    #[validate(range(max = 120))]
    pub max_age: Option<u32>,

    pub rego_from: Option<NaiveDate>,
    pub rego_to: Option<NaiveDate>,
    pub last_modified_from: Option<NaiveDate>,
    pub last_modified_to: Option<NaiveDate>,

    pub mini_intake_completed: Option<bool>,
    pub full_intake_completed: Option<bool>,
    pub potential_duplicate: Option<bool>,
    #[validate(length(max = 200))]
    pub rego_referrer_param: Option<String>,

    pub list_any_ids: Vec<i64>,
    pub list_any_search_type: Option<SearchType>,
    pub list_all_ids: Vec<i64>,
    pub list_all_search_type: Option<SearchType>,
    pub exclusion_list_id: Option<i64>,
}
