use super::enums::Status;
use crate::caller::UserRole;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct UserSearchRequest {
    #[validate(length(max = 500))]
    pub keyword: Option<String>,
    pub roles: Vec<UserRole>,
    pub statuses: Vec<Status>,
    pub partner_id: Option<i64>,
}
