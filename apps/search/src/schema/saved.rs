//! Saved searches and saved lists.

use super::{CREATED_BY, PARTNER};
use super::job::JOB_COLUMNS;
use catalog_query::{Cardinality, EntityDef, JoinPath, MembershipTable, Relation};

pub static SAVED_SEARCH: EntityDef = EntityDef {
    name: "saved_search",
    table: "saved_search",
    primary_key: "id",
    columns: &[
        "id",
        "name",
        "type",
        "fixed",
        "global",
        "status",
        "default_search",
        "created_by_id",
        "created_date",
        "updated_date",
    ],
};

pub static SAVED_LIST: EntityDef = EntityDef {
    name: "saved_list",
    table: "saved_list",
    primary_key: "id",
    columns: &[
        "id",
        "name",
        "fixed",
        "global",
        "status",
        "registered_job",
        "sf_job_opp_id",
        "created_by_id",
        "created_date",
        "updated_date",
    ],
};

/// Saved searches shared with users; the "group" is the user shared with.
pub static USER_SAVED_SEARCH: MembershipTable = MembershipTable {
    table: "user_saved_search",
    member_column: "saved_search_id",
    group_column: "user_id",
};

/// Saved lists shared with users.
pub static USER_SAVED_LIST: MembershipTable = MembershipTable {
    table: "user_saved_list",
    member_column: "saved_list_id",
    group_column: "user_id",
};

static SF_JOB_OPP: Relation = Relation {
    name: "sf_job_opp",
    table: "salesforce_job_opp",
    local_key: "sf_job_opp_id",
    foreign_key: "id",
    cardinality: Cardinality::ToOne,
    columns: JOB_COLUMNS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SavedSearchPath {
    CreatedBy,
    CreatedByPartner,
}

impl JoinPath for SavedSearchPath {
    fn all() -> &'static [Self] {
        &[Self::CreatedBy, Self::CreatedByPartner]
    }

    fn path(self) -> &'static str {
        match self {
            Self::CreatedBy => "created_by",
            Self::CreatedByPartner => "created_by.partner",
        }
    }

    fn parent(self) -> Option<Self> {
        match self {
            Self::CreatedBy => None,
            Self::CreatedByPartner => Some(Self::CreatedBy),
        }
    }

    fn relation(self) -> &'static Relation {
        match self {
            Self::CreatedBy => &CREATED_BY,
            Self::CreatedByPartner => &PARTNER,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SavedListPath {
    CreatedBy,
    SfJobOpp,
}

impl JoinPath for SavedListPath {
    fn all() -> &'static [Self] {
        &[Self::CreatedBy, Self::SfJobOpp]
    }

    fn path(self) -> &'static str {
        match self {
            Self::CreatedBy => "created_by",
            Self::SfJobOpp => "sf_job_opp",
        }
    }

    fn parent(self) -> Option<Self> {
        None
    }

    fn relation(self) -> &'static Relation {
        match self {
            Self::CreatedBy => &CREATED_BY,
            Self::SfJobOpp => &SF_JOB_OPP,
        }
    }
}
