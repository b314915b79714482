use super::{COUNTRY, CREATED_BY, PARTNER, PARTNER_COLUMNS, USER_COLUMNS};
use catalog_query::{Cardinality, EntityDef, JoinPath, MembershipTable, Relation};

pub static JOB: EntityDef = EntityDef {
    name: "job",
    table: "salesforce_job_opp",
    primary_key: "id",
    columns: JOB_COLUMNS,
};

pub(crate) const JOB_COLUMNS: &[&str] = &[
    "id",
    "name",
    "stage",
    "closed",
    "published_date",
    "submission_due_date",
    "created_date",
    "updated_date",
    "country_id",
    "employer_id",
    "job_creator_id",
    "contact_user_id",
    "created_by_id",
];

static EMPLOYER: Relation = Relation {
    name: "employer",
    table: "employer",
    local_key: "employer_id",
    foreign_key: "id",
    cardinality: Cardinality::ToOne,
    columns: &["id", "name", "country_id"],
};

pub(crate) static JOB_CREATOR: Relation = Relation {
    name: "job_creator",
    table: "partner",
    local_key: "job_creator_id",
    foreign_key: "id",
    cardinality: Cardinality::ToOne,
    columns: PARTNER_COLUMNS,
};

pub(crate) static CONTACT_USER: Relation = Relation {
    name: "contact_user",
    table: "users",
    local_key: "contact_user_id",
    foreign_key: "id",
    cardinality: Cardinality::ToOne,
    columns: USER_COLUMNS,
};

/// Jobs starred by users; the "group" is the starring user.
pub static USER_STARRED_JOB: MembershipTable = MembershipTable {
    table: "user_starred_job",
    member_column: "job_id",
    group_column: "user_id",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobPath {
    Country,
    Employer,
    JobCreator,
    ContactUser,
    CreatedBy,
    CreatedByPartner,
}

impl JoinPath for JobPath {
    fn all() -> &'static [Self] {
        &[
            Self::Country,
            Self::Employer,
            Self::JobCreator,
            Self::ContactUser,
            Self::CreatedBy,
            Self::CreatedByPartner,
        ]
    }

    fn path(self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::Employer => "employer",
            Self::JobCreator => "job_creator",
            Self::ContactUser => "contact_user",
            Self::CreatedBy => "created_by",
            Self::CreatedByPartner => "created_by.partner",
        }
    }

    fn parent(self) -> Option<Self> {
        match self {
            Self::CreatedByPartner => Some(Self::CreatedBy),
            _ => None,
        }
    }

    fn relation(self) -> &'static Relation {
        match self {
            Self::Country => &COUNTRY,
            Self::Employer => &EMPLOYER,
            Self::JobCreator => &JOB_CREATOR,
            Self::ContactUser => &CONTACT_USER,
            Self::CreatedBy => &CREATED_BY,
            Self::CreatedByPartner => &PARTNER,
        }
    }
}
