use super::candidate::{CANDIDATE_COLUMNS, USER};
use super::job::{CONTACT_USER, JOB_COLUMNS, JOB_CREATOR};
use super::{CREATED_BY, PARTNER};
use catalog_query::{Cardinality, EntityDef, JoinPath, Relation};

pub static OPPORTUNITY: EntityDef = EntityDef {
    name: "candidate_opportunity",
    table: "candidate_opportunity",
    primary_key: "id",
    columns: &[
        "id",
        "name",
        "stage",
        "closed",
        "next_step",
        "next_step_due_date",
        "created_date",
        "updated_date",
        "candidate_id",
        "job_opp_id",
        "created_by_id",
    ],
};

static CANDIDATE_REL: Relation = Relation {
    name: "candidate",
    table: "candidate",
    local_key: "candidate_id",
    foreign_key: "id",
    cardinality: Cardinality::ToOne,
    columns: CANDIDATE_COLUMNS,
};

static JOB_OPP: Relation = Relation {
    name: "job_opp",
    table: "salesforce_job_opp",
    local_key: "job_opp_id",
    foreign_key: "id",
    cardinality: Cardinality::ToOne,
    columns: JOB_COLUMNS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpportunityPath {
    Candidate,
    CandidateUser,
    CandidateUserPartner,
    JobOpp,
    JobOppContactUser,
    JobOppJobCreator,
    CreatedBy,
}

impl JoinPath for OpportunityPath {
    fn all() -> &'static [Self] {
        &[
            Self::Candidate,
            Self::CandidateUser,
            Self::CandidateUserPartner,
            Self::JobOpp,
            Self::JobOppContactUser,
            Self::JobOppJobCreator,
            Self::CreatedBy,
        ]
    }

    fn path(self) -> &'static str {
        match self {
            Self::Candidate => "candidate",
            Self::CandidateUser => "candidate.user",
            Self::CandidateUserPartner => "candidate.user.partner",
            Self::JobOpp => "job_opp",
            Self::JobOppContactUser => "job_opp.contact_user",
            Self::JobOppJobCreator => "job_opp.job_creator",
            Self::CreatedBy => "created_by",
        }
    }

    fn parent(self) -> Option<Self> {
        match self {
            Self::Candidate | Self::JobOpp | Self::CreatedBy => None,
            Self::CandidateUser => Some(Self::Candidate),
            Self::CandidateUserPartner => Some(Self::CandidateUser),
            Self::JobOppContactUser | Self::JobOppJobCreator => Some(Self::JobOpp),
        }
    }

    fn relation(self) -> &'static Relation {
        match self {
            Self::Candidate => &CANDIDATE_REL,
            Self::CandidateUser => &USER,
            Self::CandidateUserPartner => &PARTNER,
            Self::JobOpp => &JOB_OPP,
            Self::JobOppContactUser => &CONTACT_USER,
            Self::JobOppJobCreator => &JOB_CREATOR,
            Self::CreatedBy => &CREATED_BY,
        }
    }
}
