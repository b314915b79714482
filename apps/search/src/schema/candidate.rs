use super::{COUNTRY, COUNTRY_COLUMNS, PARTNER, USER_COLUMNS};
use catalog_query::{Cardinality, EntityDef, JoinPath, MembershipTable, Relation};

pub static CANDIDATE: EntityDef = EntityDef {
    name: "candidate",
    table: "candidate",
    primary_key: "id",
    columns: CANDIDATE_COLUMNS,
};

pub(crate) const CANDIDATE_COLUMNS: &[&str] = &[
    "id",
    "candidate_number",
    "status",
    "gender",
    "dob",
    "unhcr_status",
    "phone",
    "whatsapp",
    "additional_info",
    "created_date",
    "updated_date",
    "mini_intake_completed_date",
    "full_intake_completed_date",
    "potential_duplicate",
    "rego_referrer_param",
    "user_id",
    "country_id",
    "nationality_id",
    "max_education_level_id",
    "survey_type_id",
];

pub(crate) static USER: Relation = Relation {
    name: "user",
    table: "users",
    local_key: "user_id",
    foreign_key: "id",
    cardinality: Cardinality::ToOne,
    columns: USER_COLUMNS,
};

static NATIONALITY: Relation = Relation {
    name: "nationality",
    table: "country",
    local_key: "nationality_id",
    foreign_key: "id",
    cardinality: Cardinality::ToOne,
    columns: COUNTRY_COLUMNS,
};

static CANDIDATE_OCCUPATIONS: Relation = Relation {
    name: "candidate_occupations",
    table: "candidate_occupation",
    local_key: "id",
    foreign_key: "candidate_id",
    cardinality: Cardinality::ToMany,
    columns: &["id", "candidate_id", "occupation_id", "years_experience"],
};

static OCCUPATION: Relation = Relation {
    name: "occupation",
    table: "occupation",
    local_key: "occupation_id",
    foreign_key: "id",
    cardinality: Cardinality::ToOne,
    columns: &["id", "name", "status"],
};

static CANDIDATE_EDUCATIONS: Relation = Relation {
    name: "candidate_educations",
    table: "candidate_education",
    local_key: "id",
    foreign_key: "candidate_id",
    cardinality: Cardinality::ToMany,
    columns: &["id", "candidate_id", "education_major_id", "course_name"],
};

static EDUCATION_MAJOR: Relation = Relation {
    name: "education_major",
    table: "education_major",
    local_key: "education_major_id",
    foreign_key: "id",
    cardinality: Cardinality::ToOne,
    columns: &["id", "name", "status"],
};

static MAX_EDUCATION_LEVEL: Relation = Relation {
    name: "max_education_level",
    table: "education_level",
    local_key: "max_education_level_id",
    foreign_key: "id",
    cardinality: Cardinality::ToOne,
    columns: &["id", "name", "level", "status"],
};

static SURVEY_TYPE: Relation = Relation {
    name: "survey_type",
    table: "survey_type",
    local_key: "survey_type_id",
    foreign_key: "id",
    cardinality: Cardinality::ToOne,
    columns: &["id", "name", "status"],
};

/// Candidates on saved lists.
pub static CANDIDATE_SAVED_LIST: MembershipTable = MembershipTable {
    table: "candidate_saved_list",
    member_column: "candidate_id",
    group_column: "saved_list_id",
};

/// Spoken and written proficiency per candidate and language.
pub const CANDIDATE_LANGUAGE: &str = "candidate_language";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidatePath {
    User,
    UserPartner,
    Country,
    Nationality,
    CandidateOccupations,
    CandidateOccupationsOccupation,
    CandidateEducations,
    CandidateEducationsEducationMajor,
    MaxEducationLevel,
    SurveyType,
}

impl JoinPath for CandidatePath {
    fn all() -> &'static [Self] {
        &[
            Self::User,
            Self::UserPartner,
            Self::Country,
            Self::Nationality,
            Self::CandidateOccupations,
            Self::CandidateOccupationsOccupation,
            Self::CandidateEducations,
            Self::CandidateEducationsEducationMajor,
            Self::MaxEducationLevel,
            Self::SurveyType,
        ]
    }

    fn path(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::UserPartner => "user.partner",
            Self::Country => "country",
            Self::Nationality => "nationality",
            Self::CandidateOccupations => "candidate_occupations",
            Self::CandidateOccupationsOccupation => "candidate_occupations.occupation",
            Self::CandidateEducations => "candidate_educations",
            Self::CandidateEducationsEducationMajor => "candidate_educations.education_major",
            Self::MaxEducationLevel => "max_education_level",
            Self::SurveyType => "survey_type",
        }
    }

    fn parent(self) -> Option<Self> {
        match self {
            Self::UserPartner => Some(Self::User),
            Self::CandidateOccupationsOccupation => Some(Self::CandidateOccupations),
            Self::CandidateEducationsEducationMajor => Some(Self::CandidateEducations),
            _ => None,
        }
    }

    fn relation(self) -> &'static Relation {
        match self {
            Self::User => &USER,
            Self::UserPartner => &PARTNER,
            Self::Country => &COUNTRY,
            Self::Nationality => &NATIONALITY,
            Self::CandidateOccupations => &CANDIDATE_OCCUPATIONS,
            Self::CandidateOccupationsOccupation => &OCCUPATION,
            Self::CandidateEducations => &CANDIDATE_EDUCATIONS,
            Self::CandidateEducationsEducationMajor => &EDUCATION_MAJOR,
            Self::MaxEducationLevel => &MAX_EDUCATION_LEVEL,
            Self::SurveyType => &SURVEY_TYPE,
        }
    }
}
