//! Reference-data tables. None of them has relationships.

use super::{COUNTRY_COLUMNS, PARTNER_COLUMNS};
use catalog_query::EntityDef;
use serde::{Deserialize, Serialize};

const NAMED_COLUMNS: &[&str] = &["id", "name", "status"];

pub static COUNTRY: EntityDef = EntityDef {
    name: "country",
    table: "country",
    primary_key: "id",
    columns: COUNTRY_COLUMNS,
};

pub static LANGUAGE: EntityDef = EntityDef {
    name: "language",
    table: "language",
    primary_key: "id",
    columns: NAMED_COLUMNS,
};

pub static OCCUPATION: EntityDef = EntityDef {
    name: "occupation",
    table: "occupation",
    primary_key: "id",
    columns: NAMED_COLUMNS,
};

pub static EDUCATION_LEVEL: EntityDef = EntityDef {
    name: "education_level",
    table: "education_level",
    primary_key: "id",
    columns: &["id", "name", "level", "status"],
};

pub static EDUCATION_MAJOR: EntityDef = EntityDef {
    name: "education_major",
    table: "education_major",
    primary_key: "id",
    columns: NAMED_COLUMNS,
};

pub static SURVEY_TYPE: EntityDef = EntityDef {
    name: "survey_type",
    table: "survey_type",
    primary_key: "id",
    columns: NAMED_COLUMNS,
};

pub static PARTNER: EntityDef = EntityDef {
    name: "partner",
    table: "partner",
    primary_key: "id",
    columns: PARTNER_COLUMNS,
};

/// Reference tables sharing the keyword and status filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceTable {
    Country,
    Language,
    Occupation,
    EducationLevel,
    EducationMajor,
    SurveyType,
}

impl ReferenceTable {
    pub fn entity(self) -> &'static EntityDef {
        match self {
            Self::Country => &COUNTRY,
            Self::Language => &LANGUAGE,
            Self::Occupation => &OCCUPATION,
            Self::EducationLevel => &EDUCATION_LEVEL,
            Self::EducationMajor => &EDUCATION_MAJOR,
            Self::SurveyType => &SURVEY_TYPE,
        }
    }
}
