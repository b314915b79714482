//! Entity graph of the searchable tables.
//!
//! One module per root entity: its [`EntityDef`], the relations reachable from
//! it and a [`JoinPath`] enum naming every path. Path strings are the relation
//! names joined with dots, which is also how sort fields address them.
//!
//! [`EntityDef`]: catalog_query::EntityDef
//! [`JoinPath`]: catalog_query::JoinPath

pub mod candidate;
pub mod job;
pub mod opportunity;
pub mod reference;
pub mod saved;
pub mod user;

use catalog_query::{Cardinality, Relation};

pub(crate) const USER_COLUMNS: &[&str] = &[
    "id",
    "username",
    "first_name",
    "last_name",
    "email",
    "role",
    "status",
    "partner_id",
    "created_date",
    "last_login",
];

pub(crate) const PARTNER_COLUMNS: &[&str] = &[
    "id",
    "name",
    "abbreviation",
    "status",
    "source_partner",
    "job_creator",
];

pub(crate) const COUNTRY_COLUMNS: &[&str] = &["id", "name", "status"];

/// `partner_id -> partner`
pub(crate) static PARTNER: Relation = Relation {
    name: "partner",
    table: "partner",
    local_key: "partner_id",
    foreign_key: "id",
    cardinality: Cardinality::ToOne,
    columns: PARTNER_COLUMNS,
};

/// `country_id -> country`
pub(crate) static COUNTRY: Relation = Relation {
    name: "country",
    table: "country",
    local_key: "country_id",
    foreign_key: "id",
    cardinality: Cardinality::ToOne,
    columns: COUNTRY_COLUMNS,
};

/// `created_by_id -> users`
pub(crate) static CREATED_BY: Relation = Relation {
    name: "created_by",
    table: "users",
    local_key: "created_by_id",
    foreign_key: "id",
    cardinality: Cardinality::ToOne,
    columns: USER_COLUMNS,
};
