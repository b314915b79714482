use super::{PARTNER, USER_COLUMNS};
use catalog_query::{EntityDef, JoinPath, Relation};

pub static USERS: EntityDef = EntityDef {
    name: "user",
    table: "users",
    primary_key: "id",
    columns: USER_COLUMNS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserPath {
    Partner,
}

impl JoinPath for UserPath {
    fn all() -> &'static [Self] {
        &[Self::Partner]
    }

    fn path(self) -> &'static str {
        "partner"
    }

    fn parent(self) -> Option<Self> {
        None
    }

    fn relation(self) -> &'static Relation {
        &PARTNER
    }
}
