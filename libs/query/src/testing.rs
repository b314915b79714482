//! Small entity graph shared by the unit tests.

use crate::condition::Condition;
use crate::eval::{Dataset, Record};
use crate::graph::{Cardinality, EntityDef, JoinPath, Relation};
use crate::membership::MembershipTable;
use crate::scope::QueryScope;
use crate::spec::SearchQuery;

pub(crate) static PERSON: EntityDef = EntityDef {
    name: "person",
    table: "person",
    primary_key: "id",
    columns: &["id", "name", "email", "age", "status", "active", "team_id"],
};

static TEAM: Relation = Relation {
    name: "team",
    table: "team",
    local_key: "team_id",
    foreign_key: "id",
    cardinality: Cardinality::ToOne,
    columns: &["id", "name", "org_id"],
};

static TEAM_ORG: Relation = Relation {
    name: "org",
    table: "org",
    local_key: "org_id",
    foreign_key: "id",
    cardinality: Cardinality::ToOne,
    columns: &["id", "name"],
};

static SKILLS: Relation = Relation {
    name: "skills",
    table: "person_skill",
    local_key: "id",
    foreign_key: "person_id",
    cardinality: Cardinality::ToMany,
    columns: &["id", "person_id", "skill_id", "years"],
};

static SKILLS_SKILL: Relation = Relation {
    name: "skill",
    table: "skill",
    local_key: "skill_id",
    foreign_key: "id",
    cardinality: Cardinality::ToOne,
    columns: &["id", "name"],
};

pub(crate) static PERSON_GROUP: MembershipTable = MembershipTable {
    table: "person_group",
    member_column: "person_id",
    group_column: "group_id",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum PersonPath {
    Team,
    TeamOrg,
    Skills,
    SkillsSkill,
}

impl JoinPath for PersonPath {
    fn all() -> &'static [Self] {
        &[Self::Team, Self::TeamOrg, Self::Skills, Self::SkillsSkill]
    }

    fn path(self) -> &'static str {
        match self {
            Self::Team => "team",
            Self::TeamOrg => "team.org",
            Self::Skills => "skills",
            Self::SkillsSkill => "skills.skill",
        }
    }

    fn parent(self) -> Option<Self> {
        match self {
            Self::Team | Self::Skills => None,
            Self::TeamOrg => Some(Self::Team),
            Self::SkillsSkill => Some(Self::Skills),
        }
    }

    fn relation(self) -> &'static Relation {
        match self {
            Self::Team => &TEAM,
            Self::TeamOrg => &TEAM_ORG,
            Self::Skills => &SKILLS,
            Self::SkillsSkill => &SKILLS_SKILL,
        }
    }
}

fn skill(id: i64, skill_id: i64, name: &str, years: Option<i64>) -> Record {
    Record::new()
        .with("id", id)
        .with("skill_id", skill_id)
        .with("years", years)
        .with_one("skill", Record::new().with("id", skill_id).with("name", name))
}

/// Four people, two teams, a handful of skills and group memberships:
///
/// | id | name  | age  | team | skills            | groups |
/// |----|-------|------|------|-------------------|--------|
/// | 1  | Ada   | 36   | 10   | rust(5), sql(2)   | 7, 9   |
/// | 2  | Bob   | null | 10   | sql(null)         | 7      |
/// | 3  | Cy    | 52   | 20   | -                 | 9      |
/// | 4  | Dee   | 28   | -    | rust(1)           | -      |
pub(crate) fn people() -> Dataset {
    let acme = Record::new().with("id", 100).with("name", "Acme");
    let team_a = Record::new()
        .with("id", 10)
        .with("name", "Alpha")
        .with_one("org", acme.clone());
    let team_b = Record::new()
        .with("id", 20)
        .with("name", "Beta")
        .with_one("org", acme);

    let mut data = Dataset::new();
    data.insert(
        "person",
        Record::new()
            .with("id", 1)
            .with("name", "Ada")
            .with("email", "ada@example.org")
            .with("age", 36)
            .with("status", "active")
            .with("active", true)
            .with_one("team", team_a.clone())
            .with_many(
                "skills",
                vec![skill(1, 1, "Rust", Some(5)), skill(2, 2, "SQL", Some(2))],
            ),
    );
    data.insert(
        "person",
        Record::new()
            .with("id", 2)
            .with("name", "Bob")
            .with("email", "bob@example.org")
            .with("age", Option::<i64>::None)
            .with("status", "active")
            .with("active", false)
            .with_one("team", team_a)
            .with_many("skills", vec![skill(3, 2, "SQL", None)]),
    );
    data.insert(
        "person",
        Record::new()
            .with("id", 3)
            .with("name", "Cy")
            .with("email", "cy@example.org")
            .with("age", 52)
            .with("status", "inactive")
            .with_one("team", team_b),
    );
    data.insert(
        "person",
        Record::new()
            .with("id", 4)
            .with("name", "Dee")
            .with("age", 28)
            .with("status", "active")
            .with("active", true)
            .with_many("skills", vec![skill(4, 1, "Rust", Some(1))]),
    );

    for (person, group) in [(1, 7), (1, 9), (2, 7), (3, 9)] {
        data.insert(
            "person_group",
            Record::new()
                .with("person_id", person)
                .with("group_id", group),
        );
    }
    data
}

/// Ids of [`people`] matching `condition`, ascending.
pub(crate) fn matching_ids(scope: QueryScope<PersonPath>, condition: Condition) -> Vec<i64> {
    let query = SearchQuery::new(scope, condition, Vec::new());
    let mut ids: Vec<i64> = people()
        .matching(&query)
        .into_iter()
        .filter_map(Record::id)
        .collect();
    ids.sort_unstable();
    ids
}
