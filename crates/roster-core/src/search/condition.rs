//! Member search condition
//!
//! All fields are optional: absence means "no constraint on this field".
//! A condition with every field absent composes to the empty predicate set,
//! which matches all rows.

use serde::Deserialize;

use crate::search::{Predicate, PredicateBuilder, PredicateSet};

/// Optional search criteria for the member/team join.
///
/// Deserializes from camelCase query strings (`teamName`, `ageGoe`, `ageLoe`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSearchCondition {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub age_goe: Option<i32>,
    #[serde(default)]
    pub age_loe: Option<i32>,
}

impl MemberSearchCondition {
    /// Compose the filter using the parameter-list strategy: each field maps
    /// to an independently-nullable fragment and nulls are skipped.
    pub fn predicates(&self) -> PredicateSet {
        PredicateSet::from_params([
            Predicate::username_eq(self.username.as_deref()),
            Predicate::team_name_eq(self.team_name.as_deref()),
            Predicate::age_goe(self.age_goe),
            Predicate::age_loe(self.age_loe),
        ])
    }

    /// Compose the filter using the builder-accumulation strategy. Must
    /// produce the same set as `predicates` for any input.
    pub fn predicates_by_builder(&self) -> PredicateSet {
        PredicateBuilder::new()
            .and(Predicate::username_eq(self.username.as_deref()))
            .and(Predicate::team_name_eq(self.team_name.as_deref()))
            .and(Predicate::age_goe(self.age_goe))
            .and(Predicate::age_loe(self.age_loe))
            .build()
    }
}
