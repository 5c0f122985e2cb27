//! Predicate fragments and their conjunctive composition
//!
//! Each search field yields at most one fragment; absent or blank input
//! yields none. Fragments compose with logical AND, and the empty set is the
//! neutral element: it matches every row, never zero rows.

use crate::search::MemberTeamRecord;

/// A single filter condition derived from one search field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Predicate {
    UsernameEq(String),
    TeamNameEq(String),
    AgeGoe(i32),
    AgeLoe(i32),
}

impl Predicate {
    /// Username equality fragment; blank/whitespace-only input is treated as
    /// absent (has-text semantics, not a strict null check).
    pub fn username_eq(value: Option<&str>) -> Option<Self> {
        value
            .filter(|s| has_text(s))
            .map(|s| Self::UsernameEq(s.to_string()))
    }

    /// Team-name equality fragment, same has-text semantics
    pub fn team_name_eq(value: Option<&str>) -> Option<Self> {
        value
            .filter(|s| has_text(s))
            .map(|s| Self::TeamNameEq(s.to_string()))
    }

    /// Lower age bound fragment (age >= value)
    pub fn age_goe(value: Option<i32>) -> Option<Self> {
        value.map(Self::AgeGoe)
    }

    /// Upper age bound fragment (age <= value)
    pub fn age_loe(value: Option<i32>) -> Option<Self> {
        value.map(Self::AgeLoe)
    }

    /// Evaluate this fragment against an in-memory row
    pub fn matches(&self, row: &MemberTeamRecord) -> bool {
        match self {
            Self::UsernameEq(username) => row.username == *username,
            Self::TeamNameEq(name) => row.team_name.as_deref() == Some(name.as_str()),
            Self::AgeGoe(bound) => row.age >= *bound,
            Self::AgeLoe(bound) => row.age <= *bound,
        }
    }
}

fn has_text(s: &str) -> bool {
    !s.trim().is_empty()
}

/// Ordered conjunction of predicate fragments
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PredicateSet {
    fragments: Vec<Predicate>,
}

impl PredicateSet {
    /// The neutral element: matches every row
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parameter-list strategy: a sequence of independently-nullable
    /// fragments, null entries skipped.
    pub fn from_params<I>(params: I) -> Self
    where
        I: IntoIterator<Item = Option<Predicate>>,
    {
        Self {
            fragments: params.into_iter().flatten().collect(),
        }
    }

    /// Whether no fragment is present (no WHERE clause will be emitted)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// The composed fragments, in composition order
    #[inline]
    pub fn fragments(&self) -> &[Predicate] {
        &self.fragments
    }

    /// Evaluate the conjunction against an in-memory row. The empty set
    /// matches everything.
    pub fn matches(&self, row: &MemberTeamRecord) -> bool {
        self.fragments.iter().all(|p| p.matches(row))
    }
}

/// Builder-accumulation strategy: start from the always-true predicate and
/// conjunctively AND in each present fragment.
#[derive(Debug, Clone, Default)]
pub struct PredicateBuilder {
    set: PredicateSet,
}

impl PredicateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// AND in a fragment; `None` is a no-op
    pub fn and(mut self, fragment: Option<Predicate>) -> Self {
        if let Some(fragment) = fragment {
            self.set.fragments.push(fragment);
        }
        self
    }

    pub fn build(self) -> PredicateSet {
        self.set
    }
}
