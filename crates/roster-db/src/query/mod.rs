//! Rendering composed predicate sets into SQL
//!
//! A `PredicateSet` is translated into a WHERE clause with bound parameters.
//! The empty set emits no WHERE clause at all, so an all-absent search
//! condition selects every row. The same rendering is shared by the list,
//! narrow, count, and paged queries, which keeps their result sets aligned.

use roster_core::search::{Predicate, PredicateSet};
use sqlx::{Postgres, QueryBuilder};

/// Base SELECT for the member/team left outer join projection
pub const MEMBER_TEAM_SELECT: &str = "SELECT m.id AS member_id, m.username, m.age, \
     t.id AS team_id, t.name AS team_name \
     FROM members m LEFT OUTER JOIN teams t ON m.team_id = t.id";

/// Narrow projection over the same join
pub const MEMBER_NARROW_SELECT: &str = "SELECT m.username, m.age \
     FROM members m LEFT OUTER JOIN teams t ON m.team_id = t.id";

/// COUNT twin of `MEMBER_TEAM_SELECT`, used by the paged variant
pub const MEMBER_TEAM_COUNT: &str = "SELECT COUNT(m.id) \
     FROM members m LEFT OUTER JOIN teams t ON m.team_id = t.id";

/// Append the predicate set as a WHERE clause with bound parameters.
/// Emits nothing when the set is empty.
pub fn push_predicates(qb: &mut QueryBuilder<'_, Postgres>, set: &PredicateSet) {
    if set.is_empty() {
        return;
    }

    qb.push(" WHERE ");
    for (i, predicate) in set.fragments().iter().enumerate() {
        if i > 0 {
            qb.push(" AND ");
        }
        match predicate {
            Predicate::UsernameEq(username) => {
                qb.push("m.username = ");
                qb.push_bind(username.clone());
            }
            Predicate::TeamNameEq(name) => {
                qb.push("t.name = ");
                qb.push_bind(name.clone());
            }
            Predicate::AgeGoe(bound) => {
                qb.push("m.age >= ");
                qb.push_bind(*bound);
            }
            Predicate::AgeLoe(bound) => {
                qb.push("m.age <= ");
                qb.push_bind(*bound);
            }
        }
    }
}
