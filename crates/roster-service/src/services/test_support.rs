//! In-memory repository implementations for service-level tests.
//!
//! Behaves like the Postgres repositories (predicate filtering, id ordering,
//! paging math) without needing a database.

use async_trait::async_trait;
use roster_core::entities::{Member, Team};
use roster_core::search::{MemberRecord, MemberSearchCondition, MemberTeamRecord};
use roster_core::traits::{MemberRepository, RepoResult, TeamRepository};
use roster_core::value_objects::{MemberId, Page, PageRequest, TeamId};
use roster_core::DomainError;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use super::context::ServiceContext;

/// Shared backing store for both repositories
#[derive(Default)]
pub(crate) struct InMemoryStore {
    members: Mutex<Vec<Member>>,
    teams: Mutex<Vec<Team>>,
    next_id: AtomicI64,
}

impl InMemoryStore {
    fn next(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn join_rows(&self) -> Vec<MemberTeamRecord> {
        let teams = self.teams.lock().unwrap();
        self.members
            .lock()
            .unwrap()
            .iter()
            .map(|m| {
                let team = m.team_id.and_then(|id| teams.iter().find(|t| t.id == id));
                MemberTeamRecord {
                    member_id: m.id,
                    username: m.username.clone(),
                    age: m.age,
                    team_id: team.map(|t| t.id),
                    team_name: team.map(|t| t.name.clone()),
                }
            })
            .collect()
    }
}

pub(crate) struct InMemoryMemberRepository(Arc<InMemoryStore>);

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn find_by_id(&self, id: MemberId) -> RepoResult<Option<Member>> {
        Ok(self.0.members.lock().unwrap().iter().find(|m| m.id == id).cloned())
    }

    async fn find_all(&self) -> RepoResult<Vec<Member>> {
        Ok(self.0.members.lock().unwrap().clone())
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Vec<Member>> {
        Ok(self
            .0
            .members
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.username == username)
            .cloned()
            .collect())
    }

    async fn create(&self, member: &Member) -> RepoResult<MemberId> {
        let id = MemberId::new(self.0.next());
        let mut stored = member.clone();
        stored.id = id;
        self.0.members.lock().unwrap().push(stored);
        Ok(id)
    }

    async fn delete(&self, id: MemberId) -> RepoResult<()> {
        let mut members = self.0.members.lock().unwrap();
        let before = members.len();
        members.retain(|m| m.id != id);
        if members.len() == before {
            return Err(DomainError::MemberNotFound(id));
        }
        Ok(())
    }

    async fn search(&self, condition: &MemberSearchCondition) -> RepoResult<Vec<MemberTeamRecord>> {
        let set = condition.predicates();
        Ok(self.0.join_rows().into_iter().filter(|r| set.matches(r)).collect())
    }

    async fn search_by_builder(
        &self,
        condition: &MemberSearchCondition,
    ) -> RepoResult<Vec<MemberTeamRecord>> {
        let set = condition.predicates_by_builder();
        Ok(self.0.join_rows().into_iter().filter(|r| set.matches(r)).collect())
    }

    async fn search_members(
        &self,
        condition: &MemberSearchCondition,
    ) -> RepoResult<Vec<MemberRecord>> {
        Ok(self
            .search(condition)
            .await?
            .into_iter()
            .map(|r| MemberRecord {
                username: r.username,
                age: r.age,
            })
            .collect())
    }

    async fn search_page(
        &self,
        condition: &MemberSearchCondition,
        page: PageRequest,
    ) -> RepoResult<Page<MemberTeamRecord>> {
        let mut rows = self.search(condition).await?;
        rows.sort_by_key(|r| r.member_id);
        let total = rows.len() as i64;
        let content = rows
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(Page::new(content, total, page))
    }

    async fn rename_below_age(&self, new_username: &str, age_lt: i32) -> RepoResult<u64> {
        let mut members = self.0.members.lock().unwrap();
        let mut affected = 0;
        for member in members.iter_mut().filter(|m| m.age < age_lt) {
            member.username = new_username.to_string();
            affected += 1;
        }
        Ok(affected)
    }

    async fn increment_age(&self, delta: i32) -> RepoResult<u64> {
        let mut members = self.0.members.lock().unwrap();
        for member in members.iter_mut() {
            member.age += delta;
        }
        Ok(members.len() as u64)
    }

    async fn delete_older_than(&self, age_gt: i32) -> RepoResult<u64> {
        let mut members = self.0.members.lock().unwrap();
        let before = members.len();
        members.retain(|m| m.age <= age_gt);
        Ok((before - members.len()) as u64)
    }
}

pub(crate) struct InMemoryTeamRepository(Arc<InMemoryStore>);

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn find_by_id(&self, id: TeamId) -> RepoResult<Option<Team>> {
        Ok(self.0.teams.lock().unwrap().iter().find(|t| t.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Team>> {
        Ok(self.0.teams.lock().unwrap().iter().find(|t| t.name == name).cloned())
    }

    async fn create(&self, team: &Team) -> RepoResult<TeamId> {
        let id = TeamId::new(self.0.next());
        let mut stored = team.clone();
        stored.id = id;
        self.0.teams.lock().unwrap().push(stored);
        Ok(id)
    }

    async fn delete(&self, id: TeamId) -> RepoResult<()> {
        let mut teams = self.0.teams.lock().unwrap();
        let before = teams.len();
        teams.retain(|t| t.id != id);
        if teams.len() == before {
            return Err(DomainError::TeamNotFound(id));
        }
        drop(teams);

        // Mirrors ON DELETE SET NULL on members.team_id
        for member in self.0.members.lock().unwrap().iter_mut() {
            if member.team_id == Some(id) {
                member.team_id = None;
            }
        }
        Ok(())
    }

    async fn find_members(&self, id: TeamId) -> RepoResult<Vec<Member>> {
        Ok(self
            .0
            .members
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.team_id == Some(id))
            .cloned()
            .collect())
    }
}

/// A ServiceContext backed by empty in-memory repositories
pub(crate) fn test_context() -> ServiceContext {
    let store = Arc::new(InMemoryStore::default());
    ServiceContext::new(
        Arc::new(InMemoryMemberRepository(store.clone())),
        Arc::new(InMemoryTeamRepository(store)),
    )
}
