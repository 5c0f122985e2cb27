//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the schema from roster-db/schema.sql
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Team CRUD Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_team() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateTeamRequest::unique();

    let response = server.post("/api/v1/teams", &request).await.unwrap();
    let team: TeamResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(team.name, request.name);

    let response = server.get(&format!("/api/v1/teams/{}", team.id)).await.unwrap();
    let fetched: TeamResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, team.id);
}

#[tokio::test]
async fn test_duplicate_team_name_conflicts() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateTeamRequest::unique();

    server.post("/api/v1/teams", &request).await.unwrap();
    let response = server.post("/api/v1/teams", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_get_unknown_team() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/teams/999999999").await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "NOT_FOUND");
}

// ============================================================================
// Member CRUD Tests
// ============================================================================

#[tokio::test]
async fn test_create_get_delete_member() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let team: TeamResponse = assert_json(
        server.post("/api/v1/teams", &CreateTeamRequest::unique()).await.unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    let request = CreateMemberRequest::unique(25, Some(team.id));
    let response = server.post("/api/v1/members", &request).await.unwrap();
    let member: MemberResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(member.username, request.username);
    assert_eq!(member.team_id, Some(team.id));

    let response = server.get(&format!("/api/v1/members/{}", member.id)).await.unwrap();
    let fetched: MemberResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.age, 25);

    let response = server.delete(&format!("/api/v1/members/{}", member.id)).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&format!("/api/v1/members/{}", member.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_create_member_with_unknown_team() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateMemberRequest::unique(30, Some(999_999_999));

    let response = server.post("/api/v1/members", &request).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_create_member_validation() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Empty username fails the validator check
    let request = serde_json::json!({ "username": "", "age": 10 });
    let response = server.post("/api/v1/members", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Search Tests (v1, non-paged)
// ============================================================================

/// One team plus members with the given ages; returns the team and usernames
async fn seed_team(server: &TestServer, ages: &[i32]) -> (TeamResponse, Vec<String>) {
    let team: TeamResponse = assert_json(
        server.post("/api/v1/teams", &CreateTeamRequest::unique()).await.unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    let mut usernames = Vec::new();
    for &age in ages {
        let request = CreateMemberRequest::unique(age, Some(team.id));
        let member: MemberResponse = assert_json(
            server.post("/api/v1/members", &request).await.unwrap(),
            StatusCode::CREATED,
        )
        .await
        .unwrap();
        usernames.push(member.username);
    }

    (team, usernames)
}

#[tokio::test]
async fn test_search_by_team_and_age_range() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (team, _) = seed_team(&server, &[10, 20, 30, 40]).await;

    let response = server
        .get(&format!(
            "/api/v1/members?teamName={}&ageGoe=15&ageLoe=35",
            team.name
        ))
        .await
        .unwrap();
    let rows: Vec<MemberTeamDto> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.team_name.as_deref() == Some(team.name.as_str())));
    assert!(rows.iter().all(|r| r.age >= 15 && r.age <= 35));
}

#[tokio::test]
async fn test_search_by_username() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (team, usernames) = seed_team(&server, &[33]).await;

    let response = server
        .get(&format!("/api/v1/members?username={}", usernames[0]))
        .await
        .unwrap();
    let rows: Vec<MemberTeamDto> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].team_id, Some(team.id));
}

#[tokio::test]
async fn test_search_blank_param_means_absent() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (team, _) = seed_team(&server, &[18]).await;

    // A blank username does not constrain the result
    let response = server
        .get(&format!("/api/v1/members?username=&teamName={}", team.name))
        .await
        .unwrap();
    let rows: Vec<MemberTeamDto> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(rows.len(), 1);
}

// ============================================================================
// Search Tests (v2, paged)
// ============================================================================

#[tokio::test]
async fn test_paged_search_partitions_results() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (team, _) = seed_team(&server, &[10, 20, 30, 40, 50]).await;

    let mut seen = Vec::new();
    for page in 0..3 {
        let response = server
            .get(&format!(
                "/api/v2/members?teamName={}&page={}&size=2",
                team.name, page
            ))
            .await
            .unwrap();
        let body: PageResponse<MemberTeamDto> = assert_json(response, StatusCode::OK).await.unwrap();

        assert_eq!(body.total_count, 5);
        assert_eq!(body.total_pages, 3);
        assert_eq!(body.page_number, page);
        seen.extend(body.content.into_iter().map(|r| r.member_id));
    }

    // Every row appears exactly once across the pages
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), 5);
}

#[tokio::test]
async fn test_paged_search_beyond_end() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (team, _) = seed_team(&server, &[10, 20]).await;

    let response = server
        .get(&format!("/api/v2/members?teamName={}&page=50&size=10", team.name))
        .await
        .unwrap();
    let body: PageResponse<MemberTeamDto> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.content.is_empty());
    assert_eq!(body.total_count, 2);
}

#[tokio::test]
async fn test_paged_search_rejects_zero_size() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v2/members?page=0&size=0").await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_PAGE_SIZE");
}

// ============================================================================
// Bulk Mutation Tests
// ============================================================================

#[tokio::test]
async fn test_bulk_rename() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (team, _) = seed_team(&server, &[5, 8, 40]).await;

    let new_name = format!("renamed{}", integration_tests::unique_suffix());
    let request = BulkRenameRequest {
        new_username: new_name.clone(),
        age_lt: 10,
    };
    let response = server.post("/api/v1/members/bulk/rename", &request).await.unwrap();
    let bulk: BulkResponse = assert_json(response, StatusCode::OK).await.unwrap();
    // Other rows in the shared database may be renamed too
    assert!(bulk.affected >= 2);

    let response = server
        .get(&format!(
            "/api/v1/members?username={}&teamName={}",
            new_name, team.name
        ))
        .await
        .unwrap();
    let rows: Vec<MemberTeamDto> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(rows.len(), 2);
}

#[tokio::test]
async fn test_bulk_age_increment() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (team, usernames) = seed_team(&server, &[21]).await;

    let response = server
        .post("/api/v1/members/bulk/age", &BulkAgeRequest { delta: 1 })
        .await
        .unwrap();
    let bulk: BulkResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(bulk.affected >= 1);

    let response = server
        .get(&format!(
            "/api/v1/members?username={}&teamName={}",
            usernames[0], team.name
        ))
        .await
        .unwrap();
    let rows: Vec<MemberTeamDto> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(rows[0].age, 22);
}

#[tokio::test]
async fn test_bulk_delete() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, _) = seed_team(&server, &[195]).await;

    let response = server.delete("/api/v1/members/bulk?ageGt=190").await.unwrap();
    let bulk: BulkResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(bulk.affected >= 1);
}

// ============================================================================
// Team Membership Tests
// ============================================================================

#[tokio::test]
async fn test_team_members_endpoint() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (team, _) = seed_team(&server, &[11, 12, 13]).await;

    let response = server
        .get(&format!("/api/v1/teams/{}/members", team.id))
        .await
        .unwrap();
    let members: Vec<MemberResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(members.len(), 3);
}

#[tokio::test]
async fn test_delete_team_detaches_members() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (team, usernames) = seed_team(&server, &[15]).await;

    let response = server.delete(&format!("/api/v1/teams/{}", team.id)).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // The member survives with its team reference cleared
    let response = server
        .get(&format!("/api/v1/members?username={}", usernames[0]))
        .await
        .unwrap();
    let rows: Vec<MemberTeamDto> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].team_name.is_none());
}
