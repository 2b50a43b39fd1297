// Integration tests for TeamUp Match

use std::path::PathBuf;
use teamup_match::core::{Matcher, RecommendationFilter};
use teamup_match::core::similarity::{cosine_similarity, jaccard_similarity, time_compatibility};
use teamup_match::models::{
    CreateTeamRequest, InviteRequest, MatchTag, RecommendRequest, ScoringWeights, UserProfile,
};
use teamup_match::services::{
    find_profile, load_profiles, FileStore, KeyValueStore, RecommendationService, StoreKey, TeamService,
};

fn demo_pool() -> Vec<UserProfile> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/profiles.json");
    load_profiles(path).expect("demo profiles should load")
}

#[test]
fn test_integration_demo_pool_ranking() {
    let pool = demo_pool();
    assert_eq!(pool.len(), 12);

    let target = find_profile(&pool, "user1").unwrap();
    let result = Matcher::with_default_weights().recommend(target, &pool, 12);

    // target is in the pool and gets excluded
    assert_eq!(result.matches.len(), 11);
    assert_eq!(result.total_candidates, 11);
    assert!(result.matches.iter().all(|m| m.user_id != "user1"));
    assert!(result.matches.first().unwrap().score >= result.matches.last().unwrap().score);

    for pair in result.matches.windows(2) {
        assert!(pair[0].score >= pair[1].score, "results must be sorted descending");
    }

    assert_eq!(result.matches[0].user_id, "user5");
    assert_eq!(result.matches[1].user_id, "user8");
}

#[test]
fn test_integration_tags_on_demo_pool() {
    let pool = demo_pool();
    let target = find_profile(&pool, "user1").unwrap();
    let result = Matcher::default().recommend(target, &pool, 12);

    let user9 = result.matches.iter().find(|m| m.user_id == "user9").unwrap();
    assert_eq!(
        user9.matched_on,
        vec![MatchTag::Skill, MatchTag::Interest, MatchTag::Personality, MatchTag::Role]
    );

    // user8 shares user1's personality vector exactly
    let user8 = result.matches.iter().find(|m| m.user_id == "user8").unwrap();
    assert_eq!(user8.details.personality_compat, 1.0);
    assert!(!user8.has_tag(MatchTag::Role));
}

#[test]
fn test_integration_symmetry_and_bounds_across_pool() {
    let pool = demo_pool();
    let weights = ScoringWeights::default();
    let matcher = Matcher::new(weights);

    for a in &pool {
        for b in &pool {
            assert_eq!(time_compatibility(&a.time_pref, &b.time_pref), time_compatibility(&b.time_pref, &a.time_pref));
            assert_eq!(jaccard_similarity(&a.skills, &b.skills), jaccard_similarity(&b.skills, &a.skills));
            assert_eq!(jaccard_similarity(&a.interests, &b.interests), jaccard_similarity(&b.interests, &a.interests));
            assert_eq!(cosine_similarity(&a.personality, &b.personality), cosine_similarity(&b.personality, &a.personality));
        }

        for m in matcher.recommend(a, &pool, pool.len()).matches {
            assert!(m.score >= 0.0 && m.score <= weights.sum() + 1e-9);
        }
    }
}

#[test]
fn test_integration_top_n_and_empty_pool() {
    let pool = demo_pool();
    let target = find_profile(&pool, "user3").unwrap();
    let matcher = Matcher::default();

    assert_eq!(matcher.recommend(target, &pool, 3).matches.len(), 3);
    assert_eq!(matcher.recommend(target, &pool, 50).matches.len(), 11);
    assert!(matcher.recommend(target, &pool, 0).matches.is_empty());
    assert!(matcher.recommend(target, &[], 10).matches.is_empty());

    // a target outside the pool keeps every candidate
    let mut outsider = target.clone();
    outsider.id = "visitor".to_string();
    assert_eq!(matcher.recommend(&outsider, &pool, 50).matches.len(), 12);
}

#[test]
fn test_integration_filters_preserve_rank_order() {
    let pool = demo_pool();
    let target = find_profile(&pool, "user1").unwrap();
    let ranked = Matcher::default().recommend(target, &pool, 12).matches;

    let developers = RecommendationFilter::new(Some(MatchTag::Role), None).apply(ranked.clone());
    let ids: Vec<&str> = developers.iter().map(|m| m.user_id.as_str()).collect();
    assert_eq!(ids, vec!["user9", "user10", "user6", "user4", "user12"]);

    let designers = RecommendationFilter::new(None, Some("디자인".to_string())).apply(ranked);
    assert_eq!(designers.len(), 2);
}

#[test]
fn test_integration_recommend_then_form_team() {
    let pool = demo_pool();
    let service = RecommendationService::new(Matcher::default(), 100);
    let response = service
        .recommend(
            &RecommendRequest {
                user_id: "user1".to_string(),
                top_n: 12,
                weights: None,
                tag: None,
                search: None,
            },
            &pool,
        )
        .unwrap();
    assert_eq!(response.summary.count, 11);
    assert_eq!(response.summary.top_match_percent, 58);

    let developers_only = service
        .recommend(
            &RecommendRequest {
                user_id: "user1".to_string(),
                top_n: 12,
                weights: None,
                tag: Some(MatchTag::Role),
                search: None,
            },
            &pool,
        )
        .unwrap();
    assert_eq!(developers_only.recommendations.len(), 5);
    assert_eq!(developers_only.recommendations[0].user_id, "user9");
    assert_eq!(developers_only.summary, response.summary);

    let dir = std::env::temp_dir().join(format!("teamup-it-{}", uuid::Uuid::new_v4()));
    let store_path = dir.join("store.json");

    let team_id = {
        let teams = TeamService::new(FileStore::open(&store_path).unwrap());
        let team = teams
            .create_team(CreateTeamRequest {
                owner_id: "user1".to_string(),
                name: "캡스톤 디자인".to_string(),
                course_id: "CSE4000".to_string(),
                course_name: "Capstone".to_string(),
            })
            .unwrap();

        let top = &response.recommendations[0];
        let invitation = teams
            .invite_candidate(InviteRequest {
                team_id: team.id.clone(),
                inviter_id: "user1".to_string(),
                candidate_id: top.user_id.clone(),
            })
            .unwrap();
        teams.accept_invitation(&team.id, &invitation.id).unwrap();
        team.id
    };

    // state survives reopening the store file
    let reopened = TeamService::new(FileStore::open(&store_path).unwrap());
    let team = reopened.get_team(&team_id).unwrap();
    assert_eq!(team.members, vec!["user1", "user5"]);
    assert_eq!(reopened.teams_for_member("user5").unwrap().len(), 1);
    assert!(reopened.store().get(&StoreKey::invitations(&team_id)).unwrap().is_some());

    let _ = std::fs::remove_dir_all(dir);
}
