use reverse_ai::AiConfig;
use reverse_app::{AppConfig, AppState};
use reverse_core::DAILY_PROMPT_LIMIT;

fn test_state(dir: &tempfile::TempDir) -> AppState {
    let state = AppState::new(AppConfig {
        db_path: dir.path().join("app.sqlite"),
        ai: AiConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            api_key: "test".to_string(),
            model: "gpt-4".to_string(),
        },
    });
    state.setup_db().expect("setup db");
    state
}

#[test]
fn check_increment_check_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let state = test_state(&dir);

    let status = state.services.quota.check("u1");
    assert!(status.can_use_prompt);
    assert_eq!(status.remaining_prompts, DAILY_PROMPT_LIMIT);
    assert_eq!(status.total_used, 0);

    for _ in 0..DAILY_PROMPT_LIMIT {
        assert!(state.services.quota.record_use("u1").is_none());
    }

    let status = state.services.quota.check("u1");
    assert!(!status.can_use_prompt);
    assert_eq!(status.remaining_prompts, 0);
    assert_eq!(status.total_used, DAILY_PROMPT_LIMIT);
}

#[test]
fn quota_and_feedback_show_up_in_admin_views() {
    let dir = tempfile::tempdir().expect("tempdir");
    let state = test_state(&dir);

    state.services.quota.check("u1");
    state.services.quota.record_use("u2");
    state
        .services
        .feedback
        .save("u1", "the mirror flipped my cat")
        .expect("save feedback");

    let prompts = state
        .services
        .admin
        .fetch_all_user_prompts()
        .expect("list prompts");
    assert_eq!(prompts.len(), 2);

    let feedback = state
        .services
        .admin
        .fetch_all_feedback()
        .expect("list feedback");
    assert_eq!(feedback.len(), 1);
    assert_eq!(feedback[0].user_id, "u1");
}
