//! End-to-end submission lifecycle: validate, mark in flight, call the API,
//! then clear or retain the stored draft depending on the outcome.

use chrono::{NaiveDate, Utc};
use permiso_cli::commands::request::submit_with_session;
use permiso_cli::config::{ApiConfig, Config, StateConfig};
use permiso_cli::draft::form::{self, FieldUpdate};
use permiso_cli::draft::model::{Department, LeaveType};
use permiso_cli::draft::store::{DraftState, with_draft_lock};
use permiso_cli::platform;
use permiso_cli::session::Session;
use std::path::PathBuf;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn test_config(leave_url: &str, state_dir: PathBuf) -> Config {
    Config {
        api: ApiConfig {
            leave_url: leave_url.to_string(),
            ..ApiConfig::default()
        },
        state: StateConfig {
            state_dir_override: Some(state_dir),
        },
        ..Config::default()
    }
}

fn seed_complete_draft(config: &Config) {
    let (lock_path, draft_path) =
        platform::draft_paths(config.state.state_dir_override.as_ref()).unwrap();

    with_draft_lock(&lock_path, &draft_path, |state| {
        let mut draft = form::reset();
        for update in [
            FieldUpdate::Employee("Ana Pérez".to_string()),
            FieldUpdate::LeaveType(LeaveType::Medical),
            FieldUpdate::RequestDate(date(2024, 2, 28)),
            FieldUpdate::StartDate(date(2024, 3, 1)),
            FieldUpdate::EndDate(date(2024, 3, 5)),
            FieldUpdate::Department(Department::Tic),
        ] {
            draft = form::apply(draft, update, 8).draft;
        }
        state.draft = draft;
        Ok(())
    })
    .unwrap();
}

fn load_state(config: &Config) -> DraftState {
    let (_lock, draft_path) =
        platform::draft_paths(config.state.state_dir_override.as_ref()).unwrap();
    DraftState::load(&draft_path).unwrap()
}

#[tokio::test]
async fn test_successful_submit_clears_draft() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/permisos/crear"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "p-1",
            "empleado": "Ana Pérez",
            "tipoPermiso": "Permiso Médico",
            "fechaPermiso": "2024-02-28",
            "tiempo": "5 días"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let temp = tempfile::tempdir().unwrap();
    let uri = mock_server.uri();
    let state_dir = temp.path().to_path_buf();

    let config = tokio::task::spawn_blocking(move || {
        let config = test_config(&uri, state_dir);
        seed_complete_draft(&config);
        submit_with_session(&config, &Session::new("tok")).unwrap();
        config
    })
    .await
    .unwrap();

    let state = load_state(&config);
    assert!(state.draft.is_empty(), "draft should be cleared on success");
    assert!(state.submission_started_at.is_none());
}

#[tokio::test]
async fn test_failed_submit_retains_draft() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/permisos/crear"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let temp = tempfile::tempdir().unwrap();
    let uri = mock_server.uri();
    let state_dir = temp.path().to_path_buf();

    let config = tokio::task::spawn_blocking(move || {
        let config = test_config(&uri, state_dir);
        seed_complete_draft(&config);
        let err = submit_with_session(&config, &Session::new("tok")).unwrap_err();
        assert!(err.to_string().contains("500"));
        config
    })
    .await
    .unwrap();

    let state = load_state(&config);
    assert_eq!(
        state.draft.employee_name.as_deref(),
        Some("Ana Pérez"),
        "draft must be retained for correction"
    );
    assert_eq!(state.draft.duration_label, "5 días");
    assert!(
        state.submission_started_at.is_none(),
        "in-flight marker must be cleared after failure"
    );
}

#[tokio::test]
async fn test_incomplete_draft_fails_before_any_network_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/permisos/crear"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let temp = tempfile::tempdir().unwrap();
    let uri = mock_server.uri();
    let state_dir = temp.path().to_path_buf();

    tokio::task::spawn_blocking(move || {
        let config = test_config(&uri, state_dir);

        // Draft with everything except a leave type
        let (lock_path, draft_path) =
            platform::draft_paths(config.state.state_dir_override.as_ref()).unwrap();
        with_draft_lock(&lock_path, &draft_path, |state| {
            let mut draft = form::reset();
            for update in [
                FieldUpdate::Employee("Ana Pérez".to_string()),
                FieldUpdate::RequestDate(date(2024, 2, 28)),
                FieldUpdate::StartDate(date(2024, 3, 1)),
                FieldUpdate::EndDate(date(2024, 3, 5)),
                FieldUpdate::Department(Department::Tic),
            ] {
                draft = form::apply(draft, update, 8).draft;
            }
            state.draft = draft;
            Ok(())
        })
        .unwrap();

        let err = submit_with_session(&config, &Session::new("tok")).unwrap_err();
        assert!(err.to_string().contains("validation failed"));
    })
    .await
    .unwrap();

    // MockServer verifies expect(0) on drop
}

#[tokio::test]
async fn test_fresh_in_flight_marker_blocks_resubmission() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/permisos/crear"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let temp = tempfile::tempdir().unwrap();
    let uri = mock_server.uri();
    let state_dir = temp.path().to_path_buf();

    tokio::task::spawn_blocking(move || {
        let config = test_config(&uri, state_dir);
        seed_complete_draft(&config);

        let (lock_path, draft_path) =
            platform::draft_paths(config.state.state_dir_override.as_ref()).unwrap();
        with_draft_lock(&lock_path, &draft_path, |state| {
            state.submission_started_at = Some(Utc::now());
            Ok(())
        })
        .unwrap();

        let err = submit_with_session(&config, &Session::new("tok")).unwrap_err();
        assert!(err.to_string().contains("already in flight"));
    })
    .await
    .unwrap();
}
