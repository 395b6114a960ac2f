//! End-to-end assessment flow over the HTTP router.

mod common;

use chrono::Utc;
use common::{CLASSIFICATION, QUESTIONS, TestApp, evaluation};
use http::StatusCode;
use ledger_ai::Evaluation;
use ledger_db::error::DatabaseError;
use ledger_server::ApiError;
use ledger_server::workflow::evaluate::publish;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn answers(count: u8) -> Value {
    let answers: Vec<Value> = (1..=count)
        .map(|n| json!({"questionNumber": n, "answer": format!("My answer to question {n}")}))
        .collect();
    Value::Array(answers)
}

/// Create an entry with text evidence and an intent, then classify it.
async fn classified_entry(app: &TestApp) -> String {
    let entry_id = app.create_entry(None).await;
    assert_eq!(app.add_text(&entry_id, None).await.status, StatusCode::OK);
    let intent = app
        .post_json(
            "/api/intent/save",
            None,
            &json!({"entry_id": entry_id, "intent_prompt": "I want to show I can run stock control"}),
        )
        .await;
    assert_eq!(intent.status, StatusCode::OK);
    assert_eq!(intent.body["success"], true);

    app.model.push(CLASSIFICATION);
    let analyzed = app
        .post_json("/api/ai/analyze", None, &json!({"entry_id": entry_id}))
        .await;
    assert_eq!(analyzed.status, StatusCode::OK, "{}", analyzed.body);
    entry_id
}

async fn entry_with_questions(app: &TestApp) -> String {
    let entry_id = classified_entry(app).await;
    app.model.push(QUESTIONS);
    let questions = app
        .post_json("/api/ai/questions", None, &json!({"entry_id": entry_id}))
        .await;
    assert_eq!(questions.status, StatusCode::OK, "{}", questions.body);
    entry_id
}

#[tokio::test]
async fn health_answers_ok() {
    let app = TestApp::new().await;
    let reply = app.get("/api/health", None).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, Value::String("ok".into()));
}

#[tokio::test]
async fn high_band_publishes_an_anonymous_verification() {
    let app = TestApp::new().await;
    let entry_id = classified_entry(&app).await;

    app.model.push(QUESTIONS);
    let questions = app
        .post_json("/api/ai/questions", None, &json!({"entry_id": entry_id}))
        .await;
    assert_eq!(questions.body["q1"], "Explain how your tracker flags low stock.");
    assert_eq!(questions.body["q4"], "What would you build next?");

    app.model.push(evaluation("High"));
    let evaluated = app
        .post_json(
            "/api/ai/evaluate",
            None,
            &json!({"entry_id": entry_id, "answers": answers(4)}),
        )
        .await;
    assert_eq!(evaluated.status, StatusCode::OK, "{}", evaluated.body);
    assert_eq!(evaluated.body["confidence_band"], "High");
    assert_eq!(evaluated.body["layer4_descriptor"], "Needs work");
    let public_id = evaluated.body["public_id"].as_str().unwrap().to_string();
    assert_eq!(public_id.len(), 16);
    assert!(evaluated.body["verification_id"].is_string());

    // The evaluation prompt carries the stored answers.
    let prompt = app.model.last_prompt().unwrap();
    assert!(prompt.contains("My answer to question 3"));

    let public = app.get(&format!("/api/verify/{public_id}"), None).await;
    assert_eq!(public.status, StatusCode::OK);
    assert_eq!(public.body["domain"], "Retail operations");
    assert_eq!(public.body["confidenceBand"], "High");
    assert_eq!(
        public.body["capabilitySummary"],
        "Can build a spreadsheet inventory tracker"
    );
    assert_eq!(
        public.body["intent_prompt"],
        "I want to show I can run stock control"
    );
    assert!(public.body.get("entry_id").is_none());
    assert!(!public.body.to_string().contains(&entry_id));

    let timeline = app.get("/api/entries", None).await;
    let row = &timeline.body["entries"][0];
    assert_eq!(row["status"], "Reviewed – link available");
    assert_eq!(row["public_id"], public_id.as_str());
    assert_eq!(app.model.calls(), 3);
}

#[tokio::test]
async fn low_band_is_reviewed_without_a_link() {
    let app = TestApp::new().await;
    let entry_id = entry_with_questions(&app).await;

    app.model.push(evaluation("Low"));
    let evaluated = app
        .post_json(
            "/api/ai/evaluate",
            None,
            &json!({"entry_id": entry_id, "answers": answers(4)}),
        )
        .await;
    assert_eq!(evaluated.status, StatusCode::OK);
    assert!(evaluated.body.get("public_id").is_none());
    assert!(evaluated.body.get("verification_id").is_none());

    let timeline = app.get("/api/entries", None).await;
    assert_eq!(timeline.body["entries"][0]["status"], "Reviewed");
}

#[tokio::test]
async fn timeline_tracks_progress() {
    let app = TestApp::new().await;
    let recorded = app.create_entry(None).await;
    let under_review = entry_with_questions(&app).await;

    let timeline = app.get("/api/entries", None).await;
    assert_eq!(timeline.status, StatusCode::OK);
    let entries = timeline.body["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    let status_of = |id: &str| {
        entries
            .iter()
            .find(|row| row["id"] == id)
            .map(|row| row["status"].as_str().unwrap().to_string())
            .unwrap()
    };
    assert_eq!(status_of(&recorded), "Recorded only");
    assert_eq!(status_of(&under_review), "Under review");

    let recorded_row = entries.iter().find(|row| row["id"] == recorded.as_str()).unwrap();
    assert_eq!(recorded_row["evidence_summary"], "No evidence yet");
}

#[tokio::test]
async fn three_answers_are_rejected_before_the_model_runs() {
    let app = TestApp::new().await;
    let entry_id = entry_with_questions(&app).await;
    let calls = app.model.calls();

    let reply = app
        .post_json(
            "/api/ai/evaluate",
            None,
            &json!({"entry_id": entry_id, "answers": answers(3)}),
        )
        .await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.code(), "VALIDATION_ERROR");
    assert_eq!(app.model.calls(), calls);
    assert!(app.state.db.list_answers(&entry_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn questions_require_classification() {
    let app = TestApp::new().await;
    let entry_id = app.create_entry(None).await;
    app.add_text(&entry_id, None).await;

    let reply = app
        .post_json("/api/ai/questions", None, &json!({"entry_id": entry_id}))
        .await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.code(), "PRECONDITION_FAILED");
    assert_eq!(app.model.calls(), 0);
}

#[tokio::test]
async fn evaluation_requires_questions() {
    let app = TestApp::new().await;
    let entry_id = classified_entry(&app).await;

    let reply = app
        .post_json(
            "/api/ai/evaluate",
            None,
            &json!({"entry_id": entry_id, "answers": answers(4)}),
        )
        .await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.code(), "PRECONDITION_FAILED");
    assert_eq!(app.model.calls(), 1);
}

#[tokio::test]
async fn analyze_without_evidence_is_not_found() {
    let app = TestApp::new().await;
    let entry_id = app.create_entry(None).await;
    let reply = app
        .post_json("/api/ai/analyze", None, &json!({"entry_id": entry_id}))
        .await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.code(), "NOT_FOUND");
    assert_eq!(app.model.calls(), 0);
}

#[tokio::test]
async fn classification_is_recorded_on_the_entry() {
    let app = TestApp::new().await;
    let entry_id = classified_entry(&app).await;
    let entry = app.state.db.get_entry(&entry_id).await.unwrap();
    assert_eq!(entry.domain.as_deref(), Some("Retail operations"));
    assert_eq!(
        entry.eligibility,
        Some(ledger_core::enums::Eligibility::Eligible)
    );
}

#[tokio::test]
async fn unparseable_model_output_is_a_parsing_error() {
    let app = TestApp::new().await;
    let entry_id = app.create_entry(None).await;
    app.add_text(&entry_id, None).await;

    app.model.push("this is not json");
    let reply = app
        .post_json("/api/ai/analyze", None, &json!({"entry_id": entry_id}))
        .await;
    assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply.code(), "AI_PARSING_ERROR");
    assert!(app.state.db.get_entry(&entry_id).await.unwrap().domain.is_none());
}

#[tokio::test]
async fn missing_question_stores_nothing() {
    let app = TestApp::new().await;
    let entry_id = classified_entry(&app).await;

    app.model.push(r#"{"q1":"a","q2":"b","q3":"c"}"#);
    let reply = app
        .post_json("/api/ai/questions", None, &json!({"entry_id": entry_id}))
        .await;
    assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply.code(), "AI_VALIDATION_ERROR");
    assert!(app.state.db.list_questions(&entry_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn provider_failure_is_bad_gateway() {
    let app = TestApp::new().await;
    let entry_id = app.create_entry(None).await;
    app.add_text(&entry_id, None).await;

    // Nothing scripted: the model answers with an API error.
    let reply = app
        .post_json("/api/ai/analyze", None, &json!({"entry_id": entry_id}))
        .await;
    assert_eq!(reply.status, StatusCode::BAD_GATEWAY);
    assert_eq!(reply.code(), "AI_PROVIDER_ERROR");
}

#[tokio::test]
async fn resubmitted_answers_overwrite() {
    let app = TestApp::new().await;
    let entry_id = entry_with_questions(&app).await;

    app.model.push(evaluation("Low"));
    app.post_json(
        "/api/ai/evaluate",
        None,
        &json!({"entry_id": entry_id, "answers": answers(4)}),
    )
    .await;

    let revised: Vec<Value> = (1..=4)
        .map(|n| json!({"questionNumber": n, "answer": format!("Revised answer {n}")}))
        .collect();
    app.model.push(evaluation("Medium"));
    let reply = app
        .post_json(
            "/api/ai/evaluate",
            None,
            &json!({"entry_id": entry_id, "answers": revised}),
        )
        .await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["confidence_band"], "Medium");

    let stored = app.state.db.list_answers(&entry_id).await.unwrap();
    assert_eq!(stored.len(), 4);
    assert!(stored.iter().all(|a| a.answer_text.starts_with("Revised answer")));
}

#[tokio::test]
async fn answers_survive_a_failed_evaluation() {
    let app = TestApp::new().await;
    let entry_id = entry_with_questions(&app).await;

    app.model.push("{}");
    let reply = app
        .post_json(
            "/api/ai/evaluate",
            None,
            &json!({"entry_id": entry_id, "answers": answers(4)}),
        )
        .await;
    assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(app.state.db.list_answers(&entry_id).await.unwrap().len(), 4);
    assert!(app.state.db.get_entry(&entry_id).await.unwrap().confidence_band.is_none());
}

#[tokio::test]
async fn unknown_public_id_is_not_found() {
    let app = TestApp::new().await;
    for id in ["0123456789abcdef", "not-a-public-id"] {
        let reply = app.get(&format!("/api/verify/{id}"), None).await;
        assert_eq!(reply.status, StatusCode::NOT_FOUND);
        assert_eq!(reply.message(), "Verification not found");
    }
}

#[tokio::test]
async fn colliding_public_id_is_a_conflict() {
    let app = TestApp::new().await;
    let entry_id = app.create_entry(None).await;
    let entry = app.state.db.get_entry(&entry_id).await.unwrap();
    let evaluation: Evaluation = serde_json::from_str(&evaluation("High")).unwrap();
    let at = Utc::now();

    let first = publish(&app.state, &entry, None, &evaluation, at).await.unwrap();
    assert_eq!(first.domain, "Unknown");

    let err = publish(&app.state, &entry, None, &evaluation, at)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Database(DatabaseError::Conflict(_))));
    assert_eq!(err.code(), "DATABASE_ERROR");
}
