//! Shared fixtures: an app wired to an in-memory database, an in-memory
//! object store, a scripted model and a fake token verifier.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use ledger_ai::{AiError, Assessor, CompletionModel, PromptSet};
use ledger_auth::{AuthError, GuestMode, IdentityResolver, TokenVerifier};
use ledger_config::LimitsConfig;
use ledger_db::LedgerDb;
use ledger_server::{AppState, router};
use ledger_storage::EvidenceStore;
use ledger_transcript::{TranscriptError, TranscriptSource};
use object_store::memory::InMemory;
use object_store::path::Path;
use object_store::signer::Signer;
use object_store::ObjectStore;
use serde_json::Value;
use tower::ServiceExt;
use url::Url;

pub const GUEST: &str = "guest-user";
pub const ALICE_TOKEN: &str = "token-alice";
pub const BOB_TOKEN: &str = "token-bob";

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

/// Accepts `token-{name}` and resolves it to `{name}`.
pub struct FakeVerifier;

#[async_trait]
impl TokenVerifier for FakeVerifier {
    async fn verify(&self, token: &str) -> Result<String, AuthError> {
        token
            .strip_prefix("token-")
            .map(str::to_string)
            .ok_or_else(|| AuthError::InvalidCredential(format!("unknown token {token}")))
    }
}

/// Replies with queued strings in order and counts calls.
#[derive(Default)]
pub struct ScriptedModel {
    replies: Mutex<VecDeque<String>>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    pub fn push(&self, reply: impl Into<String>) {
        self.replies.lock().unwrap().push_back(reply.into());
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionModel for ScriptedModel {
    async fn complete(&self, _instruction: &str, user: &str) -> Result<String, AiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(user.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AiError::Api {
                status: 500,
                message: "no scripted reply".into(),
            })
    }
}

pub struct FakeTranscripts;

#[async_trait]
impl TranscriptSource for FakeTranscripts {
    async fn fetch(&self, video_url: &str) -> Result<String, TranscriptError> {
        if video_url.contains("broken") {
            return Err(TranscriptError::Empty);
        }
        Ok("we walk through the spreadsheet formulas".to_string())
    }
}

#[derive(Debug)]
pub struct FakeSigner;

#[async_trait]
impl Signer for FakeSigner {
    async fn signed_url(
        &self,
        method: http::Method,
        path: &Path,
        expires_in: Duration,
    ) -> object_store::Result<Url> {
        Ok(Url::parse(&format!(
            "https://files.example/{path}?method={method}&expires={}",
            expires_in.as_secs()
        ))
        .unwrap())
    }
}

// ---------------------------------------------------------------------------
// Model replies
// ---------------------------------------------------------------------------

pub const CLASSIFICATION: &str = r#"{"primary_domain":"Retail operations","secondary_domain":null,
"complexity_level":"Beginner","eligible":true,"eligibility_reason":"Built a working tool",
"key_topics":["spreadsheets","inventory"],"evaluator_lens":"practical stock control"}"#;

pub const QUESTIONS: &str = r#"{"q1":"Explain how your tracker flags low stock.",
"q2":"How would you adapt it for a cafe?","q3":"When would a spreadsheet stop being enough?",
"q4":"What would you build next?"}"#;

pub fn evaluation(band: &str) -> String {
    format!(
        r#"{{"capability_summary":"Can build a spreadsheet inventory tracker","confidence_band":"{band}",
"rationale":"Specific and consistent answers.","layer1_descriptor":"Strong",
"layer2_descriptor":"Adequate","layer3_descriptor":"Strong","layer4_descriptor":"Needs work"}}"#
    )
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub model: Arc<ScriptedModel>,
    pub objects: Arc<InMemory>,
}

pub struct Reply {
    pub status: StatusCode,
    pub body: Value,
}

impl Reply {
    pub fn code(&self) -> &str {
        self.body["error"]["code"].as_str().unwrap_or_default()
    }

    pub fn message(&self) -> &str {
        self.body["error"]["message"].as_str().unwrap_or_default()
    }
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with(GuestMode::Enabled(GUEST.to_string()), LimitsConfig::default()).await
    }

    pub async fn with(guest: GuestMode, limits: LimitsConfig) -> Self {
        let db = LedgerDb::open_local(":memory:").await.unwrap();
        let objects = Arc::new(InMemory::new());
        let storage = EvidenceStore::new(objects.clone(), Some(Arc::new(FakeSigner)), Duration::from_secs(60));
        let model = Arc::new(ScriptedModel::default());
        let state = AppState {
            db: Arc::new(db),
            storage,
            identity: Arc::new(IdentityResolver::new(Arc::new(FakeVerifier), guest)),
            assessor: Assessor::new(model.clone(), PromptSet::builtin()),
            transcripts: Arc::new(FakeTranscripts),
            limits,
        };
        Self {
            router: router(state.clone()),
            state,
            model,
            objects,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Reply {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        Reply { status, body }
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> Reply {
        let mut builder = Request::builder().method("GET").uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn post_json(&self, path: &str, token: Option<&str>, body: &Value) -> Reply {
        let mut builder = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    pub async fn post_file(
        &self,
        path: &str,
        token: Option<&str>,
        entry_id: &str,
        filename: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Reply {
        const BOUNDARY: &str = "ledger-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"entry_id\"\r\n\r\n{entry_id}\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        let mut builder = Request::builder().method("POST").uri(path).header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(builder.body(Body::from(body)).unwrap()).await
    }

    /// Create an entry as the guest (or `token`'s user) and return its id.
    pub async fn create_entry(&self, token: Option<&str>) -> String {
        let reply = self
            .post_json(
                "/api/entry/create",
                token,
                &serde_json::json!({"title": "Inventory tracker", "description": "for the shop"}),
            )
            .await;
        assert_eq!(reply.status, StatusCode::OK, "{}", reply.body);
        reply.body["entry_id"].as_str().unwrap().to_string()
    }

    pub async fn add_text(&self, entry_id: &str, token: Option<&str>) -> Reply {
        self.post_json(
            "/api/evidence/add",
            token,
            &serde_json::json!({
                "entry_id": entry_id,
                "evidence_type": "text",
                "content": "I built a small inventory tracker using spreadsheets and basic formulas to manage stock for a shop"
            }),
        )
        .await
    }

    /// Bytes of the stored object at `key`.
    pub async fn object_bytes(&self, key: &str) -> Vec<u8> {
        self.objects
            .get(&Path::from(key))
            .await
            .unwrap()
            .bytes()
            .await
            .unwrap()
            .to_vec()
    }

    /// Number of objects in the store.
    pub async fn object_count(&self) -> usize {
        self.objects
            .list_with_delimiter(None)
            .await
            .map(|listing| listing.objects.len() + listing.common_prefixes.len())
            .unwrap()
    }
}
