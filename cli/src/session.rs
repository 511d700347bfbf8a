//! Client session: HTTP access plus explicit resource caches.
//!
//! The `Session` owns the reqwest client and a `SessionCache` of resources
//! already fetched this run. The server is the single source of truth; the
//! cache is only a cache, and every mutating call invalidates exactly the
//! entries it may have stale-ified. Commands receive the session as an
//! argument instead of reaching for shared global state.

use std::collections::HashMap;

use anyhow::{Context, Result, bail};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::json;
use uuid::Uuid;

use crate::api::*;

// ============================================================================
// Cache
// ============================================================================

/// Explicit per-resource caches with explicit invalidation.
#[derive(Debug, Default)]
pub struct SessionCache {
    question_list: Option<Vec<Question>>,
    question_details: HashMap<Uuid, QuestionDetail>,
    notifications: Option<NotificationFeed>,
    profile: Option<Profile>,
}

impl SessionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything (identity changed).
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Drop the cached question list.
    pub fn invalidate_question_list(&mut self) {
        self.question_list = None;
    }

    /// Drop one cached question detail.
    pub fn invalidate_question(&mut self, id: Uuid) {
        self.question_details.remove(&id);
    }

    /// Drop every cached question detail.
    pub fn invalidate_all_questions(&mut self) {
        self.question_details.clear();
    }

    /// Drop the cached notification feed.
    pub fn invalidate_notifications(&mut self) {
        self.notifications = None;
    }

    pub fn cached_question_list(&self) -> Option<&Vec<Question>> {
        self.question_list.as_ref()
    }

    pub fn cached_question(&self, id: Uuid) -> Option<&QuestionDetail> {
        self.question_details.get(&id)
    }

    pub fn cached_notifications(&self) -> Option<&NotificationFeed> {
        self.notifications.as_ref()
    }

    pub fn cached_profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn store_question_list(&mut self, questions: Vec<Question>) {
        self.question_list = Some(questions);
    }

    pub fn store_question(&mut self, detail: QuestionDetail) {
        self.question_details.insert(detail.question.id, detail);
    }

    pub fn store_notifications(&mut self, feed: NotificationFeed) {
        self.notifications = Some(feed);
    }

    pub fn store_profile(&mut self, profile: Profile) {
        self.profile = Some(profile);
    }
}

// ============================================================================
// Session
// ============================================================================

/// A CLI session against one server, carrying the bearer token and caches.
pub struct Session {
    client: reqwest::Client,
    base_url: String,
    cache: SessionCache,
}

impl Session {
    /// Build a session; the token (if any) is attached to every request.
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .context("token contains invalid header characters")?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            cache: SessionCache::new(),
        })
    }

    /// Access the cache (used by tests).
    pub fn cache(&self) -> &SessionCache {
        &self.cache
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request, decoding either the payload or the error envelope.
    async fn request<T: DeserializeOwned>(&self, builder: reqwest::RequestBuilder) -> Result<T> {
        let response = builder.send().await.context("request failed")?;
        let status = response.status();
        let body = response.text().await.context("failed to read response")?;

        if status.is_success() {
            serde_json::from_str(&body).context("failed to decode response")
        } else {
            match serde_json::from_str::<ErrorEnvelope>(&body) {
                Ok(envelope) => bail!("{} ({})", envelope.error.message, status),
                Err(_) => bail!("request failed with {}: {}", status, body),
            }
        }
    }

    // ==================== Reads (cached) ====================

    /// All questions, newest first. Cached until a mutation invalidates.
    pub async fn question_list(&mut self) -> Result<Vec<Question>> {
        if let Some(cached) = self.cache.cached_question_list() {
            return Ok(cached.clone());
        }

        let list: QuestionList = self
            .request(self.client.get(self.url("/api/questions")))
            .await?;
        self.cache.store_question_list(list.questions.clone());
        Ok(list.questions)
    }

    /// Questions carrying a tag. Not cached (keyed reads stay simple).
    pub async fn questions_tagged(&self, tag: &str) -> Result<Vec<Question>> {
        let list: QuestionList = self
            .request(
                self.client
                    .get(self.url("/api/questions"))
                    .query(&[("tag", tag)]),
            )
            .await?;
        Ok(list.questions)
    }

    /// One question with its answers. Cached per id.
    pub async fn question(&mut self, id: Uuid) -> Result<QuestionDetail> {
        if let Some(cached) = self.cache.cached_question(id) {
            return Ok(cached.clone());
        }

        let detail: QuestionDetail = self
            .request(self.client.get(self.url(&format!("/api/questions/{}", id))))
            .await?;
        self.cache.store_question(detail.clone());
        Ok(detail)
    }

    /// The requester's profile. Cached.
    pub async fn profile(&mut self) -> Result<Profile> {
        if let Some(cached) = self.cache.cached_profile() {
            return Ok(cached.clone());
        }

        let profile: Profile = self
            .request(self.client.get(self.url("/api/auth/me")))
            .await?;
        self.cache.store_profile(profile.clone());
        Ok(profile)
    }

    /// The requester's notification feed. Cached.
    pub async fn notifications(&mut self) -> Result<NotificationFeed> {
        if let Some(cached) = self.cache.cached_notifications() {
            return Ok(cached.clone());
        }

        let feed: NotificationFeed = self
            .request(self.client.get(self.url("/api/notifications")))
            .await?;
        self.cache.store_notifications(feed.clone());
        Ok(feed)
    }

    /// All tags in use.
    pub async fn tags(&self) -> Result<TagList> {
        self.request(self.client.get(self.url("/api/tags"))).await
    }

    // ==================== Mutations (invalidating) ====================

    /// Register a new account. The caller should rebuild the session with
    /// the returned token.
    pub async fn register(&mut self, name: &str, email: &str, password: &str) -> Result<AuthResponse> {
        let response: AuthResponse = self
            .request(
                self.client
                    .post(self.url("/api/auth/register"))
                    .json(&json!({ "name": name, "email": email, "password": password })),
            )
            .await?;
        self.cache.clear();
        Ok(response)
    }

    /// Log in. The caller should rebuild the session with the returned token.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<AuthResponse> {
        let response: AuthResponse = self
            .request(
                self.client
                    .post(self.url("/api/auth/login"))
                    .json(&json!({ "email": email, "password": password })),
            )
            .await?;
        self.cache.clear();
        Ok(response)
    }

    /// Ask a question.
    pub async fn ask(&mut self, title: &str, content: &str, tags: &[String]) -> Result<Question> {
        let question: Question = self
            .request(
                self.client
                    .post(self.url("/api/questions"))
                    .json(&json!({ "title": title, "content": content, "tags": tags })),
            )
            .await?;
        self.cache.invalidate_question_list();
        Ok(question)
    }

    /// Post an answer to a question.
    pub async fn post_answer(&mut self, question_id: Uuid, content: &str) -> Result<AnswerRecord> {
        let answer: AnswerRecord = self
            .request(
                self.client
                    .post(self.url(&format!("/api/answers/{}", question_id)))
                    .json(&json!({ "content": content })),
            )
            .await?;
        // The detail view and the list's answer counts are both stale now.
        self.cache.invalidate_question(question_id);
        self.cache.invalidate_question_list();
        Ok(answer)
    }

    /// Accept an answer (question owner only).
    pub async fn accept(&mut self, answer_id: Uuid) -> Result<AcceptResult> {
        let result: AcceptResult = self
            .request(
                self.client
                    .patch(self.url(&format!("/api/answers/accept/{}", answer_id))),
            )
            .await?;
        self.cache.invalidate_question(result.answer.question_id);
        Ok(result)
    }

    /// Toggle a vote on an answer.
    pub async fn vote(&mut self, answer_id: Uuid, direction: &str) -> Result<VoteResult> {
        let result: VoteResult = self
            .request(
                self.client
                    .post(self.url(&format!("/api/votes/{}", answer_id)))
                    .json(&json!({ "direction": direction })),
            )
            .await?;
        // The answer's parent question is unknown here; drop every cached
        // detail rather than guess.
        self.cache.invalidate_all_questions();
        Ok(result)
    }

    /// Mark every notification read.
    pub async fn mark_notifications_read(&mut self) -> Result<MarkReadResult> {
        let result: MarkReadResult = self
            .request(self.client.patch(self.url("/api/notifications/read")))
            .await?;
        self.cache.invalidate_notifications();
        Ok(result)
    }
}

// ============================================================================
// Tests
// ============================================================================
