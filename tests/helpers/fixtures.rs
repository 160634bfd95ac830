// tests/helpers/fixtures.rs
// ============================================================================
// Module: Study Set Fixtures
// Description: REST-provisioned fixtures for conformance scenarios.
// Purpose: Replace hand-seeded database records with per-test setup/teardown.
// Dependencies: rest_client, serde_json
// ============================================================================

//! ## Overview
//! Every scenario provisions the resources it needs through the public REST
//! interface and deletes them afterwards. Deleting the set cascades to its
//! cards, so one teardown call covers the whole fixture.

use serde_json::Value;
use serde_json::json;

use super::rest_client::RestClient;

/// A study set created for one scenario.
#[derive(Debug, Clone)]
pub struct StudySetFixture {
    /// Object id assigned by the API.
    pub id: String,
    /// Title the set was created with.
    pub title: String,
}

// Intentionally no Drop impl: teardown is async and must surface failures.

impl StudySetFixture {
    /// Creates a study set via `POST /sets`.
    pub async fn create(client: &RestClient, title: &str) -> Result<Self, String> {
        let body = json!({ "title": title });
        let created = client.post_json("/sets", &body, 200).await?;
        let id = created
            .get("_id")
            .and_then(Value::as_str)
            .ok_or_else(|| format!("created set carries no _id: {created}"))?
            .to_string();
        Ok(Self {
            id,
            title: title.to_string(),
        })
    }

    /// Appends a new flashcard to the set via `POST /sets/:id`.
    ///
    /// Returns the id of the appended card, read from the tail of the
    /// returned `cards` sequence.
    pub async fn add_card(
        &self,
        client: &RestClient,
        prompt: &str,
        response: &str,
        user_response_type: &str,
    ) -> Result<String, String> {
        let body = json!({
            "prompt": prompt,
            "response": response,
            "userResponseType": user_response_type,
        });
        let updated = client.post_json(&format!("/sets/{}", self.id), &body, 200).await?;
        let cards = updated
            .get("cards")
            .and_then(Value::as_array)
            .ok_or_else(|| format!("set update response carries no cards array: {updated}"))?;
        cards
            .last()
            .and_then(Value::as_str)
            .map(ToString::to_string)
            .ok_or_else(|| format!("cards array has no trailing card id: {updated}"))
    }

    /// Appends a quiz score via `POST /sets/:id/quiz` and returns the set body.
    pub async fn add_quiz_score(
        &self,
        client: &RestClient,
        score: f64,
    ) -> Result<Value, String> {
        let body = json!({ "addedQuizScore": score });
        client.post_json(&format!("/sets/{}/quiz", self.id), &body, 200).await
    }

    /// Fetches the current set body via `GET /sets/:id`.
    pub async fn fetch(&self, client: &RestClient) -> Result<Value, String> {
        client.get(&format!("/sets/{}", self.id), 200).await
    }

    /// Deletes the set via `DELETE /sets/:id`, cascading to its cards.
    pub async fn teardown(self, client: &RestClient) -> Result<(), String> {
        client.delete(&format!("/sets/{}", self.id), 200).await?;
        Ok(())
    }
}

/// Reads the `quizScores` sequence from a set body.
pub fn quiz_scores(set: &Value) -> Result<Vec<f64>, String> {
    let Some(scores) = set.get("quizScores") else {
        // A set that never recorded a score may omit the field entirely.
        return Ok(Vec::new());
    };
    scores
        .as_array()
        .ok_or_else(|| format!("quizScores is not an array: {scores}"))?
        .iter()
        .map(|value| value.as_f64().ok_or_else(|| format!("quiz score is not numeric: {value}")))
        .collect()
}

/// Reads the ordered `cards` id sequence from a set body.
pub fn card_ids(set: &Value) -> Result<Vec<String>, String> {
    set.get("cards")
        .and_then(Value::as_array)
        .ok_or_else(|| format!("set body carries no cards array: {set}"))?
        .iter()
        .map(|value| {
            value
                .as_str()
                .map(ToString::to_string)
                .ok_or_else(|| format!("card id is not a string: {value}"))
        })
        .collect()
}
