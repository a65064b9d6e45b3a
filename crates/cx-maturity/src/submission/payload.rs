use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::quiz::{AnswerSet, ContactInfo, MaturityLevel};

/// JSON body posted to the webhook once a quiz completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub date: DateTime<Utc>,
    #[serde(flatten)]
    pub contact: ContactInfo,
    pub answers: AnswerSet,
    pub score: u8,
    pub maturity_level: String,
}

impl SubmissionPayload {
    pub fn build(contact: &ContactInfo, answers: &AnswerSet, date: DateTime<Utc>) -> Self {
        let score = answers.score();
        Self {
            date,
            contact: contact.clone(),
            answers: answers.clone(),
            score,
            maturity_level: MaturityLevel::for_score(score).level.to_string(),
        }
    }
}
