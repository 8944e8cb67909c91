use super::aggregate::ResponseSet;
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Body returned by the question endpoint of the document Q&A backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskQuestionResponse {
    pub responses: ResponseSet,
}

impl AskQuestionResponse {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse question response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_question_response() {
        let parsed = AskQuestionResponse::from_json(
            r#"{"responses": {"gpt-4o": "Paris", "meta-llama-3": "Paris, France"}}"#,
        )
        .unwrap();
        let entries = parsed.responses.entries();
        assert_eq!(entries[0].label, "gpt-4o");
        assert_eq!(entries[1].label, "meta-llama-3");
    }

    #[test]
    fn test_missing_responses_field() {
        let err = AskQuestionResponse::from_json(r#"{"message": "ok"}"#).unwrap_err();
        assert!(err.to_string().contains("question response"));
    }
}
