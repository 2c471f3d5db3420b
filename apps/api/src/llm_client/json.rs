//! Pulls a JSON object out of model output.
//!
//! Models asked for "JSON only" still wrap it in code fences or a sentence of prose now
//! and then. Candidates are tried in order and the first one that deserializes wins:
//!
//! 1. the whole reply, trimmed
//! 2. the first ```` ```json ```` / ```` ``` ```` fenced object
//! 3. the widest `{ ... }` span in the reply

use std::sync::OnceLock;

use regex::Regex;
use serde::de::DeserializeOwned;

use crate::llm_client::LlmError;

const SNIPPET_CHARS: usize = 200;

static FENCED_OBJECT: OnceLock<Regex> = OnceLock::new();
static EMBEDDED_OBJECT: OnceLock<Regex> = OnceLock::new();

fn fenced_object() -> &'static Regex {
    FENCED_OBJECT.get_or_init(|| {
        Regex::new(r"(?s)```(?:json)?\s*(\{.*?\})\s*```").expect("fenced object pattern is valid")
    })
}

fn embedded_object() -> &'static Regex {
    EMBEDDED_OBJECT.get_or_init(|| {
        Regex::new(r"(?s)\{.*\}").expect("embedded object pattern is valid")
    })
}

/// Deserializes `T` from a model reply, recovering the object from fences or prose.
pub fn parse_reply<T: DeserializeOwned>(reply: &str) -> Result<T, LlmError> {
    let trimmed = reply.trim();
    let fenced = fenced_object()
        .captures(trimmed)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str());
    let embedded = embedded_object().find(trimmed).map(|m| m.as_str());

    [Some(trimmed), fenced, embedded]
        .into_iter()
        .flatten()
        .find_map(|candidate| serde_json::from_str(candidate).ok())
        .ok_or_else(|| LlmError::UnparseableReply {
            snippet: snippet(trimmed),
        })
}

fn snippet(reply: &str) -> String {
    if reply.chars().count() <= SNIPPET_CHARS {
        return reply.to_string();
    }
    let head: String = reply.chars().take(SNIPPET_CHARS).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Review {
        score: u32,
    }

    #[test]
    fn test_plain_object() {
        assert_eq!(parse_reply::<Review>(" {\"score\": 7}\n").unwrap(), Review { score: 7 });
    }

    #[test]
    fn test_fenced_object_with_tag() {
        let reply = "```json\n{\"score\": 8}\n```";
        assert_eq!(parse_reply::<Review>(reply).unwrap(), Review { score: 8 });
    }

    #[test]
    fn test_fenced_object_without_tag_after_prose() {
        let reply = "Here you go:\n```\n{\"score\": 9}\n```\nLet me know if you need more.";
        assert_eq!(parse_reply::<Review>(reply).unwrap(), Review { score: 9 });
    }

    #[test]
    fn test_object_embedded_in_prose() {
        let reply = "Sure! The review is {\"score\": 4} based on the resume.";
        assert_eq!(parse_reply::<Review>(reply).unwrap(), Review { score: 4 });
    }

    #[test]
    fn test_nested_object_uses_widest_span() {
        #[derive(Debug, Deserialize)]
        struct Outer {
            inner: Review,
        }
        let reply = "Result: {\"inner\": {\"score\": 3}} done";
        assert_eq!(parse_reply::<Outer>(reply).unwrap().inner, Review { score: 3 });
    }

    #[test]
    fn test_wrong_shape_is_unparseable() {
        let err = parse_reply::<Review>("{\"grade\": \"A\"}").unwrap_err();
        assert!(matches!(err, LlmError::UnparseableReply { .. }));
    }

    #[test]
    fn test_unparseable_snippet_is_truncated() {
        let reply = "no json here ".repeat(40);
        match parse_reply::<Review>(&reply).unwrap_err() {
            LlmError::UnparseableReply { snippet } => {
                assert!(snippet.ends_with("..."));
                assert_eq!(snippet.chars().count(), SNIPPET_CHARS + 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
