use crate::data::read_course_embedded;
use crate::model::CourseData;
use serde::{Deserialize, Serialize};

const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

pub const KEY_MISSING_MESSAGE: &str =
    "API key is missing. Set GEMINI_API_KEY and restart to enable the tutor.";
pub const GENERIC_FALLBACK: &str =
    "Sorry, I encountered an error while contacting the AI tutor.";
pub const EMPTY_REPLY_FALLBACK: &str = "I couldn't generate a response. Please try again.";

#[derive(Debug, Serialize)]
struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Debug, Deserialize)]
struct ReplyPart {
    #[serde(default)]
    text: String,
}

/// Maps a free-text question to tutoring markdown. Never fails past this
/// boundary: a missing credential and a transport problem each degrade to
/// their own fallback string.
pub fn generate_study_help(query: &str) -> String {
    generate_with(&endpoint(), api_key().as_deref(), query)
}

fn generate_with(endpoint: &str, key: Option<&str>, query: &str) -> String {
    let Some(key) = key else {
        return KEY_MISSING_MESSAGE.to_string();
    };
    match request_completion(endpoint, key, query) {
        Ok(text) => text,
        Err(err) => {
            log::error!("[tutor] {err}");
            GENERIC_FALLBACK.to_string()
        }
    }
}

fn request_completion(endpoint: &str, key: &str, query: &str) -> Result<String, String> {
    let course = read_course_embedded();
    let payload = GenerateRequest {
        system_instruction: Content {
            role: None,
            parts: vec![Part {
                text: system_instruction(&course),
            }],
        },
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: query.to_string(),
            }],
        }],
    };

    let client = reqwest::blocking::Client::new();
    let response = client
        .post(endpoint)
        .header("x-goog-api-key", key)
        .json(&payload)
        .send()
        .map_err(|err| format!("request failed: {err}"))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().unwrap_or_default();
        return Err(format!(
            "endpoint returned HTTP {status}{}",
            if body.trim().is_empty() {
                String::new()
            } else {
                format!(". Body: {}", body.trim())
            }
        ));
    }

    let body: GenerateResponse = response
        .json()
        .map_err(|err| format!("invalid response JSON: {err}"))?;

    let text = body
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| {
            c.parts
                .into_iter()
                .map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        Ok(EMPTY_REPLY_FALLBACK.to_string())
    } else {
        Ok(text)
    }
}

/// Tutor persona plus the whole catalog, so answers stay on-syllabus.
fn system_instruction(course: &CourseData) -> String {
    let course_context =
        serde_json::to_string(course).unwrap_or_else(|_| course.course_name.clone());
    format!(
        "You are a helpful and encouraging tutor for the course {} ({}).\n\
         You have the following syllabus context: {course_context}.\n\n\
         Answer the student's question concisely and accurately.\n\
         If they ask about a specific topic from the syllabus, explain it simply with an example.\n\
         If they ask about a PYQ (Previous Year Question), guide them on how to structure their answer.\n\
         Keep answers formatted with Markdown for readability.",
        course.course_name, course.course_code
    )
}

fn endpoint() -> String {
    std::env::var("EXAM_HELPER_TUTOR_ENDPOINT")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}

fn api_key() -> Option<String> {
    std::env::var("GEMINI_API_KEY")
        .ok()
        .filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_has_its_own_message() {
        let reply = generate_with(DEFAULT_ENDPOINT, None, "Explain NAT");
        assert_eq!(reply, KEY_MISSING_MESSAGE);
    }

    #[test]
    fn unreachable_endpoint_degrades_to_generic_fallback() {
        // port 9 (discard) is not listening locally; the connect fails fast
        let reply = generate_with("http://127.0.0.1:9/generate", Some("test-key"), "Explain NAT");
        assert_eq!(reply, GENERIC_FALLBACK);
    }

    #[test]
    fn system_instruction_carries_the_catalog() {
        let course = read_course_embedded();
        let instruction = system_instruction(&course);
        assert!(instruction.contains("Computer Networks"));
        assert!(instruction.contains("21CSC302J"));
        assert!(instruction.contains("u5-t8"));
    }

    #[test]
    fn empty_candidates_map_to_empty_reply_fallback() {
        let body: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(body.candidates.is_empty());

        let body: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"**NAT** rewrites addresses."}]}}]}"#,
        )
        .unwrap();
        let text: String = body.candidates[0]
            .content
            .as_ref()
            .unwrap()
            .parts
            .iter()
            .map(|p| p.text.clone())
            .collect();
        assert_eq!(text, "**NAT** rewrites addresses.");
    }
}
