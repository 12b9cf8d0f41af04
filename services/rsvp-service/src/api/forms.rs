//! Binding of url-encoded request bodies. List fields arrive as repeated
//! keys (`guestIds=a&guestIds=b`), which is why the bodies are decoded here
//! rather than through a serde form extractor.

use crate::domain::Submission;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct LookupForm {
    pub guest_id: String,
    pub last_name: String,
}

impl LookupForm {
    pub fn parse(body: &[u8]) -> Self {
        let mut form = Self::default();
        for (key, value) in form_urlencoded::parse(body) {
            match key.as_ref() {
                "guestId" => form.guest_id = value.into_owned(),
                "lastName" => form.last_name = value.into_owned(),
                _ => {}
            }
        }
        form
    }
}

pub fn parse_submission(body: &[u8]) -> Submission {
    let mut submission = Submission::default();
    for (key, value) in form_urlencoded::parse(body) {
        match key.as_ref() {
            "guestIds" => push_id(&mut submission.guest_ids, &value),
            "guestsAttending" => push_id(&mut submission.attending_ids, &value),
            "plusOnesAttending" => push_id(&mut submission.plus_one_attending_ids, &value),
            "plusOneName" => submission.plus_one_name = free_text(&value),
            "songRequests" => submission.song_requests = free_text(&value),
            "notes" => submission.notes = free_text(&value),
            _ => {}
        }
    }
    submission
}

fn push_id(ids: &mut Vec<String>, value: &str) {
    let id = value.trim();
    if !id.is_empty() && !ids.iter().any(|existing| existing == id) {
        ids.push(id.to_string());
    }
}

fn free_text(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
