use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use serde_json::json;

use super::forms::{parse_submission, LookupForm};
use crate::domain::{LastNameLookup, Party};
use crate::service::{RsvpError, RsvpService};
use crate::views::{self, ViewRenderer};

pub const GENERIC_ERROR_MESSAGE: &str =
    "Something went wrong, try again later or get in touch with us directly.";
pub const NOT_FOUND_MESSAGE: &str = "Sorry, we didn't send an invitation to anyone by that name.";

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
}

#[derive(Serialize)]
struct PartyView<'a> {
    party: &'a Party,
    plus_one_allowed: bool,
    plus_one_name: &'a str,
    song_requests: &'a str,
    notes: &'a str,
}

impl<'a> PartyView<'a> {
    fn new(party: &'a Party) -> Self {
        Self {
            party,
            plus_one_allowed: party.any_plus_one_allowed(),
            plus_one_name: party.saved_plus_one_name().unwrap_or_default(),
            song_requests: party.saved_song_requests().unwrap_or_default(),
            notes: party.saved_notes().unwrap_or_default(),
        }
    }
}

fn page<T: Serialize>(renderer: &ViewRenderer, status: StatusCode, view: &str, data: &T) -> HttpResponse {
    match renderer.render(view, data) {
        Ok(html) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => {
            tracing::error!("Failed to render {}: {}", view, e);
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(GENERIC_ERROR_MESSAGE)
        }
    }
}

fn message_page(renderer: &ViewRenderer, status: StatusCode, message: &str) -> HttpResponse {
    page(renderer, status, views::ERROR, &json!({ "message": message }))
}

fn party_page(renderer: &ViewRenderer, party: &Party) -> HttpResponse {
    page(renderer, StatusCode::OK, views::SUBMIT, &PartyView::new(party))
}

/// Maps a failed operation onto the page the guest sees. Only the rule
/// violations get a specific message.
fn error_page(renderer: &ViewRenderer, context: &str, err: &RsvpError) -> HttpResponse {
    if err.is_failure() {
        tracing::error!("{}: {}", context, err);
    }

    match err {
        RsvpError::NotFound => {
            tracing::info!("{}: no matching guest", context);
            message_page(renderer, StatusCode::NOT_FOUND, GENERIC_ERROR_MESSAGE)
        }
        RsvpError::Rejected(rejection) => message_page(renderer, StatusCode::BAD_REQUEST, rejection.user_message()),
        RsvpError::Integrity(_) | RsvpError::Store(_) => {
            message_page(renderer, StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR_MESSAGE)
        }
    }
}

pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        service: "rsvp-service".to_string(),
    })
}

pub async fn index(renderer: web::Data<ViewRenderer>) -> impl Responder {
    page(&renderer, StatusCode::OK, views::INDEX, &json!({}))
}

pub async fn rsvp(renderer: web::Data<ViewRenderer>) -> impl Responder {
    page(&renderer, StatusCode::OK, views::RSVP, &json!({}))
}

/// Picks a guest out of the disambiguation list.
pub async fn find_by_id(
    service: web::Data<RsvpService>,
    renderer: web::Data<ViewRenderer>,
    body: web::Bytes,
) -> impl Responder {
    let form = LookupForm::parse(&body);

    match service.find_by_id(&form.guest_id).await {
        Ok(party) => party_page(&renderer, &party),
        Err(e) => error_page(&renderer, "Find by id", &e),
    }
}

pub async fn find_by_last_name(
    service: web::Data<RsvpService>,
    renderer: web::Data<ViewRenderer>,
    body: web::Bytes,
) -> impl Responder {
    let form = LookupForm::parse(&body);

    match service.find_by_last_name(&form.last_name).await {
        Ok(LastNameLookup::Empty) => HttpResponse::NoContent()
            .insert_header(("HX-Reswap", "none"))
            .finish(),
        Ok(LastNameLookup::Unique(party)) => party_page(&renderer, &party),
        Ok(LastNameLookup::Ambiguous(guests)) => page(
            &renderer,
            StatusCode::MULTIPLE_CHOICES,
            views::MULTIPLE_INVITATIONS,
            &json!({ "guests": guests }),
        ),
        Ok(LastNameLookup::NotFound) => message_page(&renderer, StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
        Err(e) => error_page(&renderer, "Find by last name", &e),
    }
}

pub async fn submit(
    service: web::Data<RsvpService>,
    renderer: web::Data<ViewRenderer>,
    body: web::Bytes,
) -> impl Responder {
    let submission = parse_submission(&body);

    match service.submit(&submission).await {
        Ok(confirmation) => page(&renderer, StatusCode::OK, views::THANK_YOU, &confirmation),
        Err(e) => error_page(&renderer, "Submit RSVP", &e),
    }
}
