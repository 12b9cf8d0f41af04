pub mod committer;
pub mod error;
pub mod resolver;
pub mod rsvp_service;
pub mod validator;

pub use error::RsvpError;
pub use rsvp_service::RsvpService;
