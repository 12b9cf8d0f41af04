pub mod forms;
pub mod handlers;
pub mod routes;

use actix_web::middleware::Logger;

/// Access log line per request: peer, request line, status, body size and
/// latency. Emitted through `log`, which the fmt subscriber picks up.
pub fn request_logger() -> Logger {
    Logger::new(r#"%a "%r" %s %b "%{User-Agent}i" %T"#)
}
