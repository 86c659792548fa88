use crate::data::ReferenceData;
use crate::resolver::BotConfig;
use crate::server::webhook;

pub struct HttpResponse {
    pub status_code: u16,
    pub status_text: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpResponse {
    pub fn to_http_string(&self) -> String {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.status_code,
            self.status_text,
            self.content_type,
            self.body.len(),
            self.body
        )
    }
}

pub fn route_request(
    method: &str,
    path: &str,
    body: &str,
    data: &ReferenceData,
    config: &BotConfig,
) -> HttpResponse {
    match (method, path) {
        ("GET", "/api/health") => match health_payload() {
            Ok(payload) => json_ok(payload),
            Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
        },
        ("POST", "/callback") => match webhook::callback_payload(body, data, config) {
            Ok(payload) => json_ok(payload),
            Err(err) => {
                error_response(400, "Bad Request", &format!("Invalid callback body: {err}"))
            }
        },
        _ => error_response(404, "Not Found", "Route not found"),
    }
}

fn health_payload() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "status": "ok",
        "service": "nekobot",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

fn json_ok(body: String) -> HttpResponse {
    HttpResponse {
        status_code: 200,
        status_text: "OK",
        content_type: "application/json",
        body,
    }
}

fn error_response(status_code: u16, status_text: &'static str, message: &str) -> HttpResponse {
    HttpResponse {
        status_code,
        status_text,
        content_type: "application/json",
        body: format!(
            "{{\n  \"status\": \"error\",\n  \"message\": {}\n}}",
            serde_json::to_string(message).unwrap_or_else(|_| "\"Unknown error\"".to_string())
        ),
    }
}
