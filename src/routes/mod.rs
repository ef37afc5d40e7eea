//! HTTP handlers rendering the client list and the client detail modal.

use actix_web::HttpResponse;
use serde::Deserialize;
use tera::{Context, Tera};

pub mod api;
pub mod client;
pub mod main;

/// Renders a Tera template into an HTML response, logging render failures.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template `{template}`: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

fn default_visible() -> bool {
    true
}

/// `?visible=` flag shared by the modal and its JSON twin.
#[derive(Debug, Deserialize)]
pub struct VisibilityParams {
    #[serde(default = "default_visible")]
    pub visible: bool,
}
