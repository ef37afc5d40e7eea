use actix_web::{HttpResponse, Responder, get, web};
use tera::{Context, Tera};

use crate::repository::DieselRepository;
use crate::routes::{VisibilityParams, render_template};
use crate::services::clients as clients_service;

/// Modal fragment for a single client; an empty body when there is none.
#[get("/clients/{client_id}/modal")]
pub async fn client_modal(
    client_id: web::Path<i32>,
    params: web::Query<VisibilityParams>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let client_id = client_id.into_inner();

    match clients_service::load_client_view(repo.get_ref(), client_id, params.visible) {
        Ok(Some(view)) => {
            let mut context = Context::new();
            context.insert("view", &view);

            render_template(&tera, "clients/modal.html", &context)
        }
        Ok(None) => HttpResponse::Ok().finish(),
        Err(err) => {
            log::error!("Failed to load client {client_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
