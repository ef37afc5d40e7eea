use actix_web::{HttpResponse, Responder, get, web};

use crate::repository::DieselRepository;
use crate::routes::VisibilityParams;
use crate::services::clients as clients_service;

/// JSON form of the client modal; `null` for an unknown client.
#[get("/v1/clients/{client_id}/view")]
pub async fn api_v1_client_view(
    client_id: web::Path<i32>,
    params: web::Query<VisibilityParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let client_id = client_id.into_inner();

    match clients_service::load_client_view(repo.get_ref(), client_id, params.visible) {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(err) => {
            log::error!("Failed to load client {client_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
