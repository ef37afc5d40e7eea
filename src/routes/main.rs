use actix_web::{HttpResponse, Responder, get, web};
use tera::{Context, Tera};

use crate::repository::DieselRepository;
use crate::routes::render_template;
use crate::services::clients as clients_service;

#[get("/")]
pub async fn show_index(repo: web::Data<DieselRepository>, tera: web::Data<Tera>) -> impl Responder {
    match clients_service::list_clients(repo.get_ref()) {
        Ok(data) => {
            let mut context = Context::new();
            context.insert("clients", &data.clients);

            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to list clients: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
