use actix_web::{HttpResponse, Responder, get};

#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("ok")
}
