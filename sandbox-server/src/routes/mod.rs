pub mod transaction;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/transaction").service(transaction::get));
}
