use crate::api::{employee, health};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Probes
    cfg.route("/health", web::get().to(health::health))
        .route("/ready", web::get().to(health::ready));

    cfg.service(
        web::scope("/employees")
            // /employees
            .service(
                web::resource("")
                    .route(web::get().to(employee::list_employees))
                    .route(web::post().to(employee::create_employee)),
            )
            // /employees/{id}
            .service(
                web::resource("/{id}")
                    .route(web::get().to(employee::get_employee))
                    .route(web::put().to(employee::update_employee))
                    .route(web::delete().to(employee::delete_employee)),
            ),
    );
}
