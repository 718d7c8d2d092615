use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use sqlx::PgPool;
use std::net::TcpListener;

use crate::configuration::JwtSettings;
use crate::middleware::{JwtMiddleware, RequestLogger};
use crate::repository::{DrugRepository, UserRepository, VaccinationRepository};
use crate::routes::{
    create_drug, create_vaccination, delete_drug, delete_vaccination, get_drug, get_vaccination,
    health_check, list_drugs, list_vaccinations, login, signup, update_drug, update_vaccination,
};
use crate::services::{AuthService, DrugsService, VaccinationService};

/// Composition root: builds repositories and services explicitly and wires
/// the public and token-guarded route trees.
pub fn run(
    listener: TcpListener,
    connection: PgPool,
    jwt_config: JwtSettings,
) -> Result<Server, std::io::Error> {
    let auth_service = web::Data::new(AuthService::new(
        UserRepository::new(connection.clone()),
        jwt_config.clone(),
    ));
    let drugs_service = web::Data::new(DrugsService::new(DrugRepository::new(connection.clone())));
    let vaccination_service = web::Data::new(VaccinationService::new(VaccinationRepository::new(
        connection,
    )));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestLogger)

            // Shared state
            .app_data(auth_service.clone())
            .app_data(drugs_service.clone())
            .app_data(vaccination_service.clone())

            // Public routes (no authentication required)
            .route("/health_check", web::get().to(health_check))
            .route("/auth/signup", web::post().to(signup))
            .route("/auth/login", web::post().to(login))

            // Protected routes (require a valid bearer token)
            .service(
                web::scope("/drugs")
                    .wrap(JwtMiddleware::new(jwt_config.clone()))
                    .route("", web::post().to(create_drug))
                    .route("", web::get().to(list_drugs))
                    .route("/{id}", web::get().to(get_drug))
                    .route("/{id}", web::patch().to(update_drug))
                    .route("/{id}", web::delete().to(delete_drug)),
            )
            .service(
                web::scope("/vaccination")
                    .wrap(JwtMiddleware::new(jwt_config.clone()))
                    .route("", web::post().to(create_vaccination))
                    .route("", web::get().to(list_vaccinations))
                    .route("/{id}", web::get().to(get_vaccination))
                    .route("/{id}", web::patch().to(update_vaccination))
                    .route("/{id}", web::delete().to(delete_vaccination)),
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}
