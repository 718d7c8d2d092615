/// Vaccination Routes
///
/// Same guarded CRUD shape as the drug routes.

use actix_web::{web, HttpResponse};
use serde_json::Value;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{CreateVaccinationCommand, UpdateVaccinationCommand};
use crate::routes::parse_delete_id;
use crate::services::VaccinationService;

pub async fn create_vaccination(
    body: web::Json<Value>,
    vaccinations: web::Data<VaccinationService>,
) -> Result<HttpResponse, AppError> {
    let cmd = CreateVaccinationCommand::parse(&body)?;
    let vaccination = vaccinations.create(cmd).await?;
    Ok(HttpResponse::Created().json(vaccination))
}

pub async fn list_vaccinations(
    vaccinations: web::Data<VaccinationService>,
) -> Result<HttpResponse, AppError> {
    let vaccinations = vaccinations.find_all().await?;
    Ok(HttpResponse::Ok().json(vaccinations))
}

pub async fn get_vaccination(
    id: web::Path<Uuid>,
    vaccinations: web::Data<VaccinationService>,
) -> Result<HttpResponse, AppError> {
    let vaccination = vaccinations.find_one(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(vaccination))
}

pub async fn update_vaccination(
    id: web::Path<Uuid>,
    body: web::Json<Value>,
    vaccinations: web::Data<VaccinationService>,
) -> Result<HttpResponse, AppError> {
    let cmd = UpdateVaccinationCommand::parse(&body)?;
    let vaccination = vaccinations.update(id.into_inner(), cmd).await?;
    Ok(HttpResponse::Ok().json(vaccination))
}

pub async fn delete_vaccination(
    id: web::Path<String>,
    vaccinations: web::Data<VaccinationService>,
) -> Result<HttpResponse, AppError> {
    let id = parse_delete_id(&id)?;
    let confirmation = vaccinations.remove(id).await?;
    Ok(HttpResponse::Ok().json(confirmation))
}
