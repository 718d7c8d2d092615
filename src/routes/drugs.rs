/// Drug Routes
///
/// Token-guarded CRUD over drug records; the guard middleware rejects
/// unauthenticated requests before these handlers run.

use actix_web::{web, HttpResponse};
use serde_json::Value;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{CreateDrugCommand, UpdateDrugCommand};
use crate::routes::parse_delete_id;
use crate::services::DrugsService;

/// POST /drugs — create a new drug, returns the stored record (201).
pub async fn create_drug(
    body: web::Json<Value>,
    drugs: web::Data<DrugsService>,
) -> Result<HttpResponse, AppError> {
    let cmd = CreateDrugCommand::parse(&body)?;
    let drug = drugs.create(cmd).await?;
    Ok(HttpResponse::Created().json(drug))
}

/// GET /drugs — list all drugs; 404 when the table is empty.
pub async fn list_drugs(drugs: web::Data<DrugsService>) -> Result<HttpResponse, AppError> {
    let drugs = drugs.find_all().await?;
    Ok(HttpResponse::Ok().json(drugs))
}

/// GET /drugs/{id}
pub async fn get_drug(
    id: web::Path<Uuid>,
    drugs: web::Data<DrugsService>,
) -> Result<HttpResponse, AppError> {
    let drug = drugs.find_one(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(drug))
}

/// PATCH /drugs/{id} — partial update, returns the freshly fetched record.
pub async fn update_drug(
    id: web::Path<Uuid>,
    body: web::Json<Value>,
    drugs: web::Data<DrugsService>,
) -> Result<HttpResponse, AppError> {
    let cmd = UpdateDrugCommand::parse(&body)?;
    let drug = drugs.update(id.into_inner(), cmd).await?;
    Ok(HttpResponse::Ok().json(drug))
}

/// DELETE /drugs/{id} — returns a confirmation with the affected-row count.
pub async fn delete_drug(
    id: web::Path<String>,
    drugs: web::Data<DrugsService>,
) -> Result<HttpResponse, AppError> {
    let id = parse_delete_id(&id)?;
    let confirmation = drugs.remove(id).await?;
    Ok(HttpResponse::Ok().json(confirmation))
}
