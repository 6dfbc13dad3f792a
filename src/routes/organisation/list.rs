use actix_web::{get, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::organisation::{OrganisationList, OrganisationRes};
use crate::types::response::{ApiResponse, ApiResult, Envelope};
use crate::types::token::Claims;

#[get("")]
async fn list_organisations(
    db: web::Data<Arc<PostgresService>>,
    claims: web::ReqData<Claims>,
) -> ApiResult<Envelope<OrganisationList>> {
    let organisations = db.list_organisations_for_user(claims.sub).await?;

    Ok(ApiResponse::Ok(Envelope::success(
        "Organisations retrieved",
        OrganisationList {
            organisations: organisations.iter().map(OrganisationRes::from).collect(),
        },
    )))
}
