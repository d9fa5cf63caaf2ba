use ntex::web;

use crate::{
    api,
    rest::{AppState, middleware, schemas},
};

#[web::get("")]
async fn list_pets(
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let pets = api::pet::list_pets(&app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&pets))
}

#[web::post("")]
async fn create_pet(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    payload: web::types::Json<schemas::pet::PetPayload>,
) -> Result<impl web::Responder, web::Error> {
    let pet = api::pet::create_pet(payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Created().json(&pet))
}

#[web::get("/{pet_id}")]
async fn get_pet(
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    let pet = api::pet::get_pet(path.0, &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&pet))
}

#[web::put("/{pet_id}")]
async fn update_pet(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
    payload: web::types::Json<schemas::pet::PetPayload>,
) -> Result<impl web::Responder, web::Error> {
    let pet = api::pet::update_pet(path.0, payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&pet))
}

#[web::patch("/{pet_id}")]
async fn patch_pet(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
    payload: web::types::Json<schemas::pet::PetPayload>,
) -> Result<impl web::Responder, web::Error> {
    let pet = api::pet::update_pet(path.0, payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&pet))
}

#[web::delete("/{pet_id}")]
async fn delete_pet(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    api::pet::delete_pet(path.0, &app_state.repo).await?;
    Ok(web::HttpResponse::NoContent().finish())
}
