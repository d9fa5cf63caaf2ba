use ntex::web;

use crate::{
    api,
    rest::{AppState, middleware, schemas},
};

#[web::get("")]
async fn list_locations(
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let locations = api::location::list_locations(&app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&locations))
}

#[web::post("")]
async fn create_location(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    payload: web::types::Json<schemas::location::LocationPayload>,
) -> Result<impl web::Responder, web::Error> {
    let location = api::location::create_location(payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Created().json(&location))
}

#[web::get("/{location_id}")]
async fn get_location(
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    let location = api::location::get_location(path.0, &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&location))
}

#[web::put("/{location_id}")]
async fn update_location(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
    payload: web::types::Json<schemas::location::LocationPayload>,
) -> Result<impl web::Responder, web::Error> {
    let location =
        api::location::update_location(path.0, payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&location))
}

#[web::patch("/{location_id}")]
async fn patch_location(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
    payload: web::types::Json<schemas::location::LocationPayload>,
) -> Result<impl web::Responder, web::Error> {
    let location =
        api::location::update_location(path.0, payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&location))
}

#[web::delete("/{location_id}")]
async fn delete_location(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    api::location::delete_location(path.0, &app_state.repo).await?;
    Ok(web::HttpResponse::NoContent().finish())
}
