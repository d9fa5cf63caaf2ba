//! CRUD handlers for the catalog resources. Each block follows the same
//! contract: list/read are open, mutations go through the csrf guard.

use ntex::web;

use crate::{
    api,
    rest::{AppState, middleware, schemas},
};

// -- frequencies -------------------------------------------------------

#[web::get("")]
async fn list_frequencies(
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let frequencies = api::catalog::list_frequencies(&app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&frequencies))
}

#[web::post("")]
async fn create_frequency(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    payload: web::types::Json<schemas::catalog::FrequencyPayload>,
) -> Result<impl web::Responder, web::Error> {
    let frequency = api::catalog::create_frequency(payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Created().json(&frequency))
}

#[web::get("/{frequency_id}")]
async fn get_frequency(
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    let frequency = api::catalog::get_frequency(path.0, &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&frequency))
}

#[web::put("/{frequency_id}")]
async fn update_frequency(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
    payload: web::types::Json<schemas::catalog::FrequencyPayload>,
) -> Result<impl web::Responder, web::Error> {
    let frequency =
        api::catalog::update_frequency(path.0, payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&frequency))
}

#[web::patch("/{frequency_id}")]
async fn patch_frequency(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
    payload: web::types::Json<schemas::catalog::FrequencyPayload>,
) -> Result<impl web::Responder, web::Error> {
    let frequency =
        api::catalog::update_frequency(path.0, payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&frequency))
}

#[web::delete("/{frequency_id}")]
async fn delete_frequency(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    api::catalog::delete_frequency(path.0, &app_state.repo).await?;
    Ok(web::HttpResponse::NoContent().finish())
}

// -- foods -------------------------------------------------------------

#[web::get("")]
async fn list_foods(
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let foods = api::catalog::list_foods(&app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&foods))
}

#[web::post("")]
async fn create_food(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    payload: web::types::Json<schemas::catalog::FoodPayload>,
) -> Result<impl web::Responder, web::Error> {
    let food = api::catalog::create_food(payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Created().json(&food))
}

#[web::get("/{food_id}")]
async fn get_food(
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    let food = api::catalog::get_food(path.0, &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&food))
}

#[web::put("/{food_id}")]
async fn update_food(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
    payload: web::types::Json<schemas::catalog::FoodPayload>,
) -> Result<impl web::Responder, web::Error> {
    let food = api::catalog::update_food(path.0, payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&food))
}

#[web::patch("/{food_id}")]
async fn patch_food(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
    payload: web::types::Json<schemas::catalog::FoodPayload>,
) -> Result<impl web::Responder, web::Error> {
    let food = api::catalog::update_food(path.0, payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&food))
}

#[web::delete("/{food_id}")]
async fn delete_food(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    api::catalog::delete_food(path.0, &app_state.repo).await?;
    Ok(web::HttpResponse::NoContent().finish())
}

// -- medications -------------------------------------------------------

#[web::get("")]
async fn list_medications(
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let medications = api::catalog::list_medications(&app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&medications))
}

#[web::post("")]
async fn create_medication(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    payload: web::types::Json<schemas::catalog::MedicationPayload>,
) -> Result<impl web::Responder, web::Error> {
    let medication =
        api::catalog::create_medication(payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Created().json(&medication))
}

#[web::get("/{medication_id}")]
async fn get_medication(
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    let medication = api::catalog::get_medication(path.0, &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&medication))
}

#[web::put("/{medication_id}")]
async fn update_medication(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
    payload: web::types::Json<schemas::catalog::MedicationPayload>,
) -> Result<impl web::Responder, web::Error> {
    let medication =
        api::catalog::update_medication(path.0, payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&medication))
}

#[web::patch("/{medication_id}")]
async fn patch_medication(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
    payload: web::types::Json<schemas::catalog::MedicationPayload>,
) -> Result<impl web::Responder, web::Error> {
    let medication =
        api::catalog::update_medication(path.0, payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&medication))
}

#[web::delete("/{medication_id}")]
async fn delete_medication(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    api::catalog::delete_medication(path.0, &app_state.repo).await?;
    Ok(web::HttpResponse::NoContent().finish())
}

// -- vaccines ----------------------------------------------------------

#[web::get("")]
async fn list_vaccines(
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let vaccines = api::catalog::list_vaccines(&app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&vaccines))
}

#[web::post("")]
async fn create_vaccine(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    payload: web::types::Json<schemas::catalog::VaccinePayload>,
) -> Result<impl web::Responder, web::Error> {
    let vaccine = api::catalog::create_vaccine(payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Created().json(&vaccine))
}

#[web::get("/{vaccine_id}")]
async fn get_vaccine(
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    let vaccine = api::catalog::get_vaccine(path.0, &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&vaccine))
}

#[web::put("/{vaccine_id}")]
async fn update_vaccine(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
    payload: web::types::Json<schemas::catalog::VaccinePayload>,
) -> Result<impl web::Responder, web::Error> {
    let vaccine =
        api::catalog::update_vaccine(path.0, payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&vaccine))
}

#[web::patch("/{vaccine_id}")]
async fn patch_vaccine(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
    payload: web::types::Json<schemas::catalog::VaccinePayload>,
) -> Result<impl web::Responder, web::Error> {
    let vaccine =
        api::catalog::update_vaccine(path.0, payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&vaccine))
}

#[web::delete("/{vaccine_id}")]
async fn delete_vaccine(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    api::catalog::delete_vaccine(path.0, &app_state.repo).await?;
    Ok(web::HttpResponse::NoContent().finish())
}

// -- injuries ----------------------------------------------------------

#[web::get("")]
async fn list_injuries(
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let injuries = api::catalog::list_injuries(&app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&injuries))
}

#[web::post("")]
async fn create_injury(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    payload: web::types::Json<schemas::catalog::InjuryPayload>,
) -> Result<impl web::Responder, web::Error> {
    let injury = api::catalog::create_injury(payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Created().json(&injury))
}

#[web::get("/{injury_id}")]
async fn get_injury(
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    let injury = api::catalog::get_injury(path.0, &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&injury))
}

#[web::put("/{injury_id}")]
async fn update_injury(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
    payload: web::types::Json<schemas::catalog::InjuryPayload>,
) -> Result<impl web::Responder, web::Error> {
    let injury =
        api::catalog::update_injury(path.0, payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&injury))
}

#[web::patch("/{injury_id}")]
async fn patch_injury(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
    payload: web::types::Json<schemas::catalog::InjuryPayload>,
) -> Result<impl web::Responder, web::Error> {
    let injury =
        api::catalog::update_injury(path.0, payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&injury))
}

#[web::delete("/{injury_id}")]
async fn delete_injury(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    api::catalog::delete_injury(path.0, &app_state.repo).await?;
    Ok(web::HttpResponse::NoContent().finish())
}

// -- checks ------------------------------------------------------------

#[web::get("")]
async fn list_checks(
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let checks = api::catalog::list_checks(&app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&checks))
}

#[web::post("")]
async fn create_check(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    payload: web::types::Json<schemas::catalog::CheckPayload>,
) -> Result<impl web::Responder, web::Error> {
    let check = api::catalog::create_check(payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Created().json(&check))
}

#[web::get("/{check_id}")]
async fn get_check(
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    let check = api::catalog::get_check(path.0, &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&check))
}

#[web::put("/{check_id}")]
async fn update_check(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
    payload: web::types::Json<schemas::catalog::CheckPayload>,
) -> Result<impl web::Responder, web::Error> {
    let check = api::catalog::update_check(path.0, payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&check))
}

#[web::patch("/{check_id}")]
async fn patch_check(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
    payload: web::types::Json<schemas::catalog::CheckPayload>,
) -> Result<impl web::Responder, web::Error> {
    let check = api::catalog::update_check(path.0, payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&check))
}

#[web::delete("/{check_id}")]
async fn delete_check(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    api::catalog::delete_check(path.0, &app_state.repo).await?;
    Ok(web::HttpResponse::NoContent().finish())
}
