//! CRUD handlers for the schedule/join resources.

use ntex::web;

use crate::{
    api,
    rest::{AppState, middleware, schemas},
};

// -- pet foods ---------------------------------------------------------

#[web::get("")]
async fn list_pet_foods(
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let pet_foods = api::schedule::list_pet_foods(&app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&pet_foods))
}

#[web::post("")]
async fn create_pet_food(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    payload: web::types::Json<schemas::schedule::PetFoodPayload>,
) -> Result<impl web::Responder, web::Error> {
    let pet_food = api::schedule::create_pet_food(payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Created().json(&pet_food))
}

#[web::get("/{pet_food_id}")]
async fn get_pet_food(
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    let pet_food = api::schedule::get_pet_food(path.0, &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&pet_food))
}

#[web::put("/{pet_food_id}")]
async fn update_pet_food(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
    payload: web::types::Json<schemas::schedule::PetFoodPayload>,
) -> Result<impl web::Responder, web::Error> {
    let pet_food =
        api::schedule::update_pet_food(path.0, payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&pet_food))
}

#[web::patch("/{pet_food_id}")]
async fn patch_pet_food(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
    payload: web::types::Json<schemas::schedule::PetFoodPayload>,
) -> Result<impl web::Responder, web::Error> {
    let pet_food =
        api::schedule::update_pet_food(path.0, payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&pet_food))
}

#[web::delete("/{pet_food_id}")]
async fn delete_pet_food(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    api::schedule::delete_pet_food(path.0, &app_state.repo).await?;
    Ok(web::HttpResponse::NoContent().finish())
}

// -- medication schedules ----------------------------------------------

#[web::get("")]
async fn list_medication_schedules(
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let schedules = api::schedule::list_medication_schedules(&app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&schedules))
}

#[web::post("")]
async fn create_medication_schedule(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    payload: web::types::Json<schemas::schedule::MedicationSchedulePayload>,
) -> Result<impl web::Responder, web::Error> {
    let schedule =
        api::schedule::create_medication_schedule(payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Created().json(&schedule))
}

#[web::get("/{schedule_id}")]
async fn get_medication_schedule(
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    let schedule = api::schedule::get_medication_schedule(path.0, &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&schedule))
}

#[web::put("/{schedule_id}")]
async fn update_medication_schedule(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
    payload: web::types::Json<schemas::schedule::MedicationSchedulePayload>,
) -> Result<impl web::Responder, web::Error> {
    let schedule =
        api::schedule::update_medication_schedule(path.0, payload.into_inner(), &app_state.repo)
            .await?;
    Ok(web::HttpResponse::Ok().json(&schedule))
}

#[web::patch("/{schedule_id}")]
async fn patch_medication_schedule(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
    payload: web::types::Json<schemas::schedule::MedicationSchedulePayload>,
) -> Result<impl web::Responder, web::Error> {
    let schedule =
        api::schedule::update_medication_schedule(path.0, payload.into_inner(), &app_state.repo)
            .await?;
    Ok(web::HttpResponse::Ok().json(&schedule))
}

#[web::delete("/{schedule_id}")]
async fn delete_medication_schedule(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    api::schedule::delete_medication_schedule(path.0, &app_state.repo).await?;
    Ok(web::HttpResponse::NoContent().finish())
}

// -- vaccination schedules ---------------------------------------------

#[web::get("")]
async fn list_vaccination_schedules(
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let schedules = api::schedule::list_vaccination_schedules(&app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&schedules))
}

#[web::post("")]
async fn create_vaccination_schedule(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    payload: web::types::Json<schemas::schedule::VaccinationSchedulePayload>,
) -> Result<impl web::Responder, web::Error> {
    let schedule =
        api::schedule::create_vaccination_schedule(payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Created().json(&schedule))
}

#[web::get("/{schedule_id}")]
async fn get_vaccination_schedule(
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    let schedule = api::schedule::get_vaccination_schedule(path.0, &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&schedule))
}

#[web::put("/{schedule_id}")]
async fn update_vaccination_schedule(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
    payload: web::types::Json<schemas::schedule::VaccinationSchedulePayload>,
) -> Result<impl web::Responder, web::Error> {
    let schedule =
        api::schedule::update_vaccination_schedule(path.0, payload.into_inner(), &app_state.repo)
            .await?;
    Ok(web::HttpResponse::Ok().json(&schedule))
}

#[web::patch("/{schedule_id}")]
async fn patch_vaccination_schedule(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
    payload: web::types::Json<schemas::schedule::VaccinationSchedulePayload>,
) -> Result<impl web::Responder, web::Error> {
    let schedule =
        api::schedule::update_vaccination_schedule(path.0, payload.into_inner(), &app_state.repo)
            .await?;
    Ok(web::HttpResponse::Ok().json(&schedule))
}

#[web::delete("/{schedule_id}")]
async fn delete_vaccination_schedule(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    api::schedule::delete_vaccination_schedule(path.0, &app_state.repo).await?;
    Ok(web::HttpResponse::NoContent().finish())
}

// -- check schedules ---------------------------------------------------

#[web::get("")]
async fn list_checks_schedules(
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let schedules = api::schedule::list_checks_schedules(&app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&schedules))
}

#[web::post("")]
async fn create_checks_schedule(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    payload: web::types::Json<schemas::schedule::ChecksSchedulePayload>,
) -> Result<impl web::Responder, web::Error> {
    let schedule =
        api::schedule::create_checks_schedule(payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Created().json(&schedule))
}

#[web::get("/{schedule_id}")]
async fn get_checks_schedule(
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    let schedule = api::schedule::get_checks_schedule(path.0, &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&schedule))
}

#[web::put("/{schedule_id}")]
async fn update_checks_schedule(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
    payload: web::types::Json<schemas::schedule::ChecksSchedulePayload>,
) -> Result<impl web::Responder, web::Error> {
    let schedule =
        api::schedule::update_checks_schedule(path.0, payload.into_inner(), &app_state.repo)
            .await?;
    Ok(web::HttpResponse::Ok().json(&schedule))
}

#[web::patch("/{schedule_id}")]
async fn patch_checks_schedule(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
    payload: web::types::Json<schemas::schedule::ChecksSchedulePayload>,
) -> Result<impl web::Responder, web::Error> {
    let schedule =
        api::schedule::update_checks_schedule(path.0, payload.into_inner(), &app_state.repo)
            .await?;
    Ok(web::HttpResponse::Ok().json(&schedule))
}

#[web::delete("/{schedule_id}")]
async fn delete_checks_schedule(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    api::schedule::delete_checks_schedule(path.0, &app_state.repo).await?;
    Ok(web::HttpResponse::NoContent().finish())
}

// -- injury reports ----------------------------------------------------

#[web::get("")]
async fn list_injury_reports(
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let reports = api::schedule::list_injury_reports(&app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&reports))
}

#[web::post("")]
async fn create_injury_report(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    payload: web::types::Json<schemas::schedule::InjuryReportPayload>,
) -> Result<impl web::Responder, web::Error> {
    let report =
        api::schedule::create_injury_report(payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Created().json(&report))
}

#[web::get("/{report_id}")]
async fn get_injury_report(
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    let report = api::schedule::get_injury_report(path.0, &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&report))
}

#[web::put("/{report_id}")]
async fn update_injury_report(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
    payload: web::types::Json<schemas::schedule::InjuryReportPayload>,
) -> Result<impl web::Responder, web::Error> {
    let report =
        api::schedule::update_injury_report(path.0, payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&report))
}

#[web::patch("/{report_id}")]
async fn patch_injury_report(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
    payload: web::types::Json<schemas::schedule::InjuryReportPayload>,
) -> Result<impl web::Responder, web::Error> {
    let report =
        api::schedule::update_injury_report(path.0, payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&report))
}

#[web::delete("/{report_id}")]
async fn delete_injury_report(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    api::schedule::delete_injury_report(path.0, &app_state.repo).await?;
    Ok(web::HttpResponse::NoContent().finish())
}

// -- adoptions ---------------------------------------------------------

#[web::get("")]
async fn list_pet_adoptions(
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let adoptions = api::schedule::list_pet_adoptions(&app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&adoptions))
}

#[web::post("")]
async fn create_pet_adoption(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    payload: web::types::Json<schemas::schedule::PetAdoptionPayload>,
) -> Result<impl web::Responder, web::Error> {
    let adoption =
        api::schedule::create_pet_adoption(payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Created().json(&adoption))
}

#[web::get("/{adoption_id}")]
async fn get_pet_adoption(
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    let adoption = api::schedule::get_pet_adoption(path.0, &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&adoption))
}

#[web::put("/{adoption_id}")]
async fn update_pet_adoption(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
    payload: web::types::Json<schemas::schedule::PetAdoptionPayload>,
) -> Result<impl web::Responder, web::Error> {
    let adoption =
        api::schedule::update_pet_adoption(path.0, payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&adoption))
}

#[web::patch("/{adoption_id}")]
async fn patch_pet_adoption(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
    payload: web::types::Json<schemas::schedule::PetAdoptionPayload>,
) -> Result<impl web::Responder, web::Error> {
    let adoption =
        api::schedule::update_pet_adoption(path.0, payload.into_inner(), &app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&adoption))
}

#[web::delete("/{adoption_id}")]
async fn delete_pet_adoption(
    _: middleware::csrf_token::CsrfToken,
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    api::schedule::delete_pet_adoption(path.0, &app_state.repo).await?;
    Ok(web::HttpResponse::NoContent().finish())
}
