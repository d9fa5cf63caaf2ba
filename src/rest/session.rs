//! CSRF credential issuance.
//!
//! Clients fetch the token/cookie pair once per session and pass both back
//! explicitly on every call; nothing is read from ambient cookie state.

use csrf::CsrfProtection;
use ntex::web;

use crate::{
    consts,
    rest::{AppState, errors},
};

#[derive(serde::Serialize, serde::Deserialize)]
pub struct CsrfPairResponse {
    pub token: String,
    pub cookie: String,
}

#[web::get("/token")]
async fn issue_csrf_token(
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let (token, cookie) = app_state
        .csrf_protec
        .generate_token_pair(None, consts::CSRF_TOKEN_TTL_SECONDS)
        .map_err(|e| {
            errors::RegistryError::InternalServerError(format!(
                "csrf pair could not be generated: {e}"
            ))
        })?;

    Ok(web::HttpResponse::Ok().json(&CsrfPairResponse {
        token: token.b64_string(),
        cookie: cookie.b64_string(),
    }))
}
