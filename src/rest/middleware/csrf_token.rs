use base64::{Engine, prelude::BASE64_STANDARD};
use csrf::CsrfProtection;
use ntex::{http::Payload, web};

use crate::{
    consts,
    rest::{AppState, errors},
};

/// Extractor guard for mutating endpoints: the token/cookie pair issued by
/// the session endpoint must arrive base64-encoded in the request headers.
#[derive(Default, serde::Serialize, serde::Deserialize)]
pub struct CsrfToken {
    pub token_base64: String,
    pub cookie_base64: String,
}

fn get_header_str_value(req: &web::HttpRequest, key: &str) -> String {
    req.headers()
        .get(key)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

fn is_csrf_valid(req: &web::HttpRequest) -> bool {
    if let Some(app_state) = req.app_state::<AppState>() {
        let token = BASE64_STANDARD
            .decode(get_header_str_value(req, consts::CSRF_TOKEN_HEADER_NAME).as_bytes())
            .map(|token| app_state.csrf_protec.parse_token(&token));
        let cookie = BASE64_STANDARD
            .decode(get_header_str_value(req, consts::CSRF_COOKIE_HEADER_NAME).as_bytes())
            .map(|cookie| app_state.csrf_protec.parse_cookie(&cookie));

        if let (Ok(Ok(token)), Ok(Ok(cookie))) = (token, cookie) {
            return app_state
                .csrf_protec
                .verify_token_pair(&token, &cookie)
                .is_ok();
        }
    }

    false
}

impl<Err> web::FromRequest<Err> for CsrfToken {
    type Error = web::Error;

    fn from_request(
        req: &web::HttpRequest,
        _: &mut Payload,
    ) -> impl std::future::Future<Output = Result<Self, Self::Error>> {
        if !is_csrf_valid(req) {
            return std::future::ready(Err(errors::RegistryError::InvalidCsrfToken.into()));
        }

        std::future::ready(Ok(Self::default()))
    }
}
