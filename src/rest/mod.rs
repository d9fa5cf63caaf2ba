pub mod catalog;
pub mod errors;
pub mod location;
pub mod middleware;
pub mod pet;
pub mod routes;
pub mod schedule;
pub mod schemas;
pub mod session;

use crate::repo;
use csrf::AesGcmCsrfProtection;

pub struct AppState {
    pub csrf_protec: AesGcmCsrfProtection,
    pub repo: repo::ImplShelterRepo,
}
