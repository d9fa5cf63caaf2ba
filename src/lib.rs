//! # Shelter Registry
//!
//! Record-keeping service for an animal shelter: pets, locations, the
//! catalog records they reference (foods, medications, vaccines, injuries,
//! recurring checks, frequencies) and the schedule rows binding them
//! together, all exposed through a uniform JSON CRUD contract under
//! `/api/v1`. The [`client`] module carries the generic data-access layer
//! consumers share.

#![recursion_limit = "256"]

pub mod api;
pub mod client;
pub mod config;
pub mod consts;
pub mod logger;
pub mod models;
pub mod repo;
pub mod rest;
pub mod utils;
