//! Client-side data access: the generic fetch abstraction every consumer
//! shares, plus the collection-resource wrapper built on top of it.

pub mod http;
pub mod resource;
