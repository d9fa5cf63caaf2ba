pub mod catalog;
pub mod location;
pub mod pet;
pub mod schedule;
