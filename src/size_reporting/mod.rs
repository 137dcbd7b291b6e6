/// Size reporting core - domain model and pure services
pub mod domain;
pub mod services;
