/// Factories for creating report presenters
mod presenter_factory;

pub use presenter_factory::{PresenterFactory, PresenterType};
