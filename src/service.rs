pub mod clock;
pub mod record_builder;
pub mod validation;
