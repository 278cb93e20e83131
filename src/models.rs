pub mod category;
pub mod field;
pub mod sign_in;
pub mod user_record;
