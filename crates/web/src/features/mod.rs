pub mod admin;
pub mod registrants;
