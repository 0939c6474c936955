pub mod admin;
pub mod registrant;
pub mod search;
pub mod summary;
