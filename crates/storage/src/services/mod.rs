pub mod balancer;
pub mod checkin;
pub mod import;
pub mod reset;
pub mod search;
pub mod summary;
