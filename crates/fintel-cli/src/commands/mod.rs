pub mod ask;
pub mod auth;
pub mod browse;
pub mod catalog;
pub mod collection;
pub mod compare;
pub mod dispatch;
pub mod doctor;
pub mod franchise;
pub mod home;
pub mod insights;
pub mod open;
pub mod shared;
