//! Route handlers organized by resource

pub mod artists;
pub mod common;
pub mod health;
pub mod home;
pub mod shows;
pub mod venues;
