//! API Routes
//!
//! Route handlers organized by resource.

pub mod clients;
pub mod health;
pub mod vehicles;
