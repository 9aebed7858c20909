pub mod apps;
pub mod authorization;
pub mod controller;
pub mod ocs;
