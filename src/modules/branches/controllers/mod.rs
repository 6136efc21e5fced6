pub mod branch_controller;

pub use branch_controller::configure;
