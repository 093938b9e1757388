pub mod config;
pub mod controller;
pub mod dtos;
pub mod errors;
pub mod service;
pub mod structs;
