pub mod catalog;
pub mod config;
pub mod dtos;
pub mod extract;
pub mod handlers;
pub mod recommendation;
pub mod services;
pub mod startup;
