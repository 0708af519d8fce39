pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod reply;
pub mod response;
pub mod routes;
