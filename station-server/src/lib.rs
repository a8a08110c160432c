//! Nearest train station server.
//!
//! A web service that answers: "which five stations are closest to this
//! latitude and longitude?"

pub mod config;
pub mod domain;
pub mod mapper;
pub mod ranking;
pub mod store;
pub mod web;
