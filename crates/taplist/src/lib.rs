//! Taplist library
//!
//! Brewery catalog browsing: data model, favorites persistence,
//! catalog providers, and the application state + dispatcher.

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod network;
pub mod providers;
