//! Development host for the chat widget: serves the built bundle and a
//! stand-in `/chatbot` endpoint speaking the widget's wire format.

pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod service;
