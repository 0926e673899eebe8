//! Catalog engine: data loading, view boundary and the interaction controller.

pub mod config;
pub mod error;
pub mod data_loader;
pub mod view;
pub mod controller;
