//! Common library exports shared between the engine and the frontend.

extern crate serde;


pub mod course_record;
pub mod filter_criteria;
pub mod filter_predicates;
pub mod filter_pipeline;
pub mod facets;
pub mod catalog_const;
