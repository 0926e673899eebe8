pub mod catalog_filters;
pub mod course_card;
pub mod result_summary;
