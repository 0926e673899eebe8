pub mod catalog_view_state;
pub mod injected_sources;
