pub mod extract_meta;
pub mod fetch_page;
