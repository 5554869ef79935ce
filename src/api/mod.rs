pub mod analyze_query;
pub mod index;
