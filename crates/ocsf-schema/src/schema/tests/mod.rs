mod load_tests;
mod query_tests;
