mod browse_tests;
mod search_tests;
