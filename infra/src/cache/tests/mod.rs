//! Cache backend tests

mod memory_store_tests;
