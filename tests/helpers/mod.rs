// Test helper modules
//
// Shared factories for booking fixtures. Each test target includes this
// module via a #[path] attribute, so not every helper is used everywhere.
#![allow(dead_code)]

pub mod test_data;
