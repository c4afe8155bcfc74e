mod common;
mod error_tests;
mod private_tests;
mod public_tests;
