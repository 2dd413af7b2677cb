//! Compile-fail tests to verify error messages
//!
//! These tests ensure that unsupported inputs and unknown attribute keys
//! produce clear error messages at the offending tokens.

#[test]
fn ui_tests() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/*.rs");
}
