//! Repository structure checks for the test suite
