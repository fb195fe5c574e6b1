//! Integration tests for the docref CLI
//!
//! These tests run the binary against a temporary documentation tree, with
//! small shell scripts standing in for `python -m modernize -l` and the
//! Python interpreter.

mod cli_test;
