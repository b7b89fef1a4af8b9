//! End-to-end tests: a real server on 127.0.0.1:0 with MockLlm as the model provider.
//! Run with `cargo test -p serve -- --nocapture` to see received bodies.

mod common;
mod cors;
mod health;
mod invalid_words;
mod provider_failure;
mod relation_ok;
mod unparsed_output;
