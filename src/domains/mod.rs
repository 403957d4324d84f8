//! Domains module containing the server's business logic.
//!
//! The only domain is `tools`; the server exposes no resources or prompts.

pub mod tools;
