//! Domains module containing the business logic of the server.
//!
//! The only subdomain today is `tools`: the MCP tool surface over the
//! LocaBriques REST API.

pub mod tools;
