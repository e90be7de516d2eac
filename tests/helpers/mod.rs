//! Shared fixtures and assertions for the integration suite.

#![allow(dead_code)]

pub mod manifest_fixtures;
