//! Shared test harness: mock provider, config builder, test server

// Each test binary uses a different slice of the harness
#![allow(dead_code)]

pub mod config;
pub mod mock_provider;
pub mod server;
