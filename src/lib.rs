// src/lib.rs
//! Promotional site for the CrystalCraft game server: the HTTPS static host
//! plus the polling/reconciliation engine that keeps page widgets in step
//! with the public status API.

pub mod config;
pub mod handlers;
pub mod models;
pub mod sync;
pub mod tls;
