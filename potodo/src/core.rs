// src/core.rs
pub mod aggregate;
pub mod discover;
pub mod filter;
pub mod po;
pub mod render;
pub mod reservation;
