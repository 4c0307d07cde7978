// src/core/mod.rs

pub mod cache;
pub mod converter;
pub mod engine;
pub mod error;
pub mod mapper;
pub mod ranking;
pub mod summary;
pub mod types;
