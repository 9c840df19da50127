//! Application layer: use cases, DTOs, read models and factories.

pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
