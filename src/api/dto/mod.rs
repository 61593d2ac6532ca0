//! Data Transfer Objects for REST request/response serialization.
//!
//! Numeric request fields accept JSON numbers or numeric strings; response
//! values are plain JSON numbers.

pub mod inventory_dto;
pub mod warehouse_dto;

pub use inventory_dto::*;
pub use warehouse_dto::*;
