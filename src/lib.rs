//! # warehouse-gateway
//!
//! HTML, REST and WebSocket gateway for named bounded storage warehouses.
//!
//! Each warehouse is a [`domain::BoundedPool`]: a capacity and a level that
//! always stays within `[0, capacity]`. Deposits, withdrawals and capacity
//! changes never fail on out-of-range numbers; they clamp. Everything else
//! in this crate is the registry and request plumbing around that type.
//!
//! ## Architecture
//!
//! ```text
//! Clients (browser forms, HTTP JSON, WebSocket)
//!     │
//!     ├── HTML pages (web/)
//!     ├── REST handlers (api/)
//!     ├── WS handler (ws/)
//!     │
//!     ├── WarehouseService (service/)
//!     ├── EventBus (domain/)
//!     │
//!     ├── WarehouseRegistry (domain/)
//!     └── BoundedPool (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod router;
pub mod service;
pub mod web;
pub mod ws;
