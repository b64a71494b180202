//! # intelscope-api - Backend HTTP Client
//!
//! Wire types for the backend JSON contract and the async [`ApiClient`]
//! that speaks it. This crate knows nothing about application state; it
//! turns HTTP responses into typed payloads and backend error envelopes
//! into [`intelscope_core::Error`] values.
//!
//! ## Endpoints
//!
//! | Method | Path                 | Payload                              |
//! |--------|----------------------|--------------------------------------|
//! | POST   | `/api/check`         | `{"domain": ...}` (domains + hashes) |
//! | POST   | `/api/check-ip`      | `{"ip": ...}`                        |
//! | GET    | `/api/statistics`    | summary, distribution, threat map    |
//! | GET    | `/api/config/status` | per-source configuration state       |

pub mod client;
pub mod wire;

pub use client::ApiClient;
pub use wire::{
    CheckResponse, ConfigStatusResponse, DomainCheckResponse, ErrorBody, IpCheckResponse,
    ReputationCounts, StatisticsResponse, SummaryCounts, WireSourceResult,
};
