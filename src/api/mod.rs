// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod errors;
pub mod handlers;
pub mod http_server;
pub mod request;
pub mod response;

pub use errors::{ApiError, ErrorResponse};
pub use http_server::{build_router, start_server, AppState};
pub use request::{AnalyzeRequest, SearchRequest};
pub use response::{AnalyzeResponse, HealthResponse, IndexMetaResponse, SearchResponse};
