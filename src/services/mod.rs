// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - sync layer between the UI state and the NOX API.

pub mod aggregator;
pub mod coordinator;
pub mod gateway;

pub use aggregator::DashboardAggregator;
pub use coordinator::{WriteCoordinator, WriteReceipt};
pub use gateway::{ApiGateway, WriteAck};
