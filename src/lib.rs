//! Stockroom — day-indexed warehouse bookkeeping and the retail transaction
//! policy layered on top of it.
//!
//! Two cooperating components:
//! - [`WarehouseLedger`]: the authoritative, append-only record of stock and
//!   cash, one snapshot per simulated day, with primitive buy/sell/advance
//!   operations and historical lookup.
//! - [`WarehouseTransactions`]: warehouse policy — capacity ceiling, job
//!   duration, order-fulfilment tracking — sequencing ledger operations one
//!   trading day at a time.
//!
//! The interactive simulator driving these types lives elsewhere: it builds
//! the pair from a [`SimulationConfig`], calls one day-operation per
//! simulated day, and polls the three status queries (`insolvent`,
//! `order_unfulfilled`, `job_done`) to decide whether to continue.

pub mod config;
pub mod error;
pub mod ledger;
pub mod transactions;

pub use config::SimulationConfig;
pub use error::WarehouseError;
pub use ledger::{DayRecord, Ledger, WarehouseLedger};
pub use transactions::WarehouseTransactions;
