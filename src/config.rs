//! Simulation parameters — the validated hand-off between the driving
//! front-end and the bookkeeping core.
//!
//! The front-end collects these values however it likes (they are plain
//! serde data, TOML included); [`SimulationConfig::build`] is the single
//! validation gate that turns them into a working ledger/orchestrator pair.

use serde::{Deserialize, Serialize};

use crate::error::WarehouseError;
use crate::ledger::WarehouseLedger;
use crate::transactions::WarehouseTransactions;

/// Parameters for one simulation run.
///
/// Defaults match the values the warehouse simulator ships with: a 20-box
/// warehouse, $80 in the till, $5 wholesale against $8 retail, a $50
/// delivery charge, and a 7-day job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Warehouse physical limit, in items.
    pub capacity: i64,

    /// Length of the manager's fixed-term job, in days.
    pub duration: usize,

    /// Items on the shelves on day 1. `None` starts with a full warehouse.
    pub initial_stock: Option<i64>,

    /// Cash reserve on day 1, in dollars. May be negative.
    pub initial_cash: i64,

    /// Cost of buying one item, in dollars.
    pub wholesale_cost: i64,

    /// Income from selling one item, in dollars.
    pub retail_price: i64,

    /// Flat surcharge on every restock delivery, in dollars.
    pub delivery_charge: i64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            capacity: 20,
            duration: 7,
            initial_stock: None,
            initial_cash: 80,
            wholesale_cost: 5,
            retail_price: 8,
            delivery_charge: 50,
        }
    }
}

impl SimulationConfig {
    /// Parse a config from TOML text. Unknown keys are rejected, missing
    /// keys fall back to the defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Validate the parameters by constructing the ledger and the
    /// transaction orchestrator bound to it.
    pub fn build(&self) -> Result<WarehouseTransactions<WarehouseLedger>, WarehouseError> {
        let ledger = WarehouseLedger::new(
            self.initial_stock.unwrap_or(self.capacity),
            self.initial_cash,
            self.wholesale_cost,
            self.retail_price,
            self.delivery_charge,
        )?;
        WarehouseTransactions::new(self.capacity, self.duration, ledger)
    }
}
