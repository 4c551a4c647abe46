//! Warehouse-level transaction policy layered on a ledger.
//!
//! One day-operation per simulated day: optionally restock to capacity,
//! attempt the day's sale, then turn the ledger's page. The three status
//! queries are instantaneous projections of ledger state, never sticky —
//! a warehouse that recovers its cash stops reporting insolvency.

use crate::error::WarehouseError;
use crate::ledger::Ledger;

/// Transactions you can perform while managing a warehouse of items
/// awaiting retail sale, bound to the ledger that records them.
///
/// The ledger is held behind the [`Ledger`] trait seam; all financial state
/// lives in it, the policy layer keeps only the capacity ceiling, the job
/// duration, and how the most recent order went.
#[derive(Debug, Clone)]
pub struct WarehouseTransactions<L: Ledger> {
    max_capacity: i64,
    max_days: usize,
    last_order_fulfilled: bool,
    ledger: L,
}

impl<L: Ledger> WarehouseTransactions<L> {
    /// Take over a warehouse with the given physical capacity for a
    /// fixed-term job of `duration` days.
    ///
    /// Fails if the capacity is negative or the duration is zero.
    pub fn new(capacity: i64, duration: usize, ledger: L) -> Result<Self, WarehouseError> {
        if capacity < 0 {
            return Err(WarehouseError::invalid("warehouse capacity may not be negative"));
        }
        if duration == 0 {
            return Err(WarehouseError::invalid("job duration must be positive"));
        }
        Ok(Self {
            max_capacity: capacity,
            max_days: duration,
            // Vacuously fulfilled until the first order arrives.
            last_order_fulfilled: true,
            ledger,
        })
    }

    /// Process one trading day without restocking: attempt today's sale,
    /// record whether the order was met in full, advance to tomorrow.
    pub fn sell_stock(&mut self, todays_order: i64) -> Result<(), WarehouseError> {
        if todays_order < 0 {
            return Err(WarehouseError::invalid("sales order cannot be negative"));
        }
        self.last_order_fulfilled = self.ledger.sell_items(todays_order)?;
        self.ledger.next_day();
        Ok(())
    }

    /// Process one trading day with a restock first: buy exactly enough to
    /// top the warehouse up to capacity (paying the delivery surcharge even
    /// when that is zero items), then sell and advance as [`Self::sell_stock`].
    ///
    /// A warehouse already holding more than its capacity makes the
    /// purchase quantity negative; the ledger rejects it before anything
    /// changes, so the day does not advance.
    pub fn restock_and_sell_stock(&mut self, todays_order: i64) -> Result<(), WarehouseError> {
        if todays_order < 0 {
            return Err(WarehouseError::invalid("sales order cannot be negative"));
        }
        self.ledger.buy_items(self.max_capacity - self.ledger.in_stock())?;
        self.last_order_fulfilled = self.ledger.sell_items(todays_order)?;
        self.ledger.next_day();
        Ok(())
    }

    /// Whether the cash reserve is currently in the red.
    pub fn insolvent(&self) -> bool {
        self.ledger.cash_available() < 0
    }

    /// Whether the most recent sale fell short of the requested quantity.
    /// False before any order has been processed.
    pub fn order_unfulfilled(&self) -> bool {
        !self.last_order_fulfilled
    }

    /// Whether the fixed-term job has elapsed: true once the ledger has
    /// advanced past the final day of the term.
    pub fn job_done(&self) -> bool {
        self.ledger.current_day() > self.max_days
    }

    pub fn max_capacity(&self) -> i64 {
        self.max_capacity
    }

    pub fn max_days(&self) -> usize {
        self.max_days
    }

    /// Read-only view of the bound ledger, for display purposes.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }
}
