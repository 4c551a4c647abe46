//! Day-indexed financial and inventory ledger.
//!
//! The ledger is the permanent record of a simulation run: one stock/cash
//! snapshot per day, appended as days advance and never rewritten. Buy and
//! sell operations compose additively onto the current day's snapshot;
//! turning the page with [`Ledger::next_day`] freezes it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::WarehouseError;

/// Public contract of a day-indexed warehouse ledger.
///
/// The transaction layer is generic over this trait so its policy logic can
/// be exercised against a scripted fake without a real ledger behind it.
pub trait Ledger {
    /// Sell up to `requested` items at the retail price, capped by what is
    /// in stock today. Returns whether the full order was satisfied.
    fn sell_items(&mut self, requested: i64) -> Result<bool, WarehouseError>;

    /// Buy `requested` items at the wholesale cost, paying the delivery
    /// surcharge on top. The surcharge applies even when `requested` is 0.
    fn buy_items(&mut self, requested: i64) -> Result<(), WarehouseError>;

    /// Carry today's balances forward as the seed for a new day.
    fn next_day(&mut self);

    /// The day currently being recorded, starting at 1.
    fn current_day(&self) -> usize;

    /// Cash reserve at the current day.
    fn cash_available(&self) -> i64;

    /// Cash reserve at the end of an explicit past (or current) day.
    fn cash_available_on(&self, day: usize) -> Result<i64, WarehouseError>;

    /// Items in stock at the current day.
    fn in_stock(&self) -> i64;

    /// Items in stock at the end of an explicit past (or current) day.
    fn in_stock_on(&self, day: usize) -> Result<i64, WarehouseError>;
}

/// End-of-day figures for a single recorded day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub day: usize,
    pub stock: i64,
    pub cash: i64,
}

/// Append-only record of stock and cash, one snapshot per day.
///
/// Day numbering starts at 1; entry `d - 1` of each history vector holds the
/// figures for day `d`. Only the current day's entry is ever mutated.
/// Quantities and dollar amounts are `i64` — the cash reserve may go
/// negative, since trading while insolvent is legal.
#[derive(Debug, Clone)]
pub struct WarehouseLedger {
    today: usize,
    stock_history: Vec<i64>,
    cash_history: Vec<i64>,
    wholesale_cost: i64,
    retail_price: i64,
    delivery_charge: i64,
}

impl WarehouseLedger {
    /// Open a ledger with the given day-1 stock level and cash reserve.
    ///
    /// Fails if the stock level, wholesale cost or delivery charge is
    /// negative, or if the wholesale cost exceeds the retail price (which
    /// together also rule out a negative retail price). A negative initial
    /// cash reserve is allowed.
    pub fn new(
        initial_stock: i64,
        initial_cash: i64,
        wholesale_cost: i64,
        retail_price: i64,
        delivery_charge: i64,
    ) -> Result<Self, WarehouseError> {
        if initial_stock < 0 {
            return Err(WarehouseError::invalid("initial stock level cannot be negative"));
        }
        if wholesale_cost < 0 {
            return Err(WarehouseError::invalid("wholesale cost cannot be negative"));
        }
        if delivery_charge < 0 {
            return Err(WarehouseError::invalid("delivery charge cannot be negative"));
        }
        if wholesale_cost > retail_price {
            return Err(WarehouseError::invalid("wholesale cost may not exceed retail price"));
        }
        Ok(Self {
            today: 1,
            stock_history: vec![initial_stock],
            cash_history: vec![initial_cash],
            wholesale_cost,
            retail_price,
            delivery_charge,
        })
    }

    pub fn wholesale_cost(&self) -> i64 {
        self.wholesale_cost
    }

    pub fn retail_price(&self) -> i64 {
        self.retail_price
    }

    pub fn delivery_charge(&self) -> i64 {
        self.delivery_charge
    }

    /// End-of-day figures for every recorded day, in day order. The entry
    /// for the current day reflects its balances so far.
    pub fn records(&self) -> impl Iterator<Item = DayRecord> + '_ {
        self.stock_history
            .iter()
            .zip(&self.cash_history)
            .enumerate()
            .map(|(i, (&stock, &cash))| DayRecord { day: i + 1, stock, cash })
    }

    /// Map a 1-based day number onto a history index, rejecting days the
    /// ledger has not recorded.
    fn day_index(&self, day: usize) -> Result<usize, WarehouseError> {
        if day == 0 || day > self.today {
            return Err(WarehouseError::OutOfRange { day, last: self.today });
        }
        Ok(day - 1)
    }
}

impl Ledger for WarehouseLedger {
    fn sell_items(&mut self, requested: i64) -> Result<bool, WarehouseError> {
        if requested < 0 {
            return Err(WarehouseError::invalid("cannot sell a negative number of items"));
        }
        let idx = self.today - 1;
        let sold = requested.min(self.stock_history[idx]);
        self.stock_history[idx] -= sold;
        self.cash_history[idx] += sold * self.retail_price;
        Ok(sold == requested)
    }

    fn buy_items(&mut self, requested: i64) -> Result<(), WarehouseError> {
        if requested < 0 {
            return Err(WarehouseError::invalid("cannot buy a negative number of items"));
        }
        // The truck rolls even for an empty order, so the surcharge always applies.
        let idx = self.today - 1;
        self.stock_history[idx] += requested;
        self.cash_history[idx] -= requested * self.wholesale_cost + self.delivery_charge;
        Ok(())
    }

    fn next_day(&mut self) {
        self.stock_history.push(self.stock_history[self.today - 1]);
        self.cash_history.push(self.cash_history[self.today - 1]);
        self.today += 1;
    }

    fn current_day(&self) -> usize {
        self.today
    }

    fn cash_available(&self) -> i64 {
        self.cash_history[self.today - 1]
    }

    fn cash_available_on(&self, day: usize) -> Result<i64, WarehouseError> {
        self.day_index(day).map(|i| self.cash_history[i])
    }

    fn in_stock(&self) -> i64 {
        self.stock_history[self.today - 1]
    }

    fn in_stock_on(&self, day: usize) -> Result<i64, WarehouseError> {
        self.day_index(day).map(|i| self.stock_history[i])
    }
}

impl fmt::Display for WarehouseLedger {
    /// One-line summary of the current day, trailing newline included — the
    /// display layer appends this string verbatim to its transcript.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Day {}: Cash reserve = ${}; Items in stock = {}",
            self.today,
            self.cash_history[self.today - 1],
            self.stock_history[self.today - 1],
        )
    }
}
