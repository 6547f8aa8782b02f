// Fill material accounting.
//
// The hole filler never touches the inventory itself. It reads the hotbar
// once per tick, counts the blocks the configured `BlockFilter` accepts, and
// turns that into a `FillBudget`. During smart selection a `BudgetLedger`
// tracks what is left so a hole is only claimed when it can be paid for in
// full. The actual debit happens in the placement executor.
//
// An unlimited budget (creative-style placement) accepts every claim and
// never exhausts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How `BlockFilter::blocks` is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterMode {
    /// Only listed blocks are usable.
    Whitelist,
    /// Every block except the listed ones is usable.
    Blacklist,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockFilter {
    pub mode: FilterMode,
    pub blocks: BTreeSet<String>,
}

impl BlockFilter {
    pub fn new<I, S>(mode: FilterMode, blocks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mode,
            blocks: blocks.into_iter().map(Into::into).collect(),
        }
    }

    pub fn accepts(&self, block: &str) -> bool {
        let listed = self.blocks.contains(block);
        match self.mode {
            FilterMode::Whitelist => listed,
            FilterMode::Blacklist => !listed,
        }
    }
}

/// One hotbar slot. `block` is `None` for empty slots and non-block items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotbarSlot {
    pub block: Option<String>,
    pub count: u32,
}

impl HotbarSlot {
    pub fn new(block: impl Into<String>, count: u32) -> Self {
        Self {
            block: Some(block.into()),
            count,
        }
    }

    pub fn empty() -> Self {
        Self {
            block: None,
            count: 0,
        }
    }
}

/// Total number of usable fill blocks across the hotbar.
pub fn available_units(slots: &[HotbarSlot], filter: &BlockFilter) -> u32 {
    slots
        .iter()
        .filter(|slot| slot.block.as_deref().is_some_and(|b| filter.accepts(b)))
        .fold(0u32, |acc, slot| acc.saturating_add(slot.count))
}

/// Units available to selection this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillBudget {
    pub available: u32,
    pub unlimited: bool,
}

impl FillBudget {
    pub const fn limited(available: u32) -> Self {
        Self {
            available,
            unlimited: false,
        }
    }

    pub const fn unlimited() -> Self {
        Self {
            available: 0,
            unlimited: true,
        }
    }

    /// True when a finite budget has nothing left to spend.
    pub fn is_empty(&self) -> bool {
        !self.unlimited && self.available == 0
    }
}

/// Remaining-budget counter for one selection pass.
#[derive(Clone, Copy, Debug)]
pub struct BudgetLedger {
    remaining: i64,
    unlimited: bool,
}

impl BudgetLedger {
    pub fn new(budget: FillBudget) -> Self {
        Self {
            remaining: i64::from(budget.available),
            unlimited: budget.unlimited,
        }
    }

    /// Deduct `cost` if the budget covers it in full. Unlimited budgets
    /// always accept.
    pub fn try_spend(&mut self, cost: u32) -> bool {
        if self.unlimited {
            return true;
        }
        let cost = i64::from(cost);
        if self.remaining < cost {
            return false;
        }
        self.remaining -= cost;
        true
    }

    pub fn is_exhausted(&self) -> bool {
        !self.unlimited && self.remaining <= 0
    }

    /// Units left, or `None` for an unlimited budget.
    pub fn remaining(&self) -> Option<u32> {
        if self.unlimited {
            None
        } else {
            Some(self.remaining.max(0) as u32)
        }
    }
}
