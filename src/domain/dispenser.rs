use super::product::Product;
use crate::error::{Result, VendingError};
use std::fmt;
use tracing::{debug, warn};

/// One distinct product picked during a purchase and how many units of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseLine {
    pub quantity: u64,
    pub name: String,
}

impl fmt::Display for PurchaseLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.name)
    }
}

/// Outcome of a successful greedy pass, lines in selection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purchase {
    pub lines: Vec<PurchaseLine>,
    pub spent: i64,
    pub change: i64,
}

impl Purchase {
    /// Display strings of the form `"<quantity> <name>"`.
    pub fn display_lines(&self) -> Vec<String> {
        self.lines.iter().map(ToString::to_string).collect()
    }
}

/// Spends `total` on the catalog, most expensive products first.
///
/// The walk is a single forward pass over the price-descending catalog: once
/// the pass moves past a product it never comes back to it, so money can be
/// left over even when some cheaper combination would have used it.
/// Equal prices keep their catalog order.
pub fn dispense(total: i64, catalog: &[Product]) -> Result<Purchase> {
    let mut sorted: Vec<&Product> = catalog.iter().collect();
    sorted.sort_by(|a, b| b.price.cmp(&a.price));

    let mut balance = total;
    let mut lines: Vec<PurchaseLine> = Vec::new();

    for product in sorted {
        // A non-positive price would never bring the balance down.
        if product.price <= 0 {
            warn!(name = %product.name, price = product.price, "skipping unsellable product");
            continue;
        }

        let units = balance / product.price;
        if units <= 0 {
            continue;
        }
        let quantity = units.unsigned_abs();
        balance -= units * product.price;
        debug!(name = %product.name, quantity, balance, "selected product");

        // Names are unique keys, but a snapshot from a loose store may repeat one.
        match lines.iter_mut().find(|line| line.name == product.name) {
            Some(line) => line.quantity += quantity,
            None => lines.push(PurchaseLine {
                quantity,
                name: product.name.clone(),
            }),
        }
    }

    if lines.is_empty() {
        return Err(VendingError::InsufficientFunds);
    }

    Ok(Purchase {
        lines,
        spent: total - balance,
        change: balance,
    })
}
