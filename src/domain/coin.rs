use crate::error::{Result, VendingError};
use std::fmt;
use std::str::FromStr;

/// The closed set of coin values a machine accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denominations(Vec<i64>);

impl Denominations {
    pub fn new(values: impl IntoIterator<Item = i64>) -> Result<Self> {
        let mut values: Vec<i64> = values.into_iter().collect();
        values.sort_unstable();
        values.dedup();

        if values.is_empty() {
            return Err(VendingError::Validation(
                "At least one denomination must be accepted".to_string(),
            ));
        }
        if let Some(bad) = values.iter().find(|v| **v <= 0) {
            return Err(VendingError::Validation(format!(
                "Denominations must be positive, got {}",
                bad
            )));
        }
        Ok(Self(values))
    }

    pub fn accepts(&self, coin: i64) -> bool {
        self.0.binary_search(&coin).is_ok()
    }

    pub fn values(&self) -> &[i64] {
        &self.0
    }

    /// Validates the inserted coins in order and returns their total.
    ///
    /// Fails on the first coin outside the accepted set. An empty slice is
    /// valid and totals zero.
    pub fn validate(&self, coins: &[i64]) -> Result<i64> {
        let mut total: i64 = 0;
        for &coin in coins {
            if !self.accepts(coin) {
                return Err(VendingError::InvalidDenomination(coin));
            }
            total = total.checked_add(coin).ok_or_else(|| {
                VendingError::Validation("Inserted money total overflows".to_string())
            })?;
        }
        Ok(total)
    }
}

impl Default for Denominations {
    fn default() -> Self {
        Self(vec![2000, 5000])
    }
}

impl FromStr for Denominations {
    type Err = VendingError;

    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<i64>().map_err(|_| {
                    VendingError::Validation(format!("Invalid denomination value: {}", part))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(values)
    }
}

impl fmt::Display for Denominations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(i64::to_string).collect();
        write!(f, "{}", parts.join(","))
    }
}
