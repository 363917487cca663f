use crate::error::{BudgetError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::ops::Sub;

/// Represents a non-negative monetary amount.
///
/// This is a wrapper around `rust_decimal::Decimal` so income and category
/// allocations can never go below zero. Serialized as a plain JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            Err(BudgetError::Validation(
                "Amount must not be negative".to_string(),
            ))
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = BudgetError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_number(&self.0, serializer)
    }
}

/// Writes a decimal as a JSON number: integral values without a fraction
/// (`1000`, not `1000.0`), everything else as a float.
fn serialize_number<S>(value: &Decimal, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let normalized = value.normalize();
    if normalized.scale() == 0
        && let Some(integer) = normalized.to_i64()
    {
        return serializer.serialize_i64(integer);
    }
    match normalized.to_f64() {
        Some(float) => serializer.serialize_f64(float),
        None => Err(serde::ser::Error::custom("amount out of range")),
    }
}

impl Sub for Amount {
    type Output = Decimal;
    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

/// Formats an amount the way mutation responses report it: two decimal
/// places, halves rounded away from zero.
pub fn format_two_decimals(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// The budget of a single user.
///
/// `unallocated` always equals `income` minus the sum of all category
/// allocations and is never negative. Every mutation checks before it writes,
/// so a rejected operation leaves the record untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Budget {
    income: Amount,
    categories: BTreeMap<String, Amount>,
    #[serde(serialize_with = "serialize_number")]
    unallocated: Decimal,
}

impl Budget {
    pub fn new(income: Amount, categories: BTreeMap<String, Amount>) -> Result<Self> {
        // An allocation sum past Decimal::MAX is necessarily above income.
        let allocated = categories
            .values()
            .try_fold(Decimal::ZERO, |sum, amount| sum.checked_add(amount.value()))
            .filter(|allocated| *allocated <= income.value())
            .ok_or_else(|| {
                BudgetError::Validation("Total allocated amount exceeds income".to_string())
            })?;

        Ok(Self {
            income,
            categories,
            unallocated: income.value() - allocated,
        })
    }

    pub fn income(&self) -> Amount {
        self.income
    }

    pub fn categories(&self) -> &BTreeMap<String, Amount> {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<Amount> {
        self.categories.get(name).copied()
    }

    pub fn unallocated(&self) -> Decimal {
        self.unallocated
    }

    /// Sets `category` to `amount`, creating it if needed.
    ///
    /// Fails if the increase over the previous allocation is larger than the
    /// unallocated funds. Lowering an allocation always succeeds.
    pub fn update_category(&mut self, category: &str, amount: Amount) -> Result<CategoryUpdated> {
        let old_amount = self.category(category).unwrap_or(Amount::ZERO);
        let difference = amount - old_amount;

        if difference > self.unallocated {
            return Err(BudgetError::Validation(
                "Not enough unallocated funds for this update".to_string(),
            ));
        }

        self.categories.insert(category.to_string(), amount);
        self.unallocated -= difference;

        Ok(CategoryUpdated {
            message: "Category updated successfully".to_string(),
            updated_category: category.to_string(),
            new_amount: amount,
            new_unallocated: format_two_decimals(self.unallocated),
        })
    }
}

/// Confirmation returned by a successful `createBudget`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetCreated {
    pub message: String,
    pub unallocated: String,
}

impl BudgetCreated {
    pub fn for_budget(budget: &Budget) -> Self {
        Self {
            message: "Budget created successfully".to_string(),
            unallocated: format_two_decimals(budget.unallocated()),
        }
    }
}

/// Confirmation returned by a successful `updateCategory`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdated {
    pub message: String,
    pub updated_category: String,
    pub new_amount: Amount,
    pub new_unallocated: String,
}
