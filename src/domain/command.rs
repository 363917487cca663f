use super::budget::Amount;
use crate::error::{BudgetError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;

const ACTIONS: [&str; 3] = ["createBudget", "getBudget", "updateCategory"];

/// A state-mutating request, decoded from the JSON carried by an advance payload.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum AdvanceCommand {
    CreateBudget {
        user_id: String,
        income: Amount,
        #[serde(default)]
        categories: BTreeMap<String, Amount>,
    },
    GetBudget {
        user_id: String,
    },
    UpdateCategory {
        user_id: String,
        category: String,
        amount: Amount,
    },
}

impl FromStr for AdvanceCommand {
    type Err = BudgetError;

    /// Parses the decoded payload text.
    ///
    /// Unparsable JSON is a decode error, an unknown or missing `action` is an
    /// invalid action, and a known action with missing or ill-typed fields is
    /// a validation error.
    fn from_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;

        let action = value.get("action").and_then(Value::as_str).unwrap_or_default();
        if !ACTIONS.contains(&action) {
            return Err(BudgetError::InvalidAction(action.to_string()));
        }

        serde_json::from_value(value).map_err(|e| BudgetError::Validation(e.to_string()))
    }
}

/// A read-only query, decoded from the plain-text route of an inspect payload.
#[derive(Debug, PartialEq, Clone)]
pub enum InspectRoute {
    ListAllBudgets,
    BudgetDetails { user_id: String },
}

impl FromStr for InspectRoute {
    type Err = BudgetError;

    fn from_str(route: &str) -> Result<Self> {
        if route == "listAllBudgets" {
            return Ok(InspectRoute::ListAllBudgets);
        }

        match route.strip_prefix("getBudgetDetails/") {
            Some("") => Err(BudgetError::Validation("User ID is required".to_string())),
            Some(user_id) => Ok(InspectRoute::BudgetDetails {
                user_id: user_id.to_string(),
            }),
            None => Err(BudgetError::InvalidRoute(route.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_create_budget() {
        let text = r#"{"action":"createBudget","userId":"u1","income":1000,"categories":{"food":200,"rent":500.5}}"#;
        let command: AdvanceCommand = text.parse().unwrap();

        match command {
            AdvanceCommand::CreateBudget {
                user_id,
                income,
                categories,
            } => {
                assert_eq!(user_id, "u1");
                assert_eq!(income.value(), dec!(1000));
                assert_eq!(categories["rent"].value(), dec!(500.5));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_update_category() {
        let text = r#"{"action":"updateCategory","userId":"u1","category":"food","amount":250}"#;
        assert_eq!(
            text.parse::<AdvanceCommand>().unwrap(),
            AdvanceCommand::UpdateCategory {
                user_id: "u1".to_string(),
                category: "food".to_string(),
                amount: Amount::new(dec!(250)).unwrap(),
            }
        );
    }

    #[test]
    fn test_parse_unknown_action() {
        let result = r#"{"action":"deleteBudget","userId":"u1"}"#.parse::<AdvanceCommand>();
        assert!(matches!(result, Err(BudgetError::InvalidAction(a)) if a == "deleteBudget"));

        let result = r#"{"userId":"u1"}"#.parse::<AdvanceCommand>();
        assert!(matches!(result, Err(BudgetError::InvalidAction(_))));
    }

    #[test]
    fn test_parse_missing_field_is_validation_error() {
        let result = r#"{"action":"getBudget"}"#.parse::<AdvanceCommand>();
        assert!(matches!(result, Err(BudgetError::Validation(_))));
    }

    #[test]
    fn test_parse_negative_amount_is_validation_error() {
        let text = r#"{"action":"updateCategory","userId":"u1","category":"food","amount":-5}"#;
        assert!(matches!(
            text.parse::<AdvanceCommand>(),
            Err(BudgetError::Validation(_))
        ));
    }

    #[test]
    fn test_parse_malformed_json() {
        assert!(matches!(
            "not json".parse::<AdvanceCommand>(),
            Err(BudgetError::Decode(_))
        ));
    }

    #[test]
    fn test_parse_routes() {
        assert_eq!(
            "listAllBudgets".parse::<InspectRoute>().unwrap(),
            InspectRoute::ListAllBudgets
        );
        assert_eq!(
            "getBudgetDetails/u1".parse::<InspectRoute>().unwrap(),
            InspectRoute::BudgetDetails {
                user_id: "u1".to_string()
            }
        );
        // Everything after the first slash is the user id.
        assert_eq!(
            "getBudgetDetails/team/alice".parse::<InspectRoute>().unwrap(),
            InspectRoute::BudgetDetails {
                user_id: "team/alice".to_string()
            }
        );
        assert!(matches!(
            "getBudgetDetails/".parse::<InspectRoute>(),
            Err(BudgetError::Validation(_))
        ));
        assert!(matches!(
            "listAll".parse::<InspectRoute>(),
            Err(BudgetError::InvalidRoute(_))
        ));
    }
}
