//! Payroll categories and their resolution order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A payroll category (e.g. teaching, administration).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollType {
    /// Unique code of the payroll type.
    pub code: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Position in which this category is resolved; lower values first.
    pub saldo_resolving_order: i32,
    /// Whether values of this category are expressed in lessons and need the divisor table.
    #[serde(default)]
    pub lesson_based: bool,
}

/// The payroll types of a configuration, held in resolution order.
///
/// The order is computed once on construction (ascending
/// `saldo_resolving_order`, ties by code) and handed to the resolver as is.
///
/// # Example
///
/// ```
/// use workload_engine::models::{PayrollType, PayrollTypes};
///
/// let types = PayrollTypes::new(vec![
///     PayrollType { code: "admin".into(), description: String::new(), saldo_resolving_order: 20, lesson_based: false },
///     PayrollType { code: "teaching".into(), description: String::new(), saldo_resolving_order: 10, lesson_based: true },
/// ])?;
/// let order: Vec<&str> = types.resolution_order().iter().map(|t| t.code.as_str()).collect();
/// assert_eq!(order, vec!["teaching", "admin"]);
/// # Ok::<(), workload_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PayrollTypes {
    ordered: Vec<PayrollType>,
    index: HashMap<String, usize>,
}

impl PayrollTypes {
    /// Creates the registry, sorting the types into resolution order.
    ///
    /// Returns [`EngineError::DuplicatePayrollType`] if two types share a code.
    pub fn new(types: Vec<PayrollType>) -> EngineResult<Self> {
        let mut by_code: HashMap<String, PayrollType> = HashMap::new();
        for payroll_type in types {
            if by_code.contains_key(&payroll_type.code) {
                return Err(EngineError::DuplicatePayrollType {
                    code: payroll_type.code,
                });
            }
            by_code.insert(payroll_type.code.clone(), payroll_type);
        }
        let mut ordered: Vec<PayrollType> = by_code.into_values().collect();
        ordered.sort_by(|a, b| {
            a.saldo_resolving_order
                .cmp(&b.saldo_resolving_order)
                .then_with(|| a.code.cmp(&b.code))
        });
        let index = ordered
            .iter()
            .enumerate()
            .map(|(i, t)| (t.code.clone(), i))
            .collect();
        Ok(Self { ordered, index })
    }

    /// Returns the payroll types in ascending resolution order.
    pub fn resolution_order(&self) -> &[PayrollType] {
        &self.ordered
    }

    /// Looks up a payroll type by code.
    pub fn get(&self, code: &str) -> Option<&PayrollType> {
        self.index.get(code).map(|&i| &self.ordered[i])
    }

    /// Returns true if the code names a known payroll type.
    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payroll_type(code: &str, order: i32, lesson_based: bool) -> PayrollType {
        PayrollType {
            code: code.to_string(),
            description: code.to_uppercase(),
            saldo_resolving_order: order,
            lesson_based,
        }
    }

    #[test]
    fn test_resolution_order_is_ascending() {
        let types = PayrollTypes::new(vec![
            payroll_type("pool", 30, false),
            payroll_type("teaching", 10, true),
            payroll_type("class", 20, true),
        ])
        .unwrap();
        let order: Vec<&str> = types
            .resolution_order()
            .iter()
            .map(|t| t.code.as_str())
            .collect();
        assert_eq!(order, vec!["teaching", "class", "pool"]);
    }

    #[test]
    fn test_equal_order_falls_back_to_code() {
        let types = PayrollTypes::new(vec![
            payroll_type("b", 10, false),
            payroll_type("a", 10, false),
        ])
        .unwrap();
        assert_eq!(types.resolution_order()[0].code, "a");
    }

    #[test]
    fn test_lookup_by_code() {
        let types = PayrollTypes::new(vec![payroll_type("teaching", 10, true)]).unwrap();
        assert!(types.get("teaching").unwrap().lesson_based);
        assert!(types.contains("teaching"));
        assert!(types.get("missing").is_none());
    }

    #[test]
    fn test_duplicate_payroll_type_is_rejected() {
        let result = PayrollTypes::new(vec![
            payroll_type("teaching", 10, true),
            payroll_type("admin", 20, false),
            payroll_type("teaching", 30, true),
        ]);
        match result {
            Err(EngineError::DuplicatePayrollType { code }) => assert_eq!(code, "teaching"),
            other => panic!("Expected DuplicatePayrollType, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_payroll_type_defaults() {
        let yaml = "code: admin\nsaldo_resolving_order: 40\n";
        let payroll_type: PayrollType = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(payroll_type.code, "admin");
        assert!(!payroll_type.lesson_based);
        assert!(payroll_type.description.is_empty());
    }
}
