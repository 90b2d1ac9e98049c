//! 条件代数
//!
//! 条件是布尔值表达式。`and`/`or`/`xor`/`not` 总是返回新节点，不修改操作数；
//! 相同操作符的连续组合会被展平成一个复合条件。

use crate::core::error::ArgumentError;
use crate::core::types::expression::Expression;
use crate::core::types::operators::{LogicalOperator, Operator, OperatorInstance, OperatorType};
use crate::core::types::pattern::NodeLabel;
use crate::core::types::symbolic_name::SymbolicName;
use std::sync::Arc;

/// 布尔条件
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// 比较 `left op right`，后缀操作符没有右操作数
    Comparison(Comparison),

    /// `(a AND b AND c)`
    Compound(CompoundCondition),

    /// `NOT (a)`
    Not(Arc<Condition>),

    /// 标签谓词 `n:A:B`
    HasLabels(HasLabels),
}

/// 比较条件
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    left: Arc<Expression>,
    operator: OperatorInstance,
    right: Option<Arc<Expression>>,
}

impl Comparison {
    /// 创建比较条件并校验操作数
    ///
    /// 二元操作符需要左右两个操作数，后缀操作符只需要左操作数。
    pub fn create(
        left: Option<Expression>,
        operator: Option<OperatorInstance>,
        right: Option<Expression>,
    ) -> Result<Condition, ArgumentError> {
        let left = left.ok_or_else(|| ArgumentError::new("Left expression must not be null."))?;
        let operator = operator.ok_or_else(|| ArgumentError::new("Operator must not be empty."))?;

        let right = match operator.operator_type() {
            OperatorType::Postfix => {
                if right.is_some() {
                    return Err(ArgumentError::new(format!(
                        "Operator '{}' does not accept a right expression.",
                        operator.name()
                    )));
                }
                None
            }
            OperatorType::Binary => Some(
                right.ok_or_else(|| ArgumentError::new("Right expression must not be null."))?,
            ),
            _ => {
                return Err(ArgumentError::new(format!(
                    "Operator '{}' cannot be used in a comparison.",
                    operator.name()
                )))
            }
        };

        Ok(Condition::Comparison(Comparison {
            left: Arc::new(left),
            operator,
            right: right.map(Arc::new),
        }))
    }

    pub(crate) fn binary(
        left: Expression,
        operator: impl Into<OperatorInstance>,
        right: Expression,
    ) -> Condition {
        Condition::Comparison(Comparison {
            left: Arc::new(left),
            operator: operator.into(),
            right: Some(Arc::new(right)),
        })
    }

    pub(crate) fn postfix(left: Expression, operator: impl Into<OperatorInstance>) -> Condition {
        Condition::Comparison(Comparison {
            left: Arc::new(left),
            operator: operator.into(),
            right: None,
        })
    }

    pub fn left(&self) -> &Expression {
        &self.left
    }

    pub fn operator(&self) -> &OperatorInstance {
        &self.operator
    }

    pub fn right(&self) -> Option<&Expression> {
        self.right.as_deref()
    }
}

/// 复合条件，渲染时总是带括号
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundCondition {
    operator: LogicalOperator,
    conditions: Arc<[Condition]>,
}

impl CompoundCondition {
    pub fn operator(&self) -> &LogicalOperator {
        &self.operator
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }
}

/// 标签谓词
#[derive(Debug, Clone, PartialEq)]
pub struct HasLabels {
    name: SymbolicName,
    labels: Arc<[NodeLabel]>,
}

impl HasLabels {
    pub fn create(name: SymbolicName, labels: &[&str]) -> Result<Condition, ArgumentError> {
        if labels.is_empty() {
            return Err(ArgumentError::new("At least one label is required."));
        }
        let labels = labels
            .iter()
            .map(|label| NodeLabel::new(label))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Condition::HasLabels(HasLabels {
            name,
            labels: labels.into(),
        }))
    }

    pub fn name(&self) -> &SymbolicName {
        &self.name
    }

    pub fn labels(&self) -> &[NodeLabel] {
        &self.labels
    }
}

impl Condition {
    /// `self AND other`
    pub fn and(&self, other: Condition) -> Condition {
        self.compose(LogicalOperator::And, other)
    }

    /// `self OR other`
    pub fn or(&self, other: Condition) -> Condition {
        self.compose(LogicalOperator::Or, other)
    }

    /// `self XOR other`
    pub fn xor(&self, other: Condition) -> Condition {
        self.compose(LogicalOperator::Xor, other)
    }

    /// `NOT (self)`
    pub fn not(&self) -> Condition {
        Condition::Not(Arc::new(self.clone()))
    }

    fn compose(&self, operator: LogicalOperator, other: Condition) -> Condition {
        let mut conditions = match self {
            Condition::Compound(compound) if compound.operator == operator => {
                compound.conditions.to_vec()
            }
            _ => vec![self.clone()],
        };
        match other {
            Condition::Compound(compound) if compound.operator == operator => {
                conditions.extend(compound.conditions.iter().cloned())
            }
            other => conditions.push(other),
        }
        Condition::Compound(CompoundCondition {
            operator,
            conditions: conditions.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::literal::Literal;
    use crate::core::types::operators::{BinaryOperator, UnaryOperator};

    fn lit(value: i64) -> Expression {
        Expression::Literal(Literal::from(value))
    }

    fn cond(value: i64) -> Condition {
        Comparison::binary(lit(value), BinaryOperator::Equality, lit(value))
    }

    #[test]
    fn test_create_requires_left() {
        let error = Comparison::create(None, Some(BinaryOperator::Equality.into()), Some(lit(1)))
            .unwrap_err();
        assert_eq!(error.message(), "Left expression must not be null.");
    }

    #[test]
    fn test_create_requires_right() {
        let error = Comparison::create(Some(lit(1)), Some(BinaryOperator::Equality.into()), None)
            .unwrap_err();
        assert_eq!(error.message(), "Right expression must not be null.");
    }

    #[test]
    fn test_create_requires_operator() {
        let error = Comparison::create(Some(lit(1)), None, Some(lit(2))).unwrap_err();
        assert_eq!(error.message(), "Operator must not be empty.");
    }

    #[test]
    fn test_create_postfix() {
        let condition =
            Comparison::create(Some(lit(1)), Some(UnaryOperator::IsNull.into()), None).unwrap();
        match condition {
            Condition::Comparison(comparison) => assert!(comparison.right().is_none()),
            other => panic!("unexpected condition {:?}", other),
        }

        let error =
            Comparison::create(Some(lit(1)), Some(UnaryOperator::IsNull.into()), Some(lit(2)))
                .unwrap_err();
        assert_eq!(
            error.message(),
            "Operator 'IS NULL' does not accept a right expression."
        );
    }

    #[test]
    fn test_create_rejects_prefix_operator() {
        let error =
            Comparison::create(Some(lit(1)), Some(UnaryOperator::Not.into()), None).unwrap_err();
        assert_eq!(error.message(), "Operator 'NOT' cannot be used in a comparison.");
    }

    #[test]
    fn test_same_operator_is_flattened() {
        let combined = cond(1).and(cond(2)).and(cond(3));
        match combined {
            Condition::Compound(compound) => {
                assert_eq!(compound.operator(), &LogicalOperator::And);
                assert_eq!(compound.conditions().len(), 3);
            }
            other => panic!("unexpected condition {:?}", other),
        }
    }

    #[test]
    fn test_right_compound_with_same_operator_is_flattened() {
        let combined = cond(1).and(cond(2).and(cond(3)));
        match combined {
            Condition::Compound(compound) => assert_eq!(compound.conditions().len(), 3),
            other => panic!("unexpected condition {:?}", other),
        }
    }

    #[test]
    fn test_different_operator_nests() {
        let combined = cond(1).and(cond(2)).or(cond(3));
        match combined {
            Condition::Compound(compound) => {
                assert_eq!(compound.operator(), &LogicalOperator::Or);
                assert_eq!(compound.conditions().len(), 2);
                assert!(matches!(compound.conditions()[0], Condition::Compound(_)));
            }
            other => panic!("unexpected condition {:?}", other),
        }
    }

    #[test]
    fn test_composition_does_not_mutate_operands() {
        let base = cond(1).and(cond(2));
        let before = base.clone();
        let _ = base.and(cond(3));
        let _ = base.not();
        assert_eq!(base, before);
    }
}
