//! Helpers for building ql::ast types in certain shapes and patterns.

use super::ast::*;
use nonempty::NonEmpty;

// SELECTs //

/// Build a select with a single target expression.
pub fn simple_select(
    namespace: Option<Namespace>,
    target: Expression,
    filter: Option<Expression>,
) -> Select {
    Select {
        namespace,
        targets: NonEmpty::new(target),
        filter,
    }
}

/// Combine two queries with UNION.
pub fn union(left: Query, right: Query) -> Query {
    Query::SetOperation {
        left: Box::new(left),
        operator: SetOperator::Union,
        right: Box::new(right),
    }
}

/// Combine queries with UNION, left to right, so the first query ends up as the
/// innermost left operand.
pub fn union_queries(queries: impl IntoIterator<Item = Query>) -> Option<Query> {
    queries.into_iter().reduce(union)
}

// Shapes //

/// A path together with the shape selected from it.
pub fn shaped_path(path: Path, shape: Vec<ShapeElement>) -> Expression {
    Expression::ShapedPath { path, shape }
}

/// Select a link or property without a filter or a nested shape.
pub fn plain_element(link: impl Into<String>) -> ShapeElement {
    ShapeElement {
        link: link.into(),
        filter: None,
        shape: vec![],
    }
}

// Expressions //

/// A binary operation on two expressions.
pub fn binary_operation(left: Expression, operator: BinaryOperator, right: Expression) -> Expression {
    Expression::BinaryOperation {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }
}

/// Join expressions with AND, left-associatively. `None` when there are no expressions.
pub fn and_all(expressions: impl IntoIterator<Item = Expression>) -> Option<Expression> {
    expressions
        .into_iter()
        .reduce(|left, right| binary_operation(left, BinaryOperator::And, right))
}

/// A constant value.
pub fn value(value: Value) -> Expression {
    Expression::Constant(Constant::Value(value))
}

/// A reference to the value of a variable.
pub fn variable(name: impl Into<String>) -> Expression {
    Expression::Constant(Constant::Variable(name.into()))
}

/// An ordered sequence of expressions.
pub fn sequence(elements: Vec<Expression>) -> Expression {
    Expression::Sequence { elements }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(root: &str) -> Query {
        Query::Select(simple_select(
            None,
            shaped_path(Path::root(root), vec![plain_element("id")]),
            None,
        ))
    }

    #[test]
    fn test_and_all_is_left_associative() {
        let joined = and_all(vec![variable("a"), variable("b"), variable("c")]);
        assert_eq!(
            joined,
            Some(binary_operation(
                binary_operation(variable("a"), BinaryOperator::And, variable("b")),
                BinaryOperator::And,
                variable("c"),
            ))
        );
    }

    #[test]
    fn test_and_all_of_one_expression_is_that_expression() {
        assert_eq!(and_all(vec![variable("a")]), Some(variable("a")));
        assert_eq!(and_all(vec![]), None);
    }

    #[test]
    fn test_union_queries_keeps_order() {
        let query = union_queries(vec![select("A"), select("B"), select("C")]);
        assert_eq!(
            query,
            Some(union(union(select("A"), select("B")), select("C")))
        );
    }
}
