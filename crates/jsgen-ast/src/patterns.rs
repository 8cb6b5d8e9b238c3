//! Binding and assignment targets.

use serde::{Deserialize, Serialize};

use crate::expressions::{Expression, Identifier, PropertyKey};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Pattern {
    /// `a`
    Identifier(Identifier),
    /// `{ a, b: c, ...rest }`
    Object { properties: Vec<ObjectPatternMember> },
    /// `[a, , ...rest]`; `None` is an elision
    Array { elements: Vec<Option<Pattern>> },
    /// `target = default`
    Assignment {
        left: Box<Pattern>,
        right: Box<Expression>,
    },
    /// `...argument`, last in its list
    Rest { argument: Box<Pattern> },
    /// Member access target in assignments and `for-in`/`for-of` heads
    Expression(Box<Expression>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObjectPatternMember {
    Property {
        key: PropertyKey,
        value: Pattern,
        #[serde(default)]
        shorthand: bool,
    },
    Rest { argument: Pattern },
}

impl From<Expression> for Pattern {
    fn from(expression: Expression) -> Self {
        match expression {
            Expression::Identifier(id) => Self::Identifier(id),
            other => Self::Expression(Box::new(other)),
        }
    }
}

impl From<Identifier> for Pattern {
    fn from(id: Identifier) -> Self {
        Self::Identifier(id)
    }
}
