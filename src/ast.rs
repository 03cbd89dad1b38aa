use std::fmt;

/// An abstract syntax tree (AST) node representing an expression.
///
/// The variant set is closed: it mirrors the grammar exactly. Composite nodes
/// own their children, so a tree is built once by the parser and only read
/// afterwards. Nodes carry no source positions; two texts that differ only in
/// whitespace produce equal trees.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric constant. Literals are always read as `f64`.
    Literal {
        /// The constant value.
        value: f64,
    },
    /// Reference to a value binding by name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A unary sign operation.
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Function call expression (e.g. `sin(x)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, in source order.
        arguments: Vec<Self>,
    },
}

impl Expr {
    /// Builds a literal node.
    #[must_use]
    pub const fn literal(value: f64) -> Self {
        Self::Literal { value }
    }

    /// Builds a variable reference node.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name: name.into() }
    }

    /// Builds a unary operation node.
    #[must_use]
    pub fn unary(op: UnaryOperator, expr: Self) -> Self {
        Self::UnaryOp { op,
                        expr: Box::new(expr) }
    }

    /// Builds a binary operation node.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Builds a function call node.
    pub fn call(name: impl Into<String>, arguments: Vec<Self>) -> Self {
        Self::FunctionCall { name: name.into(),
                             arguments }
    }
}

/// Renders the expression fully parenthesized, so the grouping chosen by the
/// parser is visible.
///
/// # Example
/// ```
/// let ast = tally::parse("10 - 3 - 2").unwrap();
/// assert_eq!(ast.to_string(), "(10 - (3 - 2))");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value } => write!(f, "{value}"),
            Self::Variable { name } => write!(f, "{name}"),
            Self::UnaryOp { op, expr } => write!(f, "{op}({expr})"),
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::FunctionCall { name, arguments } => {
                write!(f, "{name}(")?;

                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{argument}")?;
                }

                write!(f, ")")
            },
        }
    }
}

/// Represents a binary operator.
///
/// All binary operators share a single precedence level and associate to the
/// right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
    /// Division (`/`).
    Div,
    /// Truncating remainder (`%`).
    Mod,
}

impl BinaryOperator {
    /// The source character of this operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Mod => '%',
        }
    }
}

impl TryFrom<char> for BinaryOperator {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Sub),
            '*' => Ok(Self::Mul),
            '/' => Ok(Self::Div),
            '%' => Ok(Self::Mod),
            other => Err(other),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Represents a unary sign operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `+`, the identity.
    Plus,
    /// `-`, negation.
    Negate,
}

impl UnaryOperator {
    /// The source character of this operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Negate => '-',
        }
    }
}

impl TryFrom<char> for UnaryOperator {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Self::Plus),
            '-' => Ok(Self::Negate),
            other => Err(other),
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
