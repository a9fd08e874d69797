use std::fmt::Display;

/// The scalar types of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardType {
    Integer,
    Real,
    Boolean,
}

impl Display for StandardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StandardType::Integer => write!(f, "integer"),
            StandardType::Real => write!(f, "real"),
            StandardType::Boolean => write!(f, "boolean"),
        }
    }
}

/// Type of a variable, parameter or function result.
///
/// Array bounds are kept as written. `lower_bound <= upper_bound` is not
/// checked here; that belongs to semantic analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Standard(StandardType),
    Array {
        lower_bound: i64,
        upper_bound: i64,
        element_type: StandardType,
    },
}

impl Type {
    /// The scalar type stored by this type: itself, or the array's elements.
    pub fn element_type(&self) -> StandardType {
        match self {
            Type::Standard(standard) => *standard,
            Type::Array { element_type, .. } => *element_type,
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Standard(standard) => write!(f, "{}", standard),
            Type::Array {
                lower_bound,
                upper_bound,
                element_type,
            } => write!(f, "array[{}..{}] of {}", lower_bound, upper_bound, element_type),
        }
    }
}
