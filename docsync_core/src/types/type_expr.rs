use serde::{Deserialize, Serialize};

/// A resolved field type, independent of the language it is rendered in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeExpr {
    /// 32-bit signed integer
    Int,
    /// 64-bit signed integer
    Long,
    Boolean,
    /// Double-precision floating point
    Double,
    List(Box<TypeExpr>),
    /// Reference to another declaration (or a target-language builtin such as `String`)
    Named(String),
}

impl TypeExpr {
    pub fn list(inner: TypeExpr) -> Self {
        TypeExpr::List(Box::new(inner))
    }

    pub fn named(name: impl Into<String>) -> Self {
        TypeExpr::Named(name.into())
    }

    /// Number of `List` layers wrapping the element type.
    pub fn list_depth(&self) -> usize {
        match self {
            TypeExpr::List(inner) => 1 + inner.list_depth(),
            _ => 0,
        }
    }

    /// The innermost non-list type.
    pub fn element(&self) -> &TypeExpr {
        match self {
            TypeExpr::List(inner) => inner.element(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_depth_and_element() {
        let nested = TypeExpr::list(TypeExpr::list(TypeExpr::Int));
        assert_eq!(nested.list_depth(), 2);
        assert_eq!(nested.element(), &TypeExpr::Int);

        let named = TypeExpr::named("PhotoSize");
        assert_eq!(named.list_depth(), 0);
        assert_eq!(named.element(), &TypeExpr::Named("PhotoSize".to_string()));
    }
}
