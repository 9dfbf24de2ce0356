/// Primitive scalar kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimType {
    Num,
    Bool,
}

/// A declared type: a primitive kind plus an optional single `[]` suffix.
/// Arrays never nest, so a flag is enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSpec {
    pub prim: PrimType,
    pub is_array: bool,
}

impl TypeSpec {
    pub fn scalar(prim: PrimType) -> Self {
        TypeSpec {
            prim,
            is_array: false,
        }
    }

    pub fn array(prim: PrimType) -> Self {
        TypeSpec {
            prim,
            is_array: true,
        }
    }
}

impl std::fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self.prim {
            PrimType::Num => "num",
            PrimType::Bool => "bool",
        };
        if self.is_array {
            write!(f, "{}[]", name)
        } else {
            write!(f, "{}", name)
        }
    }
}
