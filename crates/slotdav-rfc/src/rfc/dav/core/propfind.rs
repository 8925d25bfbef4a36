//! What a PROPFIND body asks for.

use super::namespace::QName;

/// The property selection carried by a PROPFIND (or REPORT) request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropfindRequest {
    /// `<allprop/>`, optionally widened by `<include>`.
    AllProp { include: Vec<QName> },
    /// `<propname/>`: names without values.
    PropName,
    /// `<prop>` with an explicit list.
    Prop(Vec<QName>),
}

impl PropfindRequest {
    #[must_use]
    pub const fn allprop() -> Self {
        Self::AllProp {
            include: Vec::new(),
        }
    }

    #[must_use]
    pub const fn prop(names: Vec<QName>) -> Self {
        Self::Prop(names)
    }

    /// Explicitly named properties, if this is a `<prop>` request.
    #[must_use]
    pub fn requested_properties(&self) -> Option<&[QName]> {
        if let Self::Prop(names) = self {
            Some(names)
        } else {
            None
        }
    }

    /// Whether an `allprop` answer should carry `name` even though it is not
    /// part of the default set.
    #[must_use]
    pub fn includes(&self, name: &QName) -> bool {
        match self {
            Self::AllProp { include } => include.contains(name),
            Self::Prop(names) => names.contains(name),
            Self::PropName => false,
        }
    }
}

impl Default for PropfindRequest {
    fn default() -> Self {
        Self::allprop()
    }
}
