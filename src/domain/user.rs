use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::{TypeConstraintError, UserId};

/// A listed user. Immutable once constructed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub first: String,
    pub last: String,
    pub handle: String,
}

impl User {
    #[must_use]
    pub fn new(
        id: UserId,
        first: impl Into<String>,
        last: impl Into<String>,
        handle: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first: first.into(),
            last: last.into(),
            handle: handle.into(),
        }
    }

    /// Returns the value of a searchable/sortable attribute.
    pub fn field(&self, field: UserField) -> &str {
        match field {
            UserField::First => &self.first,
            UserField::Last => &self.last,
            UserField::Handle => &self.handle,
        }
    }
}

/// String attributes of [`User`] that can be searched and sorted on.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserField {
    First,
    Last,
    Handle,
}

impl UserField {
    /// All fields in table display order.
    pub const ALL: [UserField; 3] = [UserField::First, UserField::Last, UserField::Handle];

    /// Name used in query parameters (`order=last`).
    pub const fn as_str(self) -> &'static str {
        match self {
            UserField::First => "first",
            UserField::Last => "last",
            UserField::Handle => "handle",
        }
    }

    /// Column heading shown in the table.
    pub const fn label(self) -> &'static str {
        match self {
            UserField::First => "First",
            UserField::Last => "Last",
            UserField::Handle => "Handle",
        }
    }
}

impl Display for UserField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserField {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| TypeConstraintError::InvalidValue(s.to_string()))
    }
}
