//! Static column configuration for the users table.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::BusinessError;
use crate::user::User;

/// A displayable, sortable field of [`User`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    Name,
    Email,
    Username,
    Phone,
    Website,
}

impl Column {
    /// Key used for this column in query strings.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Email => "email",
            Self::Username => "username",
            Self::Phone => "phone",
            Self::Website => "website",
        }
    }

    /// Compares two users on this column using the raw ordering of the field.
    pub fn compare(self, a: &User, b: &User) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Name => a.name.cmp(&b.name),
            Self::Email => a.email.cmp(&b.email),
            Self::Username => a.username.cmp(&b.username),
            Self::Phone => a.phone.cmp(&b.phone),
            Self::Website => a.website.cmp(&b.website),
        }
    }

    /// Raw cell text for this column.
    pub fn cell(self, user: &User) -> Cow<'_, str> {
        match self {
            Self::Id => Cow::Owned(user.id.to_string()),
            Self::Name => Cow::Borrowed(&user.name),
            Self::Email => Cow::Borrowed(&user.email),
            Self::Username => Cow::Borrowed(&user.username),
            Self::Phone => Cow::Borrowed(&user.phone),
            Self::Website => Cow::Borrowed(&user.website),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Column {
    type Err = BusinessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        COLUMNS
            .iter()
            .map(|descriptor| descriptor.column)
            .find(|column| column.key() == s)
            .ok_or_else(|| BusinessError::UnknownColumn(s.to_owned()))
    }
}

/// The fields that carry a search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Name,
    Email,
}

impl SearchField {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
        }
    }
}

impl FromStr for SearchField {
    type Err = BusinessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            other => Err(BusinessError::UnknownSearchField(other.to_owned())),
        }
    }
}

/// Display metadata for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub column: Column,
    pub label: &'static str,
    /// Present when the header renders a search box bound to this field.
    pub search: Option<SearchField>,
}

impl ColumnDescriptor {
    const fn plain(column: Column, label: &'static str) -> Self {
        Self {
            column,
            label,
            search: None,
        }
    }

    const fn searchable(column: Column, label: &'static str, field: SearchField) -> Self {
        Self {
            column,
            label,
            search: Some(field),
        }
    }

    /// Placeholder text of the search box, e.g. `Search by Name`.
    pub fn placeholder(&self) -> String {
        format!("Search by {}", self.label)
    }
}

/// Columns in display order.
pub const COLUMNS: [ColumnDescriptor; 6] = [
    ColumnDescriptor::plain(Column::Id, "Id"),
    ColumnDescriptor::searchable(Column::Name, "Name", SearchField::Name),
    ColumnDescriptor::searchable(Column::Email, "Email", SearchField::Email),
    ColumnDescriptor::plain(Column::Username, "Username"),
    ColumnDescriptor::plain(Column::Phone, "Phone"),
    ColumnDescriptor::plain(Column::Website, "Website"),
];

/// Sort column of a fresh view.
pub const DEFAULT_SORT_COLUMN: Column = Column::Id;
