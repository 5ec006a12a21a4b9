//! Search and sort selection of a users table view.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::column::{Column, DEFAULT_SORT_COLUMN, SearchField};
use crate::error::BusinessError;
use crate::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Header indicator for the active sort column.
    pub const fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }

    /// Orients a natural-order comparison.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = BusinessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            other => Err(BusinessError::UnknownDirection(other.to_owned())),
        }
    }
}

/// Everything that decides which rows are visible and in which order.
///
/// A fresh state sorts by [`DEFAULT_SORT_COLUMN`] ascending with both search
/// strings empty. There is no unsorted state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewState {
    search_name: String,
    search_email: String,
    sort_column: Column,
    sort_direction: SortDirection,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_name: String::new(),
            search_email: String::new(),
            sort_column: DEFAULT_SORT_COLUMN,
            sort_direction: SortDirection::Ascending,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a state with an explicit sort selection.
    pub fn sorted_by(mut self, column: Column, direction: SortDirection) -> Self {
        self.sort_column = column;
        self.sort_direction = direction;
        self
    }

    /// Builds a state with a search string set.
    pub fn searching(mut self, field: SearchField, value: impl Into<String>) -> Self {
        self.set_search(field, value);
        self
    }

    pub fn sort_column(&self) -> Column {
        self.sort_column
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn search(&self, field: SearchField) -> &str {
        match field {
            SearchField::Name => &self.search_name,
            SearchField::Email => &self.search_email,
        }
    }

    /// Stores the raw input value for `field`. No trimming.
    pub fn set_search(&mut self, field: SearchField, value: impl Into<String>) {
        let value = value.into();
        match field {
            SearchField::Name => self.search_name = value,
            SearchField::Email => self.search_email = value,
        }
    }

    /// Applies a click on the header of `column`.
    ///
    /// Clicking the active column flips the direction. Clicking any other
    /// column selects it in ascending order.
    pub fn click_header(&mut self, column: Column) {
        if self.sort_column == column {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_column = column;
            self.sort_direction = SortDirection::Ascending;
        }
    }

    /// The state a click on `column` would lead to.
    pub fn after_click(&self, column: Column) -> Self {
        let mut next = self.clone();
        next.click_header(column);
        next
    }

    /// Case-insensitive substring match on name and email.
    pub fn matches(&self, user: &User) -> bool {
        Filter::new(self).matches(user)
    }

    /// Orders two users by the active column and direction.
    pub fn compare(&self, a: &User, b: &User) -> Ordering {
        self.sort_direction.apply(self.sort_column.compare(a, b))
    }
}

/// Search strings lower-cased once per derivation.
pub(crate) struct Filter {
    name: String,
    email: String,
}

impl Filter {
    pub(crate) fn new(state: &ViewState) -> Self {
        Self {
            name: state.search_name.to_lowercase(),
            email: state.search_email.to_lowercase(),
        }
    }

    pub(crate) fn matches(&self, user: &User) -> bool {
        user.name.to_lowercase().contains(&self.name)
            && user.email.to_lowercase().contains(&self.email)
    }
}
