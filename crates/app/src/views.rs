//! List view state

use serde::Serialize;

/// What a list view shows. Exactly one state applies at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum ListState<T> {
    Loading,
    Error(String),
    Empty,
    Content(Vec<T>),
}

impl<T> ListState<T> {
    /// Pick the state for a view: loading wins over an error, an error over
    /// an empty list.
    #[must_use]
    pub fn resolve(loading: bool, error: Option<String>, items: Vec<T>) -> Self {
        if loading {
            return Self::Loading;
        }

        if let Some(message) = error {
            return Self::Error(message);
        }

        if items.is_empty() {
            Self::Empty
        } else {
            Self::Content(items)
        }
    }

    /// State for a finished load.
    #[must_use]
    pub fn loaded<E: ToString>(result: Result<Vec<T>, E>) -> Self {
        match result {
            Ok(items) => Self::resolve(false, None, items),
            Err(error) => Self::resolve(false, Some(error.to_string()), Vec::new()),
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Error(_) => "error",
            Self::Empty => "empty",
            Self::Content(_) => "content",
        }
    }

    /// Items on show; empty for every state but [`ListState::Content`].
    #[must_use]
    pub fn items(&self) -> &[T] {
        match self {
            Self::Content(items) => items.as_slice(),
            _ => &[],
        }
    }
}

/// Sum of `prices` in cents, or `None` when it does not fit in a `u64`.
#[must_use]
pub fn sum_cents<I: IntoIterator<Item = u64>>(prices: I) -> Option<u64> {
    prices
        .into_iter()
        .try_fold(0_u64, |total, price| total.checked_add(price))
}

/// Render cents as a dollar amount, e.g. `$1,250.00`.
#[must_use]
pub fn format_money(cents: u64) -> String {
    let dollars = (cents / 100).to_string();
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);

    for (index, digit) in dollars.chars().enumerate() {
        if index > 0 && (dollars.len() - index) % 3 == 0 {
            grouped.push(',');
        }

        grouped.push(digit);
    }

    format!("${grouped}.{:02}", cents % 100)
}
