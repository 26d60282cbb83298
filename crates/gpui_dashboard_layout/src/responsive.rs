use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::Breakpoints;

/// A value declared per breakpoint, e.g. `{ sm: 6, lg: 6.5 }`.
///
/// Lookups cascade: a breakpoint without its own value takes the value of the
/// nearest smaller breakpoint that has one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Responsive<T> {
    values: IndexMap<String, T>,
}

impl<T> Default for Responsive<T> {
    fn default() -> Self {
        Self {
            values: IndexMap::new(),
        }
    }
}

impl<T> Responsive<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, breakpoint: impl Into<String>, value: T) -> Self {
        self.values.insert(breakpoint.into(), value);
        self
    }

    pub fn get(&self, breakpoint: &str) -> Option<&T> {
        self.values.get(breakpoint)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn resolve<'a>(&'a self, breakpoints: &Breakpoints, active: &str) -> Option<&'a T> {
        for name in breakpoints.cascade(active) {
            if let Some(value) = self.values.get(name) {
                return Some(value);
            }
        }

        None
    }
}

impl<T: Copy> Responsive<T> {
    pub fn resolve_or(&self, breakpoints: &Breakpoints, active: &str, default: T) -> T {
        self.resolve(breakpoints, active).copied().unwrap_or(default)
    }
}

impl<S: Into<String>, T> FromIterator<(S, T)> for Responsive<T> {
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}
