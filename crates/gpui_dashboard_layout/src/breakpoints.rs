use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::BreakpointError;

/// Bucket active below the smallest declared breakpoint.
pub const BASE: &str = "base";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub name: String,
    /// Smallest viewport width, in pixels, at which this breakpoint is active.
    pub min_width: f32,
}

impl Breakpoint {
    pub fn new(name: impl Into<String>, min_width: f32) -> Self {
        Self {
            name: name.into(),
            min_width,
        }
    }
}

/// Breakpoints ordered ascending by boundary, with an implicit `base` bucket
/// below the first one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "IndexMap<String, f32>", into = "IndexMap<String, f32>")]
pub struct Breakpoints {
    entries: SmallVec<[Breakpoint; 6]>,
}

impl Breakpoints {
    /// Sorts the given breakpoints by boundary and checks they form a valid set.
    ///
    /// A `base` entry is accepted only at 0px and is folded into the implicit bucket.
    pub fn new(breakpoints: impl IntoIterator<Item = Breakpoint>) -> Result<Self, BreakpointError> {
        let mut entries = SmallVec::<[Breakpoint; 6]>::new();

        for breakpoint in breakpoints {
            if breakpoint.name.trim().is_empty() {
                return Err(BreakpointError::EmptyName);
            }

            if !breakpoint.min_width.is_finite() || breakpoint.min_width < 0. {
                return Err(BreakpointError::InvalidBoundary {
                    name: breakpoint.name,
                    min_width: breakpoint.min_width,
                });
            }

            if breakpoint.name == BASE {
                if breakpoint.min_width != 0. {
                    return Err(BreakpointError::BaseBoundary {
                        min_width: breakpoint.min_width,
                    });
                }
                continue;
            }

            if entries.iter().any(|entry| entry.name == breakpoint.name) {
                return Err(BreakpointError::DuplicateName {
                    name: breakpoint.name,
                });
            }

            entries.push(breakpoint);
        }

        entries.sort_by(|a, b| a.min_width.total_cmp(&b.min_width));

        if let Some(pair) = entries
            .windows(2)
            .find(|pair| pair[0].min_width == pair[1].min_width)
        {
            return Err(BreakpointError::SharedBoundary {
                lower: pair[0].name.clone(),
                upper: pair[1].name.clone(),
                min_width: pair[0].min_width,
            });
        }

        Ok(Self { entries })
    }

    /// Declared breakpoints, ascending. Doesn't include `base`.
    pub fn iter(&self) -> impl Iterator<Item = &Breakpoint> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rank(name).is_some()
    }

    /// Name of the largest breakpoint whose boundary is at most `width_px`,
    /// or [`BASE`] if there is none. `NaN` classifies as [`BASE`].
    pub fn classify(&self, width_px: f32) -> &str {
        let mut active: &str = BASE;

        for breakpoint in &self.entries {
            if breakpoint.min_width <= width_px {
                active = breakpoint.name.as_str();
            } else {
                break;
            }
        }

        active
    }

    /// Position in boundary order, with `base` at 0.
    pub fn rank(&self, name: &str) -> Option<usize> {
        if name == BASE {
            return Some(0);
        }

        self.entries
            .iter()
            .position(|entry| entry.name == name)
            .map(|index| index + 1)
    }

    /// `active` followed by every smaller breakpoint, ending at `base`.
    ///
    /// An unknown `active` is only followed by `base`.
    pub fn cascade<'a>(&'a self, active: &'a str) -> SmallVec<[&'a str; 8]> {
        let mut names = SmallVec::new();
        names.push(active);

        if active == BASE {
            return names;
        }

        let below = self.rank(active).map_or(0, |rank| rank - 1);
        names.extend(self.entries[..below].iter().rev().map(|entry| entry.name.as_str()));
        names.push(BASE);
        names
    }
}

impl Default for Breakpoints {
    /// The design system's breakpoints: xs 36em, sm 48em, md 62em, lg 75em, xl 88em.
    fn default() -> Self {
        Self {
            entries: SmallVec::from_iter([
                Breakpoint::new("xs", 576.),
                Breakpoint::new("sm", 768.),
                Breakpoint::new("md", 992.),
                Breakpoint::new("lg", 1200.),
                Breakpoint::new("xl", 1408.),
            ]),
        }
    }
}

impl TryFrom<IndexMap<String, f32>> for Breakpoints {
    type Error = BreakpointError;

    fn try_from(value: IndexMap<String, f32>) -> Result<Self, Self::Error> {
        Self::new(
            value
                .into_iter()
                .map(|(name, min_width)| Breakpoint { name, min_width }),
        )
    }
}

impl From<Breakpoints> for IndexMap<String, f32> {
    fn from(value: Breakpoints) -> Self {
        value
            .entries
            .into_iter()
            .map(|entry| (entry.name, entry.min_width))
            .collect()
    }
}

pub fn classify_viewport(width_px: f32, breakpoints: &Breakpoints) -> &str {
    breakpoints.classify(width_px)
}
