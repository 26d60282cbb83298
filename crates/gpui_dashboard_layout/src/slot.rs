use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

use crate::{Breakpoints, Grid, LayoutError, Responsive};

/// Identity of a layout slot. The content rendered into it is none of the
/// layout's business.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(String);

impl SlotId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SlotId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SlotId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// How many grid columns a slot occupies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotSpan {
    /// A fixed, possibly fractional, number of columns.
    Columns(f32),
    /// Whatever is left of the current row.
    Auto,
    /// Sized by its content.
    Content,
}

impl SlotSpan {
    pub fn columns(&self) -> Option<f32> {
        match self {
            Self::Columns(columns) => Some(*columns),
            Self::Auto | Self::Content => None,
        }
    }
}

impl fmt::Display for SlotSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Columns(columns) => write!(f, "{columns}"),
            Self::Auto => f.write_str("auto"),
            Self::Content => f.write_str("content"),
        }
    }
}

impl Serialize for SlotSpan {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Columns(columns) => serializer.serialize_f32(*columns),
            Self::Auto => serializer.serialize_str("auto"),
            Self::Content => serializer.serialize_str("content"),
        }
    }
}

impl<'de> Deserialize<'de> for SlotSpan {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let span = match StringOrFloat::deserialize(deserializer)? {
            StringOrFloat::Float(columns) => Self::Columns(columns),

            StringOrFloat::String(string) => match string.as_str() {
                "auto" => Self::Auto,
                "content" => Self::Content,
                other => match other.parse::<f32>() {
                    Ok(columns) => Self::Columns(columns),
                    Err(_) => {
                        return Err(D::Error::custom(
                            "expected a column count, 'auto' or 'content'",
                        ));
                    }
                },
            },
        };

        if let Self::Columns(columns) = span
            && (!columns.is_finite() || columns < 0.)
        {
            return Err(D::Error::custom("column spans can't be negative"));
        }

        Ok(span)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}

/// A placeholder position in the layout with per-breakpoint span and order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSlot {
    pub id: SlotId,
    pub span: Responsive<SlotSpan>,
    #[serde(default)]
    pub order: Responsive<i32>,
}

impl LayoutSlot {
    pub fn new(id: impl Into<SlotId>) -> Self {
        Self {
            id: id.into(),
            span: Responsive::new(),
            order: Responsive::new(),
        }
    }

    /// Sets a numeric span at `breakpoint`.
    pub fn span(mut self, breakpoint: impl Into<String>, columns: f32) -> Self {
        self.span = self.span.with(breakpoint, SlotSpan::Columns(columns));
        self
    }

    pub fn span_kind(mut self, breakpoint: impl Into<String>, span: SlotSpan) -> Self {
        self.span = self.span.with(breakpoint, span);
        self
    }

    pub fn order(mut self, breakpoint: impl Into<String>, order: i32) -> Self {
        self.order = self.order.with(breakpoint, order);
        self
    }

    /// Span at `active`, falling back to smaller breakpoints.
    ///
    /// A slot that only declares spans above `active` spans the full grid, the
    /// same as a column without a base span.
    pub fn resolve_span(
        &self,
        breakpoints: &Breakpoints,
        active: &str,
        grid: Grid,
    ) -> Result<SlotSpan, LayoutError> {
        if self.span.is_empty() {
            return Err(LayoutError::UnresolvedSpan {
                slot: self.id.clone(),
            });
        }

        Ok(self
            .span
            .resolve(breakpoints, active)
            .copied()
            .unwrap_or_else(|| grid.full_span()))
    }

    pub fn resolve_order(&self, breakpoints: &Breakpoints, active: &str) -> i32 {
        self.order.resolve_or(breakpoints, active, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BASE, Breakpoint};

    fn breakpoints() -> Breakpoints {
        Breakpoints::new([
            Breakpoint::new("sm", 576.),
            Breakpoint::new("md", 768.),
            Breakpoint::new("lg", 992.),
        ])
        .unwrap()
    }

    #[test]
    fn test_chat_slot_falls_back_to_sm_at_md() {
        let chat = LayoutSlot::new("chat").span("sm", 6.).span("lg", 6.5);
        let span = chat.resolve_span(&breakpoints(), "md", Grid::default()).unwrap();
        assert_eq!(span, SlotSpan::Columns(6.));

        let span = chat.resolve_span(&breakpoints(), "lg", Grid::default()).unwrap();
        assert_eq!(span, SlotSpan::Columns(6.5));
    }

    #[test]
    fn test_span_only_above_active_is_full_width() {
        let slot = LayoutSlot::new("stats").span("md", 4.);
        let span = slot.resolve_span(&breakpoints(), BASE, Grid::default()).unwrap();
        assert_eq!(span, SlotSpan::Columns(12.));
    }

    #[test]
    fn test_slot_without_spans_is_unresolved() {
        let slot = LayoutSlot::new("ghost");
        let err = slot
            .resolve_span(&breakpoints(), "lg", Grid::default())
            .unwrap_err();
        assert_eq!(
            err,
            LayoutError::UnresolvedSpan {
                slot: SlotId::new("ghost")
            }
        );
        assert_eq!(err.to_string(), "slot `ghost` doesn't define a span at any breakpoint");
    }

    #[test]
    fn test_order_cascades_with_zero_default() {
        let slot = LayoutSlot::new("aside").span(BASE, 12.).order("md", -1);
        assert_eq!(slot.resolve_order(&breakpoints(), "sm"), 0);
        assert_eq!(slot.resolve_order(&breakpoints(), "lg"), -1);
    }

    #[test]
    fn test_deserialize_slot() {
        let slot: LayoutSlot = serde_json::from_str(
            r#"{ "id": "main", "span": { "sm": 6, "md": "5.5", "lg": "auto", "xl": "content" } }"#,
        )
        .unwrap();
        assert_eq!(slot.id.as_str(), "main");
        assert_eq!(slot.span.get("sm"), Some(&SlotSpan::Columns(6.)));
        assert_eq!(slot.span.get("md"), Some(&SlotSpan::Columns(5.5)));
        assert_eq!(slot.span.get("lg"), Some(&SlotSpan::Auto));
        assert_eq!(slot.span.get("xl"), Some(&SlotSpan::Content));
        assert!(slot.order.is_empty());
    }

    #[test]
    fn test_deserialize_rejects_bad_spans() {
        assert!(serde_json::from_str::<SlotSpan>("\"wide\"").is_err());
        assert!(serde_json::from_str::<SlotSpan>("-2").is_err());
    }

    #[test]
    fn test_span_display() {
        assert_eq!(SlotSpan::Columns(6.5).to_string(), "6.5");
        assert_eq!(SlotSpan::Auto.to_string(), "auto");
        assert_eq!(SlotSpan::Content.columns(), None);
    }
}
