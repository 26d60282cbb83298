//! The dashboard page: two responsive columns of demo cards.
//!
//! Card content comes from elsewhere; this module only describes where each
//! card goes and resolves that description for a viewport width.

use enum_assoc::Assoc;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    layout::{
        Breakpoints, FailurePolicy, Grid, LayoutComposer, LayoutSlot, Placement, Responsive,
        SlotId, WrapMode,
    },
};

/// Horizontal padding around the page, the `xl` spacing step.
pub const PAGE_PADDING_PX: f32 = 32.;

/// Maximum content width of a page container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Assoc)]
#[serde(rename_all = "lowercase")]
#[func(pub fn max_width(&self) -> f32)]
pub enum ContainerSize {
    #[assoc(max_width = 540.)]
    Xs,
    #[assoc(max_width = 720.)]
    Sm,
    #[assoc(max_width = 960.)]
    Md,
    #[assoc(max_width = 1140.)]
    Lg,
    #[assoc(max_width = 1320.)]
    Xl,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    /// A single card, full column width.
    Card { id: SlotId },
    /// Equal width sub-columns, each a vertical stack of cards.
    SimpleGrid {
        cols: Responsive<u16>,
        stacks: Vec<Vec<SlotId>>,
    },
    /// Cards side by side that wrap on mobile viewports.
    Group { cards: Vec<SlotId> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub slot: LayoutSlot,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardPage {
    pub container: ContainerSize,
    pub columns: Vec<Column>,
}

/// A section after resolving it for one viewport.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrangedSection {
    Card(SlotId),
    SimpleGrid { cols: u16, stacks: Vec<Vec<SlotId>> },
    Group { wrap: WrapMode, cards: Vec<SlotId> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Arrangement {
    pub content_width_px: f32,
    pub placement: Placement,
    /// Sections of each column, in the same order as `placement.cells`.
    pub columns: Vec<(SlotId, Vec<ArrangedSection>)>,
}

fn card(id: &str) -> Section {
    Section::Card { id: id.into() }
}

fn ids(ids: &[&str]) -> Vec<SlotId> {
    ids.iter().copied().map(SlotId::from).collect()
}

/// The demo page as it ships.
pub fn page() -> DashboardPage {
    let main = Column {
        slot: LayoutSlot::new("main")
            .span("sm", 6.)
            .span("md", 5.5)
            .span("lg", 6.5),
        sections: vec![
            card("stats"),
            Section::SimpleGrid {
                cols: Responsive::new().with("lg", 2),
                stacks: vec![
                    ids(&["team-members", "cookie-settings", "payment-method"]),
                    ids(&["chat", "create-account", "report-issue"]),
                ],
            },
            card("notifications"),
        ],
    };

    let aside = Column {
        slot: LayoutSlot::new("aside")
            .span("sm", 6.)
            .span("md", 6.5)
            .span("lg", 5.5),
        sections: vec![
            Section::Group {
                cards: ids(&["calendar", "activity-goal"]),
            },
            card("metric"),
            card("data-table"),
            card("share"),
        ],
    };

    DashboardPage {
        container: ContainerSize::Xl,
        columns: vec![main, aside],
    }
}

impl DashboardPage {
    /// Every card on the page, column by column, top to bottom.
    pub fn cards(&self) -> Vec<&SlotId> {
        self.columns
            .iter()
            .flat_map(|column| &column.sections)
            .flat_map(|section| match section {
                Section::Card { id } => vec![id],
                Section::SimpleGrid { stacks, .. } => stacks.iter().flatten().collect(),
                Section::Group { cards } => cards.iter().collect(),
            })
            .collect()
    }

    pub fn slots(&self) -> Vec<LayoutSlot> {
        self.columns.iter().map(|column| column.slot.clone()).collect()
    }

    pub fn arrange(
        &self,
        width_px: f32,
        breakpoints: &Breakpoints,
        policy: FailurePolicy,
    ) -> Result<Arrangement, Error> {
        let composer = LayoutComposer::new(breakpoints.clone(), Grid::default(), policy);
        let placement = composer.compose(&self.slots(), width_px)?;
        let wrap = placement.wrap;

        let columns = placement
            .cells
            .iter()
            .filter_map(|cell| {
                let column = self.columns.iter().find(|column| column.slot.id == cell.slot)?;
                let sections = column
                    .sections
                    .iter()
                    .map(|section| match section {
                        Section::Card { id } => ArrangedSection::Card(id.clone()),
                        Section::SimpleGrid { cols, stacks } => ArrangedSection::SimpleGrid {
                            cols: cols.resolve_or(breakpoints, &placement.breakpoint, 1),
                            stacks: stacks.clone(),
                        },
                        Section::Group { cards } => ArrangedSection::Group {
                            wrap,
                            cards: cards.clone(),
                        },
                    })
                    .collect();
                Some((cell.slot.clone(), sections))
            })
            .collect();

        let content_width_px =
            (width_px.min(self.container.max_width()) - 2. * PAGE_PADDING_PX).max(0.);

        Ok(Arrangement {
            content_width_px,
            placement,
            columns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::BASE;

    fn arrange(width: f32) -> Arrangement {
        page()
            .arrange(width, &Breakpoints::default(), FailurePolicy::Strict)
            .unwrap()
    }

    fn column<'a>(arrangement: &'a Arrangement, id: &str) -> &'a [ArrangedSection] {
        &arrangement
            .columns
            .iter()
            .find(|(slot, _)| slot.as_str() == id)
            .unwrap()
            .1
    }

    #[test]
    fn test_page_lists_every_card_once() {
        let page = page();
        let mut cards: Vec<_> = page.cards().into_iter().map(SlotId::as_str).collect();
        assert_eq!(cards.len(), 13);
        assert_eq!(cards[0], "stats");
        assert_eq!(cards[12], "share");
        cards.sort_unstable();
        cards.dedup();
        assert_eq!(cards.len(), 13);
    }

    #[test]
    fn test_mobile_stacks_columns_and_wraps_group() {
        let arrangement = arrange(375.);
        assert_eq!(arrangement.placement.breakpoint, BASE);
        assert_eq!(arrangement.placement.rows(), 2);

        let aside = column(&arrangement, "aside");
        assert!(matches!(&aside[0], ArrangedSection::Group { wrap: WrapMode::Wrap, .. }));

        let main = column(&arrangement, "main");
        assert!(matches!(&main[1], ArrangedSection::SimpleGrid { cols: 1, .. }));
    }

    #[test]
    fn test_tablet_keeps_group_on_one_row() {
        let arrangement = arrange(800.);
        assert_eq!(arrangement.placement.breakpoint, "sm");
        assert_eq!(arrangement.placement.rows(), 1);

        let aside = column(&arrangement, "aside");
        assert!(matches!(&aside[0], ArrangedSection::Group { wrap: WrapMode::NoWrap, .. }));
    }

    #[test]
    fn test_desktop_spans_and_simple_grid() {
        let arrangement = arrange(1280.);
        assert_eq!(arrangement.placement.breakpoint, "lg");

        let main = arrangement.placement.cell("main").unwrap();
        let aside = arrangement.placement.cell("aside").unwrap();
        assert_eq!((main.columns, aside.columns), (6.5, 5.5));

        let sections = column(&arrangement, "main");
        assert!(matches!(&sections[1], ArrangedSection::SimpleGrid { cols: 2, .. }));
    }

    #[test]
    fn test_md_falls_between() {
        let arrangement = arrange(1000.);
        assert_eq!(arrangement.placement.breakpoint, "md");
        assert_eq!(arrangement.placement.cell("main").unwrap().columns, 5.5);

        let sections = column(&arrangement, "main");
        assert!(matches!(&sections[1], ArrangedSection::SimpleGrid { cols: 1, .. }));
    }

    #[test]
    fn test_content_width_is_capped_by_container() {
        assert_eq!(arrange(1920.).content_width_px, 1320. - 64.);
        assert_eq!(arrange(375.).content_width_px, 375. - 64.);
        assert_eq!(arrange(40.).content_width_px, 0.);
    }

    #[test]
    fn test_page_round_trips_through_json() {
        let page = page();
        let json = serde_json::to_string(&page).unwrap();
        let parsed: DashboardPage = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, page);
    }
}
