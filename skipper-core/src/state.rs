//! Screen state for skip selection, mutated only through [`Transition`]s.

use tracing::{debug, info};

use crate::carousel::{CarouselSlot, CarouselWindow, SlotPosition, next_index, prev_index};
use crate::loader::LoadOutcome;
use crate::model::SkipOffering;
use crate::pricing::PriceBreakdown;

#[derive(Debug, Clone, Default, PartialEq)]
/// The skip the customer picked, if any. Never cleared once set.
pub enum Selection {
    /// Nothing picked yet.
    #[default]
    None,
    /// The picked offering.
    Holding(SkipOffering),
}

impl Selection {
    /// The picked offering, if any.
    #[must_use]
    pub fn offering(&self) -> Option<&SkipOffering> {
        match self {
            Self::None => None,
            Self::Holding(offering) => Some(offering),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Named state changes of the screen.
pub enum Transition {
    /// The listing arrived.
    LoadSucceeded(Vec<SkipOffering>),
    /// The listing could not be loaded.
    LoadFailed,
    /// Move the carousel one card forward.
    NavigateNext,
    /// Move the carousel one card back.
    NavigatePrev,
    /// Pick an offering, replacing any earlier pick.
    Select(SkipOffering),
}

impl From<LoadOutcome> for Transition {
    fn from(outcome: LoadOutcome) -> Self {
        match outcome {
            LoadOutcome::Loaded(offerings) => Self::LoadSucceeded(offerings),
            LoadOutcome::Failed => Self::LoadFailed,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Everything the renderer needs to draw the skip selection screen.
pub struct ViewState {
    offerings: Vec<SkipOffering>,
    is_loading: bool,
    selection: Selection,
    cursor: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Fresh state at mount: loading, nothing listed, nothing picked.
    #[must_use]
    pub fn new() -> Self {
        Self {
            offerings: Vec::new(),
            is_loading: true,
            selection: Selection::None,
            cursor: 0,
        }
    }

    /// Apply a transition.
    ///
    /// Load transitions only take effect while loading; the listing settles once.
    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::LoadSucceeded(offerings) => {
                if !self.is_loading {
                    debug!("ignoring listing that arrived after the screen settled");
                    return;
                }
                debug!(count = offerings.len(), "listing loaded");
                self.offerings = offerings;
                self.cursor = 0;
                self.is_loading = false;
            }
            Transition::LoadFailed => {
                if !self.is_loading {
                    debug!("ignoring load failure after the screen settled");
                    return;
                }
                self.is_loading = false;
            }
            Transition::NavigateNext => {
                self.cursor = next_index(self.cursor, self.offerings.len());
            }
            Transition::NavigatePrev => {
                self.cursor = prev_index(self.cursor, self.offerings.len());
            }
            Transition::Select(offering) => {
                info!(
                    id = %offering.id,
                    size = offering.size,
                    total = PriceBreakdown::of(&offering).total,
                    "skip selected"
                );
                self.selection = Selection::Holding(offering);
            }
        }
    }

    /// Move to the next card.
    pub fn go_to_next(&mut self) {
        self.apply(Transition::NavigateNext);
    }

    /// Move to the previous card.
    pub fn go_to_prev(&mut self) {
        self.apply(Transition::NavigatePrev);
    }

    /// Pick `offering`. Membership in the listing is not checked.
    pub fn select_skip(&mut self, offering: SkipOffering) {
        self.apply(Transition::Select(offering));
    }

    /// Pick the offering shown at `position`. No-op when nothing is listed.
    pub fn select_slot(&mut self, position: SlotPosition) {
        let Some(offering) = self.window().map(|window| window.at(position).clone()) else {
            return;
        };
        self.select_skip(offering);
    }

    /// Pick the centred offering. No-op when nothing is listed.
    pub fn select_current(&mut self) {
        self.select_slot(SlotPosition::Current);
    }

    /// Whether the listing is still being fetched.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Loaded offerings in upstream order.
    #[must_use]
    pub fn offerings(&self) -> &[SkipOffering] {
        &self.offerings
    }

    /// Index of the centred offering.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Selected offering, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&SkipOffering> {
        self.selection.offering()
    }

    /// Whether `offering` is the selected one, compared by id.
    #[must_use]
    pub fn is_selected(&self, offering: &SkipOffering) -> bool {
        self.selected()
            .is_some_and(|selected| selected.id == offering.id)
    }

    /// Window around the cursor, `None` while nothing is listed.
    #[must_use]
    pub fn window(&self) -> Option<CarouselWindow<'_>> {
        CarouselWindow::new(&self.offerings, self.cursor)
    }

    /// Cards to display; empty while nothing is listed.
    #[must_use]
    pub fn displayed(&self) -> Vec<CarouselSlot<'_>> {
        self.window()
            .map(|window| window.slots().to_vec())
            .unwrap_or_default()
    }
}
