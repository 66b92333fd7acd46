//! Cyclic previous/current/next window over an ordered list of offerings.

use crate::model::SkipOffering;

/// Cursor after moving one step forward, wrapping at the end.
///
/// Returns `0` for an empty list. A cursor outside `0..len` is normalized first.
#[must_use]
pub fn next_index(cursor: usize, len: usize) -> usize {
    match cursor.checked_rem(len) {
        Some(normalized) => (normalized + 1) % len,
        None => 0,
    }
}

/// Cursor after moving one step back, wrapping at the start.
///
/// Returns `0` for an empty list. A cursor outside `0..len` is normalized first.
#[must_use]
pub fn prev_index(cursor: usize, len: usize) -> usize {
    match cursor.checked_rem(len) {
        Some(normalized) => (normalized + len - 1) % len,
        None => 0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Position of a card inside the visible window. Used as the render key.
pub enum SlotPosition {
    /// Card left of the centre.
    Previous,
    /// Centred card.
    Current,
    /// Card right of the centre.
    Next,
}

impl SlotPosition {
    /// All positions in display order.
    pub const ALL: [Self; 3] = [Self::Previous, Self::Current, Self::Next];
}

#[derive(Debug, Clone, Copy)]
/// A visible card: where it sits and what it shows.
pub struct CarouselSlot<'a> {
    /// Position in the window.
    pub position: SlotPosition,
    /// Offering shown in this slot.
    pub offering: &'a SkipOffering,
}

#[derive(Debug, Clone, Copy)]
/// The three offerings visible around the cursor.
///
/// With one offering all three slots show it; with two the outer slots both show the
/// non-current one.
pub struct CarouselWindow<'a> {
    /// Offering before the cursor, wrapping to the end.
    pub previous: &'a SkipOffering,
    /// Offering at the cursor.
    pub current: &'a SkipOffering,
    /// Offering after the cursor, wrapping to the start.
    pub next: &'a SkipOffering,
}

impl<'a> CarouselWindow<'a> {
    /// Build the window for `cursor`, or `None` when there is nothing to show.
    #[must_use]
    pub fn new(offerings: &'a [SkipOffering], cursor: usize) -> Option<Self> {
        let len = offerings.len();
        let current_index = cursor.checked_rem(len)?;
        Some(Self {
            previous: offerings.get(prev_index(current_index, len))?,
            current: offerings.get(current_index)?,
            next: offerings.get(next_index(current_index, len))?,
        })
    }

    /// Offering shown at `position`.
    #[must_use]
    pub fn at(&self, position: SlotPosition) -> &'a SkipOffering {
        match position {
            SlotPosition::Previous => self.previous,
            SlotPosition::Current => self.current,
            SlotPosition::Next => self.next,
        }
    }

    /// Slots in display order.
    #[must_use]
    pub fn slots(&self) -> [CarouselSlot<'a>; 3] {
        SlotPosition::ALL.map(|position| CarouselSlot {
            position,
            offering: self.at(position),
        })
    }
}
