/// Loop sequencer: turns a filtered item list plus a view mode into the
/// concrete sequence of cards to render, and the distance the animation
/// driver must traverse for one seamless cycle.
///
/// Carousel mode fakes an infinite strip by repeating the filtered items a
/// fixed number of times and wrapping the scroll offset after exactly one
/// un-repeated pass. Gallery sizes are tens of items, so the repeated strip
/// stays cheap; do not replace this with a virtualized scroller, since the
/// seam position and repeat cadence are part of the visual contract.
use crate::state::data::ViewMode;

/// How many times the filtered items are laid out back to back in carousel
/// mode. Four passes keep the wrap point off-screen on wide viewports.
pub const REPEAT_COUNT: usize = 4;

/// Card geometry supplied by the rendering layer.
///
/// The sequencer never touches live layout; the strip is uniform, so one
/// pass's width follows from the card width and spacing alone. This keeps
/// the wrap distance computable (and testable) without a display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardMetrics {
    /// Rendered width of one card in logical pixels
    pub card_width: f32,
    /// Horizontal gap between adjacent cards
    pub spacing: f32,
}

impl CardMetrics {
    pub const fn new(card_width: f32, spacing: f32) -> Self {
        Self {
            card_width,
            spacing,
        }
    }

    /// Width of exactly one un-repeated pass of `count` cards.
    ///
    /// Cards repeat with period `count * (width + spacing)`: card `i` of the
    /// second pass starts exactly one period after its first-pass twin, which
    /// is what makes the wrap invisible.
    pub fn unit_width(&self, count: usize) -> f32 {
        count as f32 * (self.card_width + self.spacing)
    }
}

/// The materialized sequence one gallery section renders.
///
/// Derived deterministically from `(filtered items, view mode)`; rebuilt from
/// scratch on every input change, never mutated in place.
#[derive(Debug, Clone)]
pub struct RenderSequence<T> {
    /// Cards in render order. In carousel mode the filtered items appear
    /// `REPEAT_COUNT` times, order preserved within each pass.
    pub cards: Vec<T>,
    /// Wrap distance for the animation driver; `None` in grid mode or when
    /// there is nothing to animate.
    pub unit_width: Option<f32>,
}

impl<T> Default for RenderSequence<T> {
    fn default() -> Self {
        Self {
            cards: Vec::new(),
            unit_width: None,
        }
    }
}

impl<T: Clone> RenderSequence<T> {
    /// Build the render sequence for one gallery section.
    ///
    /// Grid mode passes the items through untouched. Carousel mode repeats
    /// them `REPEAT_COUNT` times and reports the width of a single pass.
    /// An empty input yields an empty sequence with no distance; the driver
    /// treats that as "stopped", not as an error.
    pub fn build(filtered: &[T], mode: ViewMode, metrics: &CardMetrics) -> Self {
        if filtered.is_empty() {
            return Self::default();
        }

        match mode {
            ViewMode::Grid => Self {
                cards: filtered.to_vec(),
                unit_width: None,
            },
            ViewMode::Carousel => {
                let mut cards = Vec::with_capacity(filtered.len() * REPEAT_COUNT);
                for _ in 0..REPEAT_COUNT {
                    cards.extend_from_slice(filtered);
                }
                Self {
                    cards,
                    unit_width: Some(metrics.unit_width(filtered.len())),
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const METRICS: CardMetrics = CardMetrics::new(320.0, 32.0);

    #[test]
    fn test_grid_mode_passes_items_through() {
        let items = vec![10, 20, 30];
        let seq = RenderSequence::build(&items, ViewMode::Grid, &METRICS);

        assert_eq!(seq.cards, items);
        assert_eq!(seq.unit_width, None);
    }

    #[test]
    fn test_grid_mode_is_idempotent() {
        let items = vec![1, 2, 3, 4];
        let first = RenderSequence::build(&items, ViewMode::Grid, &METRICS);
        let second = RenderSequence::build(&first.cards, ViewMode::Grid, &METRICS);

        // No accumulation, no hidden repeats
        assert_eq!(first.cards, second.cards);
    }

    #[test]
    fn test_carousel_repeats_exactly_four_times() {
        let items = vec![1, 2, 3];
        let seq = RenderSequence::build(&items, ViewMode::Carousel, &METRICS);

        assert_eq!(seq.cards.len(), items.len() * REPEAT_COUNT);
        for pass in 0..REPEAT_COUNT {
            let offset = pass * items.len();
            assert_eq!(&seq.cards[offset..offset + items.len()], &items[..]);
        }
    }

    #[test]
    fn test_carousel_unit_width_is_one_pass() {
        let items = vec![1, 2, 3];
        let seq = RenderSequence::build(&items, ViewMode::Carousel, &METRICS);

        let expected = 3.0 * (METRICS.card_width + METRICS.spacing);
        assert_eq!(seq.unit_width, Some(expected));
    }

    #[test]
    fn test_empty_input_yields_empty_sequence_and_no_distance() {
        let items: Vec<i32> = Vec::new();

        let carousel = RenderSequence::build(&items, ViewMode::Carousel, &METRICS);
        assert!(carousel.is_empty());
        assert_eq!(carousel.unit_width, None);

        let grid = RenderSequence::build(&items, ViewMode::Grid, &METRICS);
        assert!(grid.is_empty());
        assert_eq!(grid.unit_width, None);
    }
}
