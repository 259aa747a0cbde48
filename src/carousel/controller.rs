/// Gallery controller: the single entry point for user-driven changes to one
/// gallery section (category filter, carousel/grid toggle, hover pause).
///
/// Owns the view state, the collection store, the derived render sequence
/// and the animation driver, and keeps them consistent: any input change
/// rebuilds the sequence and hard-resets the driver in the same call, so a
/// later tick can never apply an offset computed against a stale sequence.
use std::time::Instant;

use crate::state::data::{FilterKey, ViewMode};
use crate::state::store::{Categorized, CollectionStore};

use super::driver::{AnimationDriver, DriverState};
use super::sequencer::{CardMetrics, RenderSequence};

/// Transient per-section UI state. Never persisted; reset to defaults
/// (`All`, carousel) when the section is created.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub selected_filter: FilterKey,
    pub view_mode: ViewMode,
}

#[derive(Debug, Clone)]
pub struct Gallery<T> {
    store: CollectionStore<T>,
    view: ViewState,
    metrics: CardMetrics,
    sequence: RenderSequence<T>,
    driver: AnimationDriver,
}

impl<T: Categorized + Clone> Gallery<T> {
    pub fn new(metrics: CardMetrics) -> Self {
        Self {
            store: CollectionStore::new(Vec::new()),
            view: ViewState::default(),
            metrics,
            sequence: RenderSequence::default(),
            driver: AnimationDriver::new(),
        }
    }

    pub fn with_items(metrics: CardMetrics, items: Vec<T>) -> Self {
        let mut gallery = Self::new(metrics);
        gallery.set_items(items);
        gallery
    }

    /// Replace the canonical item list (a fetch completed) and rebuild.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.store.set_items(items);
        self.rebuild();
    }

    /// Select a category filter. Selecting the active filter is a no-op so a
    /// running animation is not restarted for nothing.
    pub fn select_filter(&mut self, filter: FilterKey) {
        if self.view.selected_filter == filter {
            return;
        }
        self.view.selected_filter = filter;
        self.rebuild();
    }

    /// Toggle between the looping strip and the static grid.
    pub fn select_view_mode(&mut self, mode: ViewMode) {
        if self.view.view_mode == mode {
            return;
        }
        self.view.view_mode = mode;
        self.rebuild();
    }

    /// Recompute the render sequence and restart the driver from zero.
    ///
    /// The old offset and wrap distance are stale the moment any input
    /// changes; the hard reset is what prevents a flash of the previous
    /// layout mid-animation.
    fn rebuild(&mut self) {
        let filtered = self.store.filtered_by(&self.view.selected_filter);
        self.sequence = RenderSequence::build(&filtered, self.view.view_mode, &self.metrics);

        match self.sequence.unit_width {
            Some(width) => self.driver.reset(width),
            None => self.driver.stop(),
        }
    }

    pub fn tick(&mut self, now: Instant) -> f32 {
        self.driver.tick(now)
    }

    /// Pointer entered the strip: freeze the animation in place.
    pub fn pause(&mut self) {
        self.driver.pause();
    }

    /// Pointer left the strip: continue at the same speed.
    pub fn resume(&mut self) {
        self.driver.resume();
    }

    pub fn cards(&self) -> &[T] {
        &self.sequence.cards
    }

    pub fn sequence(&self) -> &RenderSequence<T> {
        &self.sequence
    }

    pub fn items(&self) -> &[T] {
        self.store.items()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn selected_filter(&self) -> &FilterKey {
        &self.view.selected_filter
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view.view_mode
    }

    pub fn driver_state(&self) -> DriverState {
        self.driver.state()
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_running()
    }

    /// Positive scroll position for the horizontal strip scrollable.
    pub fn scroll_x(&self) -> f32 {
        self.driver.scroll_x()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::sequencer::REPEAT_COUNT;
    use std::time::Duration;

    const METRICS: CardMetrics = CardMetrics::new(320.0, 32.0);

    #[derive(Debug, Clone, PartialEq)]
    struct Card {
        id: u32,
        key: Option<&'static str>,
    }

    impl Categorized for Card {
        fn category_key(&self) -> Option<&str> {
            self.key
        }
    }

    fn card(id: u32, key: &'static str) -> Card {
        Card { id, key: Some(key) }
    }

    fn sample() -> Vec<Card> {
        vec![card(1, "sala"), card(2, "cocina"), card(3, "sala")]
    }

    #[test]
    fn test_defaults_are_all_and_carousel() {
        let gallery: Gallery<Card> = Gallery::new(METRICS);
        assert_eq!(*gallery.selected_filter(), FilterKey::All);
        assert_eq!(gallery.view_mode(), ViewMode::Carousel);
        assert_eq!(gallery.driver_state(), DriverState::Idle);
    }

    #[test]
    fn test_items_start_the_loop() {
        let gallery = Gallery::with_items(METRICS, sample());

        assert_eq!(gallery.driver_state(), DriverState::Running);
        assert_eq!(gallery.cards().len(), 3 * REPEAT_COUNT);
    }

    #[test]
    fn test_filtered_carousel_sequence_end_to_end() {
        // Three projects, two in "sala"; filtering must keep ids 1 and 3 in
        // order and repeat them four times: 1,3,1,3,1,3,1,3.
        let mut gallery = Gallery::with_items(METRICS, sample());
        gallery.select_filter(FilterKey::Category("sala".into()));

        let ids: Vec<u32> = gallery.cards().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3, 1, 3, 1, 3, 1, 3]);

        let expected_width = 2.0 * (METRICS.card_width + METRICS.spacing);
        assert_eq!(gallery.sequence().unit_width, Some(expected_width));
    }

    #[test]
    fn test_filter_change_resets_the_offset() {
        let mut gallery = Gallery::with_items(METRICS, sample());

        let t0 = Instant::now();
        gallery.tick(t0);
        gallery.tick(t0 + Duration::from_secs(5));
        assert!(gallery.scroll_x() > 0.0);

        gallery.select_filter(FilterKey::Category("cocina".into()));

        // Fresh sequence, fresh offset: never a stale value from the old
        // wrap distance.
        assert_eq!(gallery.scroll_x(), 0.0);
        assert_eq!(gallery.driver_state(), DriverState::Running);
    }

    #[test]
    fn test_view_mode_change_stops_and_restarts() {
        let mut gallery = Gallery::with_items(METRICS, sample());

        gallery.select_view_mode(ViewMode::Grid);
        assert_eq!(gallery.driver_state(), DriverState::Idle);
        assert_eq!(gallery.cards().len(), 3);

        gallery.select_view_mode(ViewMode::Carousel);
        assert_eq!(gallery.driver_state(), DriverState::Running);
        assert_eq!(gallery.scroll_x(), 0.0);
    }

    #[test]
    fn test_selecting_the_active_filter_is_a_no_op() {
        let mut gallery = Gallery::with_items(METRICS, sample());

        let t0 = Instant::now();
        gallery.tick(t0);
        let before = gallery.tick(t0 + Duration::from_secs(2));

        gallery.select_filter(FilterKey::All);

        // No rebuild, no reset: the animation keeps its offset.
        assert_eq!(gallery.tick(t0 + Duration::from_secs(2)), before);
    }

    #[test]
    fn test_empty_filter_result_goes_idle() {
        let mut gallery = Gallery::with_items(METRICS, sample());
        gallery.select_filter(FilterKey::Category("dormitorio".into()));

        assert!(gallery.cards().is_empty());
        assert_eq!(gallery.driver_state(), DriverState::Idle);

        let t0 = Instant::now();
        assert_eq!(gallery.tick(t0), 0.0);
    }

    #[test]
    fn test_hover_pause_and_resume() {
        let mut gallery = Gallery::with_items(METRICS, sample());

        let t0 = Instant::now();
        gallery.tick(t0);
        let before = gallery.tick(t0 + Duration::from_secs(1));

        gallery.pause();
        assert_eq!(gallery.driver_state(), DriverState::Paused);
        assert_eq!(gallery.tick(t0 + Duration::from_secs(9)), before);

        gallery.resume();
        assert_eq!(gallery.driver_state(), DriverState::Running);
    }
}
