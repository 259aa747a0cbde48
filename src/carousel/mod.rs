/// Infinite carousel engine
///
/// One parameterized engine drives every gallery-like section (portfolio,
/// material catalog) instead of a per-section reimplementation:
/// - Loop sequencer (sequencer.rs): filtered items + view mode -> concrete
///   render sequence and wrap distance
/// - Animation driver (driver.rs): Idle/Running/Paused offset state machine
/// - Gallery controller (controller.rs): filter/view toggles and the
///   rebuild-then-reset ordering that keeps them consistent
///
/// Presentation (card shape, colors, detail layout) lives in `ui` and only
/// consumes the sequence and offset as plain data.
pub mod controller;
pub mod driver;
pub mod sequencer;

pub use controller::Gallery;
pub use sequencer::CardMetrics;
