//! The reveal choreography as data.
//!
//! Every offset is measured from the instant the classification resolves,
//! never from submission time and never from the completion of an earlier
//! timer. The delivery task sleeps to absolute deadlines computed from that
//! one anchor, so relative order holds regardless of scheduler jitter and a
//! tie is broken by schedule position.

use std::time::Duration;

/// Hold after resolution before anything changes on screen. Dramatic
/// pacing, not a network timeout: the request itself is unbounded.
pub const SUSPENSE_HOLD: Duration = Duration::from_millis(2000);

/// Box art swaps closed → open partway through the flash fade-in. Tuned to
/// the flash visuals rather than derived from them; adjust together.
pub const BOX_OPEN_OFFSET: Duration = Duration::from_millis(250);

/// The result surfaces once the flash has peaked.
pub const RESULT_OFFSET: Duration = Duration::from_millis(600);

/// The gauge is drawn at zero on reveal and filled one beat later, so the
/// transition is perceptible instead of instantaneous.
pub const GAUGE_FILL_DELAY: Duration = Duration::from_millis(100);

/// A single timed UI mutation within one reveal attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    ShakeStop,
    FlashStart,
    BoxOpen,
    RevealResult,
    FlashStop,
    GaugeFill,
}

/// The fixed effect schedule for one attempt, ordered by offset.
///
/// `RevealResult` is listed before `FlashStop` at the same offset: the
/// result must be populated before the flash drops.
pub fn schedule() -> [(Duration, Effect); 6] {
    [
        (SUSPENSE_HOLD, Effect::ShakeStop),
        (SUSPENSE_HOLD, Effect::FlashStart),
        (SUSPENSE_HOLD + BOX_OPEN_OFFSET, Effect::BoxOpen),
        (SUSPENSE_HOLD + RESULT_OFFSET, Effect::RevealResult),
        (SUSPENSE_HOLD + RESULT_OFFSET, Effect::FlashStop),
        (
            SUSPENSE_HOLD + RESULT_OFFSET + GAUGE_FILL_DELAY,
            Effect::GaugeFill,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_monotonic() {
        let entries = schedule();
        for pair in entries.windows(2) {
            assert!(pair[0].0 <= pair[1].0, "schedule must be offset-ordered");
        }
    }

    #[test]
    fn reveal_precedes_flash_stop() {
        let entries = schedule();
        let reveal = entries
            .iter()
            .position(|(_, e)| *e == Effect::RevealResult)
            .unwrap();
        let flash_stop = entries
            .iter()
            .position(|(_, e)| *e == Effect::FlashStop)
            .unwrap();
        assert_eq!(entries[reveal].0, entries[flash_stop].0);
        assert!(reveal < flash_stop);
    }

    #[test]
    fn box_opens_before_the_result() {
        let entries = schedule();
        let open = entries.iter().find(|(_, e)| *e == Effect::BoxOpen).unwrap();
        let reveal = entries
            .iter()
            .find(|(_, e)| *e == Effect::RevealResult)
            .unwrap();
        assert!(open.0 < reveal.0);
    }
}
