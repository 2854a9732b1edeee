//! Maps wall-clock time onto the fixed set of clock-face frames.
//!
//! The cycle is anchored at noon: frame 0 shows at 12:00 and the full set
//! sweeps exactly once per 24-hour day. The frame set encodes two symmetric
//! half-day passes, hence the `TOTAL_FRAMES / 2` divisor in the slot width.

pub const TOTAL_FRAMES: usize = 63;

const MINUTES_PER_HALF_DAY: f64 = 720.0;

/// Minutes elapsed since the most recent noon, in `[0, 1439]`.
///
/// Hours before 12 roll into the previous day's noon window so the value
/// grows monotonically across midnight.
pub fn minutes_since_noon(hour: u32, minute: u32) -> u32 {
    let hour = if hour < 12 { hour + 24 } else { hour };
    (hour - 12) * 60 + minute
}

/// Frame to show for the given wall-clock time, in `[0, TOTAL_FRAMES)`.
pub fn frame_index(hour: u32, minute: u32) -> usize {
    let slot_width = MINUTES_PER_HALF_DAY / (TOTAL_FRAMES as f64 / 2.0);
    (f64::from(minutes_since_noon(hour, minute)) / slot_width) as usize % TOTAL_FRAMES
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn noon_anchors_the_cycle() {
        assert_eq!(minutes_since_noon(12, 0), 0);
        assert_eq!(minutes_since_noon(23, 59), 719);
        assert_eq!(minutes_since_noon(0, 0), 720);
        assert_eq!(minutes_since_noon(11, 59), 1439);
    }

    #[test]
    fn index_is_always_in_range() {
        for hour in 0..24 {
            for minute in 0..60 {
                assert!(frame_index(hour, minute) < TOTAL_FRAMES);
            }
        }
    }

    #[test]
    fn first_and_last_slots() {
        assert_eq!(frame_index(12, 0), 0);
        assert_eq!(frame_index(11, 59), TOTAL_FRAMES - 1);
    }

    #[test]
    fn index_advances_one_slot_at_a_time() {
        // Walk the noon-to-noon window minute by minute; the index may only
        // hold or step to the next slot, never skip or go backwards.
        let mut prev = frame_index(12, 0);
        for offset in 1..24 * 60 {
            let hour = (12 + offset / 60) % 24;
            let idx = frame_index(hour, offset % 60);
            assert!(idx == prev || idx == prev + 1, "jump at offset {offset}");
            prev = idx;
        }
    }

    #[test]
    fn slot_boundary_with_63_frames() {
        // Slot width is 720 / 31.5 ~ 22.857 minutes.
        assert_eq!(frame_index(12, 22), 0);
        assert_eq!(frame_index(12, 23), 1);
    }

    #[test]
    fn same_time_same_frame() {
        for hour in 0..24 {
            for minute in 0..60 {
                assert_eq!(frame_index(hour, minute), frame_index(hour, minute));
            }
        }
    }
}
