/// PROPERTY-BASED TESTS: clock delta invariants
///
/// Key invariants:
/// 1. An accepted sample leaves the window inside the intersection of the old
///    and candidate windows, or equal to the candidate on a trusted overwrite
/// 2. A rejected sample leaves the estimate untouched
/// 3. Narrow timestamps survive network -> local -> network near `now`
/// 4. Sign extension always lands in the signed range of its width

use proptest::prelude::*;

use distobj_shared::{
    sign_extend, ClockDelta, DeltaMerge, ManualClock, NetworkTimeConfig, SyncWindow, TimeBits,
};

const EPSILON: f64 = 1e-9;

fn synced_at(time: f64, delta: f64, uncertainty: f64) -> (ManualClock, ClockDelta<ManualClock>) {
    let clock = ManualClock::new(time);
    let mut clock_delta =
        ClockDelta::new(clock.clone(), NetworkTimeConfig::default()).expect("default config");
    assert_eq!(
        clock_delta.new_delta(time, delta, uncertainty, true),
        DeltaMerge::Initialized
    );
    (clock, clock_delta)
}

fn uncertainty_of(clock_delta: &ClockDelta<ManualClock>) -> f64 {
    match clock_delta.window() {
        SyncWindow::Synced { uncertainty, .. } => uncertainty,
        SyncWindow::Unsynced => f64::INFINITY,
    }
}

proptest! {
    #[test]
    fn prop_accepted_window_is_within_both(
        old_delta in -1000.0f64..1000.0,
        old_uncertainty in 0.0f64..5.0,
        new_delta in -1000.0f64..1000.0,
        new_uncertainty in 0.0f64..5.0,
        trust_new in any::<bool>(),
    ) {
        let (_clock, mut clock_delta) = synced_at(100.0, old_delta, old_uncertainty);

        let merge = clock_delta.new_delta(100.0, new_delta, new_uncertainty, trust_new);

        let low = clock_delta.delta() - uncertainty_of(&clock_delta);
        let high = clock_delta.delta() + uncertainty_of(&clock_delta);
        let overlap_low = (old_delta - old_uncertainty).max(new_delta - new_uncertainty);
        let overlap_high = (old_delta + old_uncertainty).min(new_delta + new_uncertainty);

        match merge {
            DeltaMerge::Narrowed => {
                prop_assert!(overlap_low <= overlap_high);
                prop_assert!(low >= overlap_low - EPSILON);
                prop_assert!(high <= overlap_high + EPSILON);
            }
            DeltaMerge::Overwritten => {
                prop_assert!(trust_new);
                prop_assert!(overlap_low > overlap_high);
                prop_assert!((clock_delta.delta() - new_delta).abs() < EPSILON);
                prop_assert!((uncertainty_of(&clock_delta) - new_uncertainty).abs() < EPSILON);
            }
            DeltaMerge::Rejected => {
                prop_assert!(!trust_new);
                prop_assert!((clock_delta.delta() - old_delta).abs() < EPSILON);
                prop_assert!((uncertainty_of(&clock_delta) - old_uncertainty).abs() < EPSILON);
            }
            DeltaMerge::Initialized => prop_assert!(false, "already synchronized"),
        }
    }

    #[test]
    fn prop_narrow_timestamps_round_trip(
        stamp in i16::MIN..=i16::MAX,
        now_ticks in -10_000_000i64..10_000_000,
        delta_ticks in -10_000_000i64..10_000_000,
    ) {
        let now = now_ticks as f64 / 100.0;
        let (_clock, clock_delta) = synced_at(now, delta_ticks as f64 / 100.0, 0.01);

        let local = clock_delta.network_to_local(i32::from(stamp), Some(now), TimeBits::Narrow);

        prop_assert!((local - now).abs() <= clock_delta.config().max_time_delta() + 0.01);
        prop_assert_eq!(
            clock_delta.local_to_network(local, TimeBits::Narrow),
            i32::from(stamp)
        );
    }

    #[test]
    fn prop_wide_timestamps_round_trip(
        stamp in -1_000_000i32..1_000_000,
        now_ticks in -1_000_000i64..1_000_000,
    ) {
        let now = now_ticks as f64 / 100.0;
        let (_clock, clock_delta) = synced_at(now, 0.0, 0.01);

        let local = clock_delta.network_to_local(stamp, Some(now), TimeBits::Wide);
        prop_assert_eq!(clock_delta.local_to_network(local, TimeBits::Wide), stamp);
    }

    #[test]
    fn prop_sign_extension_stays_in_range(value in any::<i64>()) {
        let narrow = sign_extend(value, TimeBits::Narrow);
        prop_assert!(narrow >= i32::from(i16::MIN) && narrow <= i32::from(i16::MAX));
        prop_assert_eq!(sign_extend(i64::from(narrow), TimeBits::Narrow), narrow);
        prop_assert_eq!((i64::from(narrow) - value).rem_euclid(1 << 16), 0);

        let wide = sign_extend(value, TimeBits::Wide);
        prop_assert_eq!(i64::from(wide), value as i32 as i64);
    }
}
