/// Assert that two seconds values agree to within a microsecond
#[macro_export]
macro_rules! assert_seconds_eq {
    ($left:expr, $right:expr) => {
        $crate::assert_seconds_eq!($left, $right, 1e-6)
    };
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let (left, right): (f64, f64) = ($left, $right);
        assert!(
            (left - right).abs() <= $epsilon,
            "expected {} s, got {} s (tolerance {})",
            right,
            left,
            $epsilon
        );
    }};
}

/// Assert that a clock delta is synchronized with the given uncertainty
#[macro_export]
macro_rules! assert_synced {
    ($clock_delta:expr, delta = $delta:expr, uncertainty = $uncertainty:expr) => {{
        match $clock_delta.window() {
            distobj_shared::SyncWindow::Synced { uncertainty, .. } => {
                $crate::assert_seconds_eq!($clock_delta.delta(), $delta);
                $crate::assert_seconds_eq!(uncertainty, $uncertainty);
            }
            distobj_shared::SyncWindow::Unsynced => {
                panic!("clock delta should be synchronized")
            }
        }
    }};
}
