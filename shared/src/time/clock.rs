use std::rc::Rc;

/// How the host clock advances.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClockMode {
    /// Time follows the wall clock
    #[default]
    Normal,
    /// Time is stepped by the host, e.g. while recording a deterministic replay
    NonRealTime,
}

/// The sole source of local time for clock synchronization and request
/// timeouts.
///
/// Reads are infallible: an implementation that fails to read host time
/// reports the last value it returned.
pub trait Clock {
    /// Wall-clock-like seconds, never rewound for frame pacing
    fn real_time(&self) -> f64;

    /// Seconds sampled once per tick, stable for the duration of a tick
    fn frame_time(&self) -> f64;

    fn mode(&self) -> ClockMode {
        ClockMode::Normal
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn real_time(&self) -> f64 {
        (**self).real_time()
    }

    fn frame_time(&self) -> f64 {
        (**self).frame_time()
    }

    fn mode(&self) -> ClockMode {
        (**self).mode()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn real_time(&self) -> f64 {
        (**self).real_time()
    }

    fn frame_time(&self) -> f64 {
        (**self).frame_time()
    }

    fn mode(&self) -> ClockMode {
        (**self).mode()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn real_time(&self) -> f64 {
        (**self).real_time()
    }

    fn frame_time(&self) -> f64 {
        (**self).frame_time()
    }

    fn mode(&self) -> ClockMode {
        (**self).mode()
    }
}
