use std::fmt;

use distobj_shared::DoId;

pub(crate) type AllCallback<T> = Box<dyn FnOnce(Vec<Option<T>>)>;
pub(crate) type EachCallback<T> = Box<dyn FnMut(&T)>;
pub(crate) type TimeoutCallback = Box<dyn FnOnce(&[DoId])>;

/// What to call as the objects of one request show up.
///
/// * `on_each` runs once per requested id, with the object, as it materializes
/// * `on_all` runs once with every requested object in request order
///   (`None` for zero ids), when the last one arrives
/// * `on_timeout` runs instead of `on_all` when the request times out, with
///   the originally requested ids. Without it, a timeout hands whatever is
///   available to `on_all`.
pub struct RequestCallbacks<T> {
    pub(crate) on_all: Option<AllCallback<T>>,
    pub(crate) on_each: Option<EachCallback<T>>,
    pub(crate) on_timeout: Option<TimeoutCallback>,
}

impl<T> Default for RequestCallbacks<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RequestCallbacks<T> {
    pub fn new() -> Self {
        Self {
            on_all: None,
            on_each: None,
            on_timeout: None,
        }
    }

    pub fn on_all(mut self, callback: impl FnOnce(Vec<Option<T>>) + 'static) -> Self {
        self.on_all = Some(Box::new(callback));
        self
    }

    pub fn on_each(mut self, callback: impl FnMut(&T) + 'static) -> Self {
        self.on_each = Some(Box::new(callback));
        self
    }

    pub fn on_timeout(mut self, callback: impl FnOnce(&[DoId]) + 'static) -> Self {
        self.on_timeout = Some(Box::new(callback));
        self
    }

    pub fn has_timeout_callback(&self) -> bool {
        self.on_timeout.is_some()
    }
}

impl<T> fmt::Debug for RequestCallbacks<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestCallbacks")
            .field("on_all", &self.on_all.is_some())
            .field("on_each", &self.on_each.is_some())
            .field("on_timeout", &self.on_timeout.is_some())
            .finish()
    }
}
