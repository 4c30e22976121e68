use std::{cell::RefCell, rc::Rc};

use distobj_client::RequestCallbacks;
use distobj_shared::DoId;

#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall<T> {
    Each(T),
    All(Vec<Option<T>>),
    Timeout(Vec<DoId>),
}

/// Records every callback of the requests it hands callbacks to, in the
/// order they ran. Clones share the same record.
#[derive(Clone)]
pub struct CallbackRecorder<T> {
    calls: Rc<RefCell<Vec<RecordedCall<T>>>>,
}

impl<T: Clone + 'static> Default for CallbackRecorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static> CallbackRecorder<T> {
    pub fn new() -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// `on_each` and `on_all`, but no timeout callback
    pub fn callbacks(&self) -> RequestCallbacks<T> {
        let each_calls = self.calls.clone();
        let all_calls = self.calls.clone();
        RequestCallbacks::new()
            .on_each(move |object: &T| {
                each_calls
                    .borrow_mut()
                    .push(RecordedCall::Each(object.clone()))
            })
            .on_all(move |objects: Vec<Option<T>>| {
                all_calls.borrow_mut().push(RecordedCall::All(objects))
            })
    }

    pub fn callbacks_with_timeout(&self) -> RequestCallbacks<T> {
        let timeout_calls = self.calls.clone();
        self.callbacks().on_timeout(move |doids: &[DoId]| {
            timeout_calls
                .borrow_mut()
                .push(RecordedCall::Timeout(doids.to_vec()))
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall<T>> {
        self.calls.borrow().clone()
    }

    pub fn each_values(&self) -> Vec<T> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                RecordedCall::Each(object) => Some(object.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn all_values(&self) -> Vec<Vec<Option<T>>> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                RecordedCall::All(objects) => Some(objects.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn each_count(&self) -> usize {
        self.each_values().len()
    }

    pub fn all_count(&self) -> usize {
        self.all_values().len()
    }

    pub fn timeout_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, RecordedCall::Timeout(_)))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }
}
