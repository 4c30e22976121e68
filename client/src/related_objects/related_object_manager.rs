use std::{
    collections::HashMap,
    panic::{catch_unwind, AssertUnwindSafe},
};

use log::{debug, error, warn};

use distobj_shared::{DoId, EventName, SubscriptionKey, TimerHandle};

use crate::{
    error::RelatedObjectError,
    related_objects::{
        object_host::{ObjectDirectory, RelatedObjectHost},
        request_callbacks::RequestCallbacks,
    },
};

/// Identifies one call to [`RelatedObjectManager::request_objects`]. Handles
/// are never reused, so a stale handle can only ever refer to nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestHandle(u64);

struct PendingRequest<T> {
    doid_list: Vec<DoId>,
    ids_pending: Vec<DoId>,
    callbacks: RequestCallbacks<T>,
    timeout: Option<TimerHandle>,
}

/// Waits for sets of distributed objects to materialize and runs the
/// requester's callbacks as they do.
///
/// Requests are stored once, keyed by handle; `waiting` maps each missing id
/// to the handles waiting on it, in request order, and exactly one event
/// subscription is held per waited-on id.
pub struct RelatedObjectManager<T> {
    next_handle: u64,
    requests: HashMap<RequestHandle, PendingRequest<T>>,
    waiting: HashMap<DoId, Vec<RequestHandle>>,
    subscriptions: HashMap<DoId, SubscriptionKey>,
    destroyed: bool,
}

impl<T> Default for RelatedObjectManager<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RelatedObjectManager<T> {
    pub fn new() -> Self {
        Self {
            next_handle: 0,
            requests: HashMap::new(),
            waiting: HashMap::new(),
            subscriptions: HashMap::new(),
            destroyed: false,
        }
    }

    /// Asks to be told when every object in `doid_list` exists.
    ///
    /// Objects already present get `on_each` right away, in list order. If
    /// nothing is missing `on_all` also runs before this returns, and the
    /// handle is already complete. Zero ids are placeholders: never waited
    /// on, `None` in the result.
    pub fn request_objects<H: RelatedObjectHost<T>>(
        &mut self,
        host: &mut H,
        doid_list: &[DoId],
        mut callbacks: RequestCallbacks<T>,
        timeout: Option<f64>,
    ) -> Result<RequestHandle, RelatedObjectError> {
        if self.destroyed {
            return Err(RelatedObjectError::ManagerDestroyed);
        }

        let handle = RequestHandle(self.next_handle);
        self.next_handle += 1;

        let mut objects = Vec::with_capacity(doid_list.len());
        let mut ids_pending = Vec::new();
        for doid in doid_list.iter().copied() {
            if doid == 0 {
                objects.push(None);
                continue;
            }
            match host.lookup(doid) {
                Some(object) => {
                    if let Some(on_each) = callbacks.on_each.as_mut() {
                        guard_callback("each", handle, || on_each(&object));
                    }
                    objects.push(Some(object));
                }
                None => {
                    objects.push(None);
                    ids_pending.push(doid);
                }
            }
        }

        if ids_pending.is_empty() {
            debug!("Request {:?} for {:?} already satisfied", handle, doid_list);
            if let Some(on_all) = callbacks.on_all.take() {
                guard_callback("all", handle, move || on_all(objects));
            }
            return Ok(handle);
        }

        for doid in ids_pending.iter().copied() {
            self.waiting.entry(doid).or_default().push(handle);
            if !self.subscriptions.contains_key(&doid) {
                let key = host.subscribe(EventName::Generate(doid));
                self.subscriptions.insert(doid, key);
            }
        }

        let timeout = timeout.map(|delay| host.schedule_after(delay, handle));

        debug!(
            "Request {:?} waiting on {:?} of {:?}",
            handle, ids_pending, doid_list
        );

        self.requests.insert(
            handle,
            PendingRequest {
                doid_list: doid_list.to_vec(),
                ids_pending,
                callbacks,
                timeout,
            },
        );

        Ok(handle)
    }

    /// The object with id `doid` has materialized. Every request waiting on
    /// it hears about it, in the order the requests were made.
    pub fn on_materialized<H: RelatedObjectHost<T>>(&mut self, host: &mut H, doid: DoId, object: &T) {
        let Some(handles) = self.waiting.remove(&doid) else {
            return;
        };
        if let Some(key) = self.subscriptions.remove(&doid) {
            host.unsubscribe(key);
        }

        for handle in handles {
            let Some(request) = self.requests.get_mut(&handle) else {
                warn!("Request {:?} waiting on {} no longer exists", handle, doid);
                continue;
            };
            let Some(index) = request.ids_pending.iter().position(|id| *id == doid) else {
                warn!(
                    "Object {} materialized twice for request {:?}, ignoring",
                    doid, handle
                );
                continue;
            };
            request.ids_pending.remove(index);

            if let Some(on_each) = request.callbacks.on_each.as_mut() {
                guard_callback("each", handle, || on_each(object));
            }

            if !request.ids_pending.is_empty() {
                continue;
            }
            if let Some(request) = self.requests.remove(&handle) {
                Self::complete(host, handle, request);
            }
        }
    }

    /// The timeout of request `handle` fired.
    pub fn on_timeout<H: RelatedObjectHost<T>>(&mut self, host: &mut H, handle: RequestHandle) {
        let Some(mut request) = self.requests.remove(&handle) else {
            return;
        };
        self.detach(host, handle, &request.ids_pending);

        debug!(
            "Request {:?} timed out still waiting on {:?}",
            handle, request.ids_pending
        );

        if let Some(on_timeout) = request.callbacks.on_timeout.take() {
            let doid_list = &request.doid_list;
            guard_callback("timeout", handle, move || on_timeout(doid_list));
            return;
        }

        warn!(
            "Request {:?} timed out with no timeout callback, passing partial list",
            handle
        );
        let objects = resolve(&*host, &request.doid_list);
        if let Some(on_all) = request.callbacks.on_all.take() {
            guard_callback("all", handle, move || on_all(objects));
        }
    }

    /// Cancels a request without running any of its callbacks. Unknown and
    /// finished requests are ignored.
    pub fn abort_request<H: RelatedObjectHost<T>>(&mut self, host: &mut H, handle: RequestHandle) {
        let Some(request) = self.requests.remove(&handle) else {
            return;
        };
        if let Some(timer) = request.timeout {
            host.cancel(timer);
        }
        self.detach(host, handle, &request.ids_pending);
        debug!("Aborted request {:?}", handle);
    }

    /// Silently abandons every outstanding request. New requests are still
    /// accepted afterwards.
    pub fn abort_all_requests<H: RelatedObjectHost<T>>(&mut self, host: &mut H) {
        for (_, key) in self.subscriptions.drain() {
            host.unsubscribe(key);
        }
        for (_, request) in self.requests.drain() {
            if let Some(timer) = request.timeout {
                host.cancel(timer);
            }
        }
        self.waiting.clear();
        debug!("Aborted all related-object requests");
    }

    /// Aborts everything and refuses further requests.
    pub fn destroy<H: RelatedObjectHost<T>>(&mut self, host: &mut H) {
        self.abort_all_requests(host);
        self.destroyed = true;
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn is_pending(&self, handle: RequestHandle) -> bool {
        self.requests.contains_key(&handle)
    }

    /// Ids `handle` is still waiting on, or `None` once it is finished.
    pub fn pending_ids(&self, handle: RequestHandle) -> Option<&[DoId]> {
        self.requests
            .get(&handle)
            .map(|request| request.ids_pending.as_slice())
    }

    pub fn pending_request_count(&self) -> usize {
        self.requests.len()
    }

    /// Ids that at least one request is waiting on.
    pub fn waiting_doids(&self) -> impl Iterator<Item = DoId> + '_ {
        self.waiting.keys().copied()
    }

    pub fn is_waiting_for(&self, doid: DoId) -> bool {
        self.waiting.contains_key(&doid)
    }

    fn complete<H: RelatedObjectHost<T>>(host: &mut H, handle: RequestHandle, mut request: PendingRequest<T>) {
        if let Some(timer) = request.timeout.take() {
            host.cancel(timer);
        }

        let objects = resolve(&*host, &request.doid_list);
        for (doid, object) in request.doid_list.iter().zip(objects.iter()) {
            if *doid != 0 && object.is_none() {
                warn!(
                    "Object {} of request {:?} disappeared before completion",
                    doid, handle
                );
            }
        }

        debug!("Request {:?} complete", handle);
        if let Some(on_all) = request.callbacks.on_all.take() {
            guard_callback("all", handle, move || on_all(objects));
        }
    }

    // Removes `handle` from the waiting lists of `ids`, releasing the
    // subscription of any id nobody waits on anymore
    fn detach<H: RelatedObjectHost<T>>(&mut self, host: &mut H, handle: RequestHandle, ids: &[DoId]) {
        for doid in ids {
            let mut released = false;
            if let Some(handles) = self.waiting.get_mut(doid) {
                handles.retain(|waiting| *waiting != handle);
                released = handles.is_empty();
            }
            if released {
                self.waiting.remove(doid);
                if let Some(key) = self.subscriptions.remove(doid) {
                    host.unsubscribe(key);
                }
            }
        }
    }
}

fn resolve<T, D: ObjectDirectory<T> + ?Sized>(directory: &D, doid_list: &[DoId]) -> Vec<Option<T>> {
    doid_list
        .iter()
        .map(|doid| match doid {
            0 => None,
            doid => directory.lookup(*doid),
        })
        .collect()
}

fn guard_callback(kind: &str, handle: RequestHandle, callback: impl FnOnce()) {
    if catch_unwind(AssertUnwindSafe(callback)).is_err() {
        error!("The {} callback of request {:?} panicked", kind, handle);
    }
}
