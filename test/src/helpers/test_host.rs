use std::collections::HashMap;

use distobj_client::{ObjectDirectory, RelatedObjectManager, RequestHandle};
use distobj_shared::{
    Clock, ClockMode, DoId, EventBus, EventName, EventSubscriber, ManualClock, SubscriptionKey,
    TaskScheduler, TimerHandle, TimerQueue,
};

/// A bare host for driving a [`RelatedObjectManager`] directly, without a
/// full repository around it.
pub struct TestHost<T> {
    pub clock: ManualClock,
    objects: HashMap<DoId, T>,
    events: EventBus<()>,
    timers: TimerQueue<RequestHandle>,
}

impl<T: Clone> TestHost<T> {
    pub fn new(start: f64) -> Self {
        Self {
            clock: ManualClock::new(start),
            objects: HashMap::new(),
            events: EventBus::new(),
            timers: TimerQueue::new(),
        }
    }

    /// Makes an object present without announcing it.
    pub fn insert_object(&mut self, doid: DoId, object: T) {
        self.objects.insert(doid, object);
    }

    pub fn remove_object(&mut self, doid: DoId) -> Option<T> {
        self.objects.remove(&doid)
    }

    /// Makes an object present and announces it to `manager`.
    pub fn generate(&mut self, manager: &mut RelatedObjectManager<T>, doid: DoId, object: T) {
        self.objects.insert(doid, object.clone());
        manager.on_materialized(self, doid, &object);
    }

    /// Moves the clock forward and fires the timeouts that came due.
    pub fn advance(&mut self, manager: &mut RelatedObjectManager<T>, seconds: f64) {
        self.clock.advance(seconds);
        let now = self.clock.real_time();
        while let Some((_, handle)) = self.timers.pop_due(now) {
            manager.on_timeout(self, handle);
        }
    }

    pub fn subscription_count(&self) -> usize {
        self.events.len()
    }

    pub fn is_subscribed(&self, doid: DoId) -> bool {
        self.events.subscription_count(&EventName::Generate(doid)) > 0
    }

    pub fn scheduled_timeouts(&self) -> usize {
        self.timers.len()
    }
}

impl<T> Clock for TestHost<T> {
    fn real_time(&self) -> f64 {
        self.clock.real_time()
    }

    fn frame_time(&self) -> f64 {
        self.clock.frame_time()
    }

    fn mode(&self) -> ClockMode {
        self.clock.mode()
    }
}

impl<T: Clone> ObjectDirectory<T> for TestHost<T> {
    fn lookup(&self, doid: DoId) -> Option<T> {
        self.objects.get(&doid).cloned()
    }
}

impl<T> EventSubscriber for TestHost<T> {
    fn subscribe(&mut self, event: EventName) -> SubscriptionKey {
        self.events.subscribe(event, ())
    }

    fn unsubscribe(&mut self, key: SubscriptionKey) {
        self.events.unsubscribe(key);
    }
}

impl<T> TaskScheduler<RequestHandle> for TestHost<T> {
    fn schedule_after(&mut self, delay: f64, key: RequestHandle) -> TimerHandle {
        let deadline = self.clock.real_time() + delay;
        self.timers.schedule_at(deadline, key)
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.timers.cancel(handle)
    }
}
