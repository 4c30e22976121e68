use std::{collections::HashMap, rc::Rc};

use log::{debug, warn};

use distobj_shared::{
    Clock, ClockDelta, ClockMode, ConfigError, DeltaMerge, DoId, EventBus, EventName,
    EventSubscriber, NetworkTimeConfig, PeerResync, PeerResyncReport, SubscriptionKey,
    TaskScheduler, TimeSyncSample, TimerHandle, TimerQueue,
};

use crate::{
    error::RelatedObjectError,
    related_objects::{
        object_host::ObjectDirectory,
        related_object_manager::{RelatedObjectManager, RequestHandle},
        request_callbacks::RequestCallbacks,
    },
};

// Who a subscription on the session bus belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Listener {
    RelatedObjects,
    ClockDelta,
}

/// The parts of a session the related-object manager reaches into.
struct SessionWorld<T, C: Clock> {
    clock: Rc<C>,
    objects: HashMap<DoId, T>,
    events: EventBus<Listener>,
    timers: TimerQueue<RequestHandle>,
}

impl<T, C: Clock> Clock for SessionWorld<T, C> {
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

impl<T: Clone, C: Clock> ObjectDirectory<T> for SessionWorld<T, C> {
    fn lookup(&self, doid: DoId) -> Option<T> {
        self.objects.get(&doid).cloned()
    }
}

impl<T, C: Clock> EventSubscriber for SessionWorld<T, C> {
    fn subscribe(&mut self, event: EventName) -> SubscriptionKey {
        self.events.subscribe(event, Listener::RelatedObjects)
    }

    fn unsubscribe(&mut self, key: SubscriptionKey) {
        self.events.unsubscribe(key);
    }
}

impl<T, C: Clock> TaskScheduler<RequestHandle> for SessionWorld<T, C> {
    fn schedule_after(&mut self, delay: f64, key: RequestHandle) -> TimerHandle {
        let deadline = self.clock.real_time() + delay;
        self.timers.schedule_at(deadline, key)
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.timers.cancel(handle)
    }
}

/// One client session: the network clock estimate, the locally present
/// distributed objects and the requests waiting on them.
///
/// Everything runs on the caller's thread. Callbacks registered through
/// [`request_objects`](Self::request_objects) run synchronously inside
/// [`generate_object`](Self::generate_object) and [`update`](Self::update).
pub struct ClientRepository<T: Clone, C: Clock> {
    clock_delta: ClockDelta<Rc<C>>,
    related_objects: RelatedObjectManager<T>,
    world: SessionWorld<T, C>,
}

impl<T: Clone, C: Clock> ClientRepository<T, C> {
    pub fn new(clock: C, config: NetworkTimeConfig) -> Result<Self, ConfigError> {
        let clock = Rc::new(clock);
        let clock_delta = ClockDelta::new(clock.clone(), config)?;

        let mut events = EventBus::new();
        events.subscribe(EventName::ResetClock, Listener::ClockDelta);

        Ok(Self {
            clock_delta,
            related_objects: RelatedObjectManager::new(),
            world: SessionWorld {
                clock,
                objects: HashMap::new(),
                events,
                timers: TimerQueue::new(),
            },
        })
    }

    pub fn clock(&self) -> &C {
        &self.world.clock
    }

    pub fn clock_delta(&self) -> &ClockDelta<Rc<C>> {
        &self.clock_delta
    }

    pub fn clock_delta_mut(&mut self) -> &mut ClockDelta<Rc<C>> {
        &mut self.clock_delta
    }

    pub fn related_objects(&self) -> &RelatedObjectManager<T> {
        &self.related_objects
    }

    // Objects

    /// Adds an object and announces its materialization.
    pub fn generate_object(&mut self, doid: DoId, object: T) {
        if self.world.objects.insert(doid, object.clone()).is_some() {
            warn!("Object {} generated while already present, replacing it", doid);
        }
        self.publish_generate(doid, &object);
    }

    pub fn delete_object(&mut self, doid: DoId) -> Option<T> {
        self.world.objects.remove(&doid)
    }

    pub fn get_object(&self, doid: DoId) -> Option<&T> {
        self.world.objects.get(&doid)
    }

    pub fn has_object(&self, doid: DoId) -> bool {
        self.world.objects.contains_key(&doid)
    }

    pub fn object_count(&self) -> usize {
        self.world.objects.len()
    }

    // Related objects

    pub fn request_objects(
        &mut self,
        doid_list: &[DoId],
        callbacks: RequestCallbacks<T>,
        timeout: Option<f64>,
    ) -> Result<RequestHandle, RelatedObjectError> {
        self.related_objects
            .request_objects(&mut self.world, doid_list, callbacks, timeout)
    }

    pub fn abort_request(&mut self, handle: RequestHandle) {
        self.related_objects.abort_request(&mut self.world, handle);
    }

    pub fn abort_all_requests(&mut self) {
        self.related_objects.abort_all_requests(&mut self.world);
    }

    pub fn destroy(&mut self) {
        self.related_objects.destroy(&mut self.world);
    }

    /// Fires every request timeout that is due by the clock's real time.
    pub fn update(&mut self) {
        let now = self.world.clock.real_time();
        while let Some((_, handle)) = self.world.timers.pop_due(now) {
            self.related_objects.on_timeout(&mut self.world, handle);
        }
    }

    /// Real time at which the next request timeout is due, if any.
    pub fn next_timeout(&self) -> Option<f64> {
        self.world.timers.next_deadline()
    }

    // Clock

    /// Announces that the host clock jumped by `adjustment` seconds.
    pub fn reset_clock(&mut self, adjustment: f64) {
        for listener in self.world.events.listeners(&EventName::ResetClock) {
            if listener == Listener::ClockDelta {
                self.clock_delta.on_clock_reset(adjustment);
            }
        }
    }

    /// An authoritative sample arrived, measured at `local_time`.
    pub fn handle_time_sync(&mut self, local_time: f64, sample: &TimeSyncSample) -> DeltaMerge {
        self.clock_delta
            .resynchronize(local_time, sample.network_time, sample.uncertainty, true)
    }

    pub fn handle_peer_resync(&mut self, report: &PeerResyncReport) -> PeerResync {
        self.clock_delta.peer_to_peer_resync(
            report.originator,
            report.echoed_timestamp,
            report.peer_server_time,
            report.peer_uncertainty,
        )
    }

    fn publish_generate(&mut self, doid: DoId, object: &T) {
        let event = EventName::Generate(doid);
        let listeners = self.world.events.listeners(&event);
        debug!("Publishing {} to {} listener(s)", event, listeners.len());

        for listener in listeners {
            if listener == Listener::RelatedObjects {
                self.related_objects
                    .on_materialized(&mut self.world, doid, object);
            }
        }
    }
}
