use std::{
    collections::HashMap,
    fmt,
    str::FromStr,
};

use thiserror::Error;

use crate::types::DoId;

/// Events the runtime subscribes to. The string form is how they are named
/// on a string-keyed bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventName {
    /// The object with this id has materialized: `"generate-<doid>"`
    Generate(DoId),
    /// The host adjusted its clock: `"resetClock"`
    ResetClock,
}

const GENERATE_PREFIX: &str = "generate-";
const RESET_CLOCK: &str = "resetClock";

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventName::Generate(doid) => write!(f, "{GENERATE_PREFIX}{doid}"),
            EventName::ResetClock => f.write_str(RESET_CLOCK),
        }
    }
}

/// Error parsing an [`EventName`] from its string form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized event name {name:?}")]
pub struct EventNameError {
    pub name: String,
}

impl FromStr for EventName {
    type Err = EventNameError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if name == RESET_CLOCK {
            return Ok(EventName::ResetClock);
        }
        name.strip_prefix(GENERATE_PREFIX)
            .and_then(|doid| doid.parse::<DoId>().ok())
            .map(EventName::Generate)
            .ok_or_else(|| EventNameError {
                name: name.to_string(),
            })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionKey(u64);

/// Something that can open and release event subscriptions on behalf of a
/// single listener.
pub trait EventSubscriber {
    fn subscribe(&mut self, event: EventName) -> SubscriptionKey;
    fn unsubscribe(&mut self, key: SubscriptionKey);
}

/// Registry of which listeners want which events. Publishing is left to the
/// owner, which asks for [`listeners`](Self::listeners) and routes the payload.
pub struct EventBus<L> {
    next_key: u64,
    subscriptions: HashMap<SubscriptionKey, (EventName, L)>,
    by_event: HashMap<EventName, Vec<SubscriptionKey>>,
}

impl<L> Default for EventBus<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> EventBus<L> {
    pub fn new() -> Self {
        Self {
            next_key: 0,
            subscriptions: HashMap::new(),
            by_event: HashMap::new(),
        }
    }

    pub fn subscribe(&mut self, event: EventName, listener: L) -> SubscriptionKey {
        let key = SubscriptionKey(self.next_key);
        self.next_key += 1;

        self.subscriptions.insert(key, (event, listener));
        self.by_event.entry(event).or_default().push(key);
        key
    }

    /// Releases a subscription, returning its listener. Unknown keys are ignored.
    pub fn unsubscribe(&mut self, key: SubscriptionKey) -> Option<L> {
        let (event, listener) = self.subscriptions.remove(&key)?;

        let mut remove = false;
        if let Some(keys) = self.by_event.get_mut(&event) {
            keys.retain(|existing| *existing != key);
            remove = keys.is_empty();
        }
        if remove {
            self.by_event.remove(&event);
        }

        Some(listener)
    }

    /// Listeners of `event`, in the order they subscribed.
    pub fn listeners(&self, event: &EventName) -> Vec<L>
    where
        L: Clone,
    {
        self.by_event
            .get(event)
            .map(|keys| {
                keys.iter()
                    .filter_map(|key| self.subscriptions.get(key))
                    .map(|(_, listener)| listener.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn subscription_count(&self, event: &EventName) -> usize {
        self.by_event.get(event).map_or(0, Vec::len)
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    pub fn clear(&mut self) {
        self.subscriptions.clear();
        self.by_event.clear();
    }
}
