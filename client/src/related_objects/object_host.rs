use distobj_shared::{Clock, DoId, EventSubscriber, TaskScheduler};

use crate::related_objects::related_object_manager::RequestHandle;

/// Resolves distributed-object ids to locally present objects.
pub trait ObjectDirectory<T> {
    fn lookup(&self, doid: DoId) -> Option<T>;
}

/// Everything the related-object manager needs from its owner: a clock, the
/// object directory, a way to hear about materializations and a timer facility.
pub trait RelatedObjectHost<T>:
    Clock + ObjectDirectory<T> + EventSubscriber + TaskScheduler<RequestHandle>
{
}

impl<T, H> RelatedObjectHost<T> for H where
    H: Clock + ObjectDirectory<T> + EventSubscriber + TaskScheduler<RequestHandle>
{
}
