use std::rc::Rc;

use distobj_client::ClientRepository;
use distobj_shared::{DoId, ManualClock, NetworkTimeConfig};

/// A stand-in distributed object: just its id and a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestObject {
    pub doid: DoId,
    pub name: String,
}

impl TestObject {
    pub fn new(doid: DoId, name: &str) -> Rc<Self> {
        Rc::new(Self {
            doid,
            name: name.to_string(),
        })
    }
}

pub type TestRepository = ClientRepository<Rc<TestObject>, ManualClock>;

/// A repository on a manual clock starting at `start`, with the default
/// network time settings. The returned clock shares time with the
/// repository's.
pub fn test_repository(start: f64) -> (ManualClock, TestRepository) {
    let clock = ManualClock::new(start);
    let repository = ClientRepository::new(clock.clone(), NetworkTimeConfig::default())
        .expect("default config is valid");
    (clock, repository)
}
