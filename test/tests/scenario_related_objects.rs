/// End-to-end related-object scenarios
///
/// Requests made through a `ClientRepository`, satisfied by objects
/// generated into it and expired by its timeouts.

use distobj_test::{test_repository, CallbackRecorder, RecordedCall, TestObject};

fn init_logging() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init()
        .ok();
}

#[test]
fn completion_reports_objects_in_request_order() {
    init_logging();
    let (_clock, mut repo) = test_repository(0.0);
    let recorder = CallbackRecorder::new();
    let (a, b, c) = (
        TestObject::new(1, "A"),
        TestObject::new(2, "B"),
        TestObject::new(3, "C"),
    );

    let handle = repo
        .request_objects(&[1, 2, 3], recorder.callbacks(), None)
        .expect("repository is live");

    repo.generate_object(1, a.clone());
    repo.generate_object(3, c.clone());
    repo.generate_object(2, b.clone());

    assert_eq!(
        recorder.calls(),
        vec![
            RecordedCall::Each(a.clone()),
            RecordedCall::Each(c.clone()),
            RecordedCall::Each(b.clone()),
            RecordedCall::All(vec![Some(a), Some(b), Some(c)]),
        ]
    );
    assert!(!repo.related_objects().is_pending(handle));
}

#[test]
fn timeout_without_callback_delivers_what_arrived() {
    init_logging();
    let (clock, mut repo) = test_repository(0.0);
    let recorder = CallbackRecorder::new();
    let a = TestObject::new(1, "A");

    repo.request_objects(&[1, 2], recorder.callbacks(), Some(1.0))
        .expect("repository is live");

    clock.advance(0.5);
    repo.update();
    repo.generate_object(1, a.clone());

    clock.advance(0.5);
    repo.update();

    assert_eq!(recorder.each_values(), vec![a.clone()]);
    assert_eq!(recorder.all_values(), vec![vec![Some(a), None]]);

    // B showing up afterwards changes nothing
    repo.generate_object(2, TestObject::new(2, "B"));
    assert_eq!(recorder.all_count(), 1);
}

#[test]
fn timeout_callback_gets_the_requested_ids() {
    init_logging();
    let (clock, mut repo) = test_repository(0.0);
    let recorder = CallbackRecorder::new();

    repo.request_objects(&[4, 0, 5], recorder.callbacks_with_timeout(), Some(3.0))
        .expect("repository is live");
    clock.advance(3.0);
    repo.update();

    assert_eq!(recorder.calls(), vec![RecordedCall::Timeout(vec![4, 0, 5])]);
}

#[test]
fn deleted_object_completes_as_missing() {
    init_logging();
    let (_clock, mut repo) = test_repository(0.0);
    let recorder = CallbackRecorder::new();
    let a = TestObject::new(1, "A");
    let b = TestObject::new(2, "B");

    repo.request_objects(&[1, 2], recorder.callbacks(), None)
        .expect("repository is live");
    repo.generate_object(1, a.clone());
    repo.delete_object(1);
    repo.generate_object(2, b.clone());

    assert_eq!(recorder.each_values(), vec![a, b.clone()]);
    assert_eq!(recorder.all_values(), vec![vec![None, Some(b)]]);
}

#[test]
fn abort_all_then_request_again() {
    init_logging();
    let (clock, mut repo) = test_repository(0.0);
    let abandoned = CallbackRecorder::new();
    let fresh = CallbackRecorder::new();

    repo.request_objects(&[1], abandoned.callbacks_with_timeout(), Some(1.0))
        .expect("repository is live");
    repo.request_objects(&[2], abandoned.callbacks_with_timeout(), None)
        .expect("repository is live");
    repo.abort_all_requests();

    assert_eq!(repo.related_objects().pending_request_count(), 0);
    assert_eq!(repo.next_timeout(), None);

    repo.request_objects(&[1], fresh.callbacks(), None)
        .expect("repository is still live");
    clock.advance(2.0);
    repo.update();
    repo.generate_object(1, TestObject::new(1, "A"));
    repo.generate_object(2, TestObject::new(2, "B"));

    assert!(abandoned.is_empty());
    assert_eq!(fresh.all_count(), 1);
}

#[test]
fn present_objects_complete_immediately() {
    init_logging();
    let (_clock, mut repo) = test_repository(0.0);
    let recorder = CallbackRecorder::new();
    let a = TestObject::new(1, "A");
    repo.generate_object(1, a.clone());

    let handle = repo
        .request_objects(&[0, 1, 0], recorder.callbacks(), Some(1.0))
        .expect("repository is live");

    assert!(!repo.related_objects().is_pending(handle));
    assert_eq!(recorder.all_values(), vec![vec![None, Some(a), None]]);
    assert_eq!(repo.next_timeout(), None);
}
