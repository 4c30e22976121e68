pub mod assertions;
pub mod callback_recorder;
pub mod test_host;
pub mod test_object;

pub use callback_recorder::{CallbackRecorder, RecordedCall};
pub use test_host::TestHost;
pub use test_object::{test_repository, TestObject, TestRepository};
