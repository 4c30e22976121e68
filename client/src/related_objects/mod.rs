pub mod object_host;
pub mod related_object_manager;
pub mod request_callbacks;
