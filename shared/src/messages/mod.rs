pub mod datagram;
pub mod error;
pub mod message_registry;
pub mod msg_types;
