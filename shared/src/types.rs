/// Distributed-object identifier. Zero is never a valid object.
pub type DoId = u32;
/// Wire message code, see [`crate::MessageRegistry`].
pub type MsgCode = u16;
/// Message-director channel.
pub type Channel = u64;
/// A network timestamp in ticks, already reduced into the signed range of
/// its [`crate::TimeBits`] width.
pub type NetworkTimestamp = i32;
