use bytes::{Buf, BufMut, BytesMut};

use crate::{
    constants::MAX_DATAGRAM_RECIPIENTS,
    messages::{error::DatagramError, message_registry::MessageRegistry},
    time::network_time::TimeBits,
    types::{Channel, DoId, MsgCode, NetworkTimestamp},
    wrapping_number::sign_extend,
};

/// The routing header at the front of every datagram.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatagramHeader {
    /// Between a client and its agent: just the message code
    Client { msg_type: MsgCode },
    /// Inside the server cluster: recipients, sender, then the message code
    Internal {
        recipients: Vec<Channel>,
        sender: Channel,
        msg_type: MsgCode,
    },
}

impl DatagramHeader {
    pub fn msg_type(&self) -> MsgCode {
        match self {
            DatagramHeader::Client { msg_type } | DatagramHeader::Internal { msg_type, .. } => {
                *msg_type
            }
        }
    }

    pub fn encoded_len(&self) -> usize {
        match self {
            DatagramHeader::Client { .. } => 2,
            DatagramHeader::Internal { recipients, .. } => 1 + recipients.len() * 8 + 8 + 2,
        }
    }

    pub fn encode(&self, buf: &mut BytesMut) -> Result<(), DatagramError> {
        match self {
            DatagramHeader::Client { msg_type } => {
                buf.put_u16_le(*msg_type);
            }
            DatagramHeader::Internal {
                recipients,
                sender,
                msg_type,
            } => {
                if recipients.len() > MAX_DATAGRAM_RECIPIENTS {
                    return Err(DatagramError::TooManyRecipients {
                        count: recipients.len(),
                    });
                }
                buf.reserve(self.encoded_len());
                buf.put_u8(recipients.len() as u8);
                for recipient in recipients {
                    buf.put_u64_le(*recipient);
                }
                buf.put_u64_le(*sender);
                buf.put_u16_le(*msg_type);
            }
        }
        Ok(())
    }

    /// Reads a header. `internal` selects the cluster layout.
    pub fn decode<B: Buf>(buf: &mut B, internal: bool) -> Result<Self, DatagramError> {
        if !internal {
            ensure_remaining(buf, 2)?;
            return Ok(DatagramHeader::Client {
                msg_type: buf.get_u16_le(),
            });
        }

        ensure_remaining(buf, 1)?;
        let count = buf.get_u8() as usize;
        ensure_remaining(buf, count * 8 + 8 + 2)?;

        let recipients = (0..count).map(|_| buf.get_u64_le()).collect();
        let sender = buf.get_u64_le();
        let msg_type = buf.get_u16_le();

        Ok(DatagramHeader::Internal {
            recipients,
            sender,
            msg_type,
        })
    }

    /// One-line description for logging, e.g. `CLIENT_HEARTBEAT` or
    /// `STATESERVER_OBJECT_SET_FIELD from 4000 to [1, 2]`.
    pub fn describe(&self, registry: &MessageRegistry) -> String {
        let name = registry.describe(self.msg_type());
        match self {
            DatagramHeader::Client { .. } => name,
            DatagramHeader::Internal {
                recipients, sender, ..
            } => format!("{name} from {sender} to {recipients:?}"),
        }
    }
}

fn ensure_remaining<B: Buf>(buf: &B, needed: usize) -> Result<(), DatagramError> {
    if buf.remaining() < needed {
        return Err(DatagramError::Truncated {
            needed,
            remaining: buf.remaining(),
        });
    }
    Ok(())
}

/// Writes a timestamp at its wire width: `i16` when narrow, `i32` when wide.
///
/// A timestamp outside the narrow range is written as its narrow
/// equivalent, the low 16 bits sign-extended.
pub fn put_network_time(buf: &mut BytesMut, timestamp: NetworkTimestamp, bits: TimeBits) {
    match bits {
        TimeBits::Narrow => {
            let narrow = sign_extend(i64::from(timestamp), TimeBits::Narrow);
            debug_assert!(i16::try_from(narrow).is_ok());
            buf.put_i16_le(narrow as i16)
        }
        TimeBits::Wide => buf.put_i32_le(timestamp),
    }
}

pub fn get_network_time<B: Buf>(buf: &mut B, bits: TimeBits) -> Result<NetworkTimestamp, DatagramError> {
    match bits {
        TimeBits::Narrow => {
            ensure_remaining(buf, 2)?;
            Ok(NetworkTimestamp::from(buf.get_i16_le()))
        }
        TimeBits::Wide => {
            ensure_remaining(buf, 4)?;
            Ok(buf.get_i32_le())
        }
    }
}

/// A clock sample from the authoritative server.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeSyncSample {
    pub network_time: NetworkTimestamp,
    /// Seconds; carried on the wire as whole microseconds
    pub uncertainty: f64,
}

impl TimeSyncSample {
    pub fn new(network_time: NetworkTimestamp, uncertainty: f64) -> Self {
        Self {
            network_time,
            uncertainty,
        }
    }

    pub fn encode(&self, buf: &mut BytesMut, bits: TimeBits) -> Result<(), DatagramError> {
        if !self.uncertainty.is_finite() || self.uncertainty < 0.0 {
            return Err(DatagramError::InvalidUncertainty);
        }
        let micros = (self.uncertainty * 1_000_000.0).round().min(f64::from(u32::MAX)) as u32;
        put_network_time(buf, self.network_time, bits);
        buf.put_u32_le(micros);
        Ok(())
    }

    pub fn decode<B: Buf>(buf: &mut B, bits: TimeBits) -> Result<Self, DatagramError> {
        let network_time = get_network_time(buf, bits)?;
        ensure_remaining(buf, 4)?;
        let micros = buf.get_u32_le();
        Ok(Self {
            network_time,
            uncertainty: f64::from(micros) / 1_000_000.0,
        })
    }
}

/// A peer's answer to our resync request, relaying the timestamp we sent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PeerResyncReport {
    pub originator: DoId,
    /// Narrow timestamp we emitted, returned unchanged
    pub echoed_timestamp: NetworkTimestamp,
    /// The peer's network time, in seconds, when it received our timestamp
    pub peer_server_time: f64,
    pub peer_uncertainty: f64,
}

impl PeerResyncReport {
    pub const ENCODED_LEN: usize = 4 + 2 + 8 + 8;

    pub fn encode(&self, buf: &mut BytesMut) {
        buf.reserve(Self::ENCODED_LEN);
        buf.put_u32_le(self.originator);
        put_network_time(buf, self.echoed_timestamp, TimeBits::Narrow);
        buf.put_f64_le(self.peer_server_time);
        buf.put_f64_le(self.peer_uncertainty);
    }

    pub fn decode<B: Buf>(buf: &mut B) -> Result<Self, DatagramError> {
        ensure_remaining(buf, Self::ENCODED_LEN)?;
        let originator = buf.get_u32_le();
        let echoed_timestamp = get_network_time(buf, TimeBits::Narrow)?;
        let peer_server_time = buf.get_f64_le();
        let peer_uncertainty = buf.get_f64_le();
        Ok(Self {
            originator,
            echoed_timestamp,
            peer_server_time,
            peer_uncertainty,
        })
    }
}
