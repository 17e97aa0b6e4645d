//! Client wire frames.
//!
//! Each frame is a fixed-shape ordered JSON tuple consumed by a transport
//! collaborator: `["EVENT", event]`, `["REQ", subscription_id, filters...]`,
//! `["CLOSE", subscription_id]`, `["NOTICE", message]`. Pure data
//! construction; the engine performs no transport, retry, or reconnect.

use rand::Rng;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use serde_json::Value;

use strand_core::Event;

/// A client-to-relay protocol frame.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientFrame {
    /// Publish a signed event.
    Event(Event),

    /// Open a subscription. Filters are opaque to the engine; matching
    /// them is relay-side behavior.
    Req {
        /// Identifier the relay will echo on matching events.
        subscription_id: String,
        /// Filter objects, flattened into the frame.
        filters: Vec<Value>,
    },

    /// Close a subscription.
    Close {
        /// The subscription to close.
        subscription_id: String,
    },

    /// Human-readable notice.
    Notice {
        /// The message text.
        message: String,
    },
}

impl ClientFrame {
    /// Open a subscription under a fresh random identifier.
    pub fn req(filters: Vec<Value>) -> Self {
        Self::Req {
            subscription_id: random_subscription_id(),
            filters,
        }
    }

    /// Close the given subscription.
    pub fn close(subscription_id: impl Into<String>) -> Self {
        Self::Close {
            subscription_id: subscription_id.into(),
        }
    }

    /// Wrap a human-readable message.
    pub fn notice(message: impl Into<String>) -> Self {
        Self::Notice {
            message: message.into(),
        }
    }

    /// The frame's type label, the first tuple element.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Event(_) => "EVENT",
            Self::Req { .. } => "REQ",
            Self::Close { .. } => "CLOSE",
            Self::Notice { .. } => "NOTICE",
        }
    }

    /// Serialize to the JSON text handed to a transport.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("frame serialization failed")
    }
}

impl Serialize for ClientFrame {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Event(event) => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(self.label())?;
                seq.serialize_element(event)?;
                seq.end()
            }
            Self::Req {
                subscription_id,
                filters,
            } => {
                let mut seq = serializer.serialize_seq(Some(2 + filters.len()))?;
                seq.serialize_element(self.label())?;
                seq.serialize_element(subscription_id)?;
                for filter in filters {
                    seq.serialize_element(filter)?;
                }
                seq.end()
            }
            Self::Close { subscription_id } => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(self.label())?;
                seq.serialize_element(subscription_id)?;
                seq.end()
            }
            Self::Notice { message } => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(self.label())?;
                seq.serialize_element(message)?;
                seq.end()
            }
        }
    }
}

/// Generate a random 32-hex-character subscription identifier.
pub fn random_subscription_id() -> String {
    hex::encode(rand::thread_rng().gen::<[u8; 16]>())
}
