//! Transport layer: wire-format details (query encoding and JSON decoding).

mod outbound;

pub use outbound::{
    ResourceReference, TransportError, decode_resource_reference, encode_outbound_query,
};
