//! # Canonical Certificate Encoding
//!
//! The deterministic byte encoding behind every certificate digest. Fields
//! are RLP-encoded in a fixed order with unpadded big-endian integers, so
//! the same header always produces the same digest on every node.

use crate::hashing::keccak256;
use bridge_types::{Digest, SubnetHeader};
use rlp::RlpStream;

/// Compute the certificate digest of a header.
///
/// This digest, not the header struct, is what validators sign, and it is
/// the key under which the header is admitted into the DAG:
///
/// ```text
/// keccak256( rlp_list[ payload_digest, round_num, number, gap_num ] )
/// ```
///
/// `gap_num` is bound into the digest so a certificate cannot be replayed
/// across committee-revision windows.
pub fn certificate_digest(header: &SubnetHeader) -> Digest {
    let mut stream = RlpStream::new_list(4);
    stream.append(&header.payload_digest.to_vec());
    stream.append(&header.round_num);
    stream.append(&header.number);
    stream.append(&header.gap_num);
    keccak256(&stream.out())
}
