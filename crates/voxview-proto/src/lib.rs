//! Wire contract for the Voxview automation interface.
//!
//! The Voxview workstation exposes its object model over gRPC; this crate
//! holds the proto3 definition of that contract and the stubs
//! [tonic-prost-build](https://docs.rs/tonic-prost-build) generates from it.
//! The contract is owned by the host application: nothing here may be
//! "improved" without a matching host release.
//!
//! The `client` and `server` cargo features gate which stubs are generated.
//! SDK consumers only need `client`; the `server` stub exists so tests can
//! stand up an in-process host.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Generated protobuf types and service stubs for `voxview.v1`
pub mod v1 {
    #![allow(missing_docs)]
    #![allow(clippy::all)]
    #![allow(clippy::pedantic)]
    tonic::include_proto!("voxview.v1");
}

/// In-band status value the host uses for a successful call.
pub const STATUS_OK: i32 = 1;
