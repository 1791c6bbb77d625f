//! Network layer for the storefront.
//!
//! `api` is the only module that talks HTTP; everything above it sees the
//! `catalog` source traits.

pub mod api;
