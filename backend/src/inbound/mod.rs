//! Inbound adapters translating external requests into port calls.

pub mod http;
