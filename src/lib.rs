//! myip: list the IP addresses of this machine.
//!
//! A library for discovering loopback, local network and public IPv4/IPv6
//! addresses concurrently and collecting them into a printable report.

pub mod config;
pub mod network;
pub mod public;
pub mod report;
pub mod result;
