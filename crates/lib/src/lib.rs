//! ticketbot core library — WhatsApp webhook, menu state machine, user directory,
//! and ticket sink used by the `ticketbot` binary.

pub mod bot;
pub mod channels;
pub mod config;
pub mod directory;
pub mod gateway;
pub mod init;
pub mod menu;
pub mod session;
pub mod tickets;
