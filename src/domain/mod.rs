//! Checkout domain: money, settlement line items and addresses, order
//! commit messages, navigation targets, and the ports the controller
//! drives.

pub mod money;
pub mod navigation;
pub mod order;
pub mod ports;
pub mod settlement;
