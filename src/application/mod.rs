//! Application layer holding the checkout page controller.
//!
//! `CheckoutController` owns the page state and orchestrates the settlement
//! load, order submission and logout through the domain ports.

pub mod checkout;
