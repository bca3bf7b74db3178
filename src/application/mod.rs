//! Application layer wiring the gateway core to the shop.
//!
//! `CheckoutService` seals outbound payment requests and `CallbackProcessor`
//! authenticates the gateway's answers. Both talk to collaborators only
//! through the ports in `domain::ports`.

pub mod callback;
pub mod checkout;
