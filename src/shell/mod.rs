// Composition root for the cart.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the file backed key-value store.
// - Mount the cart provider on top of it.

pub mod config;
pub mod state;
