#![allow(warnings)]

pub mod arguments;
pub mod configs;
pub mod constants;
pub mod entry;
pub mod errors; // Structured error handling
pub mod lockup; // Token-lock program client
pub mod logger;
pub mod pool_price;
pub mod pricing;
pub mod rpc;
pub mod scheduler; // Delayed burn task
pub mod token;
