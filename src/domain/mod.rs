//! Gateway protocol core: field tables, request building, sealing and
//! callback parsing. Everything here is synchronous and free of I/O.

pub mod amount;
pub mod brand;
pub mod currency;
pub mod fields;
pub mod order;
pub mod parameters;
pub mod ports;
pub mod request;
pub mod response;
pub mod response_codes;
pub mod seal;
