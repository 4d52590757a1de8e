//! Whitespace-separated integer input, as read by every stdin program.

pub mod scanner;

pub use scanner::TokenReader;
