#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod console;
pub mod format;
#[cfg(feature = "std")]
pub mod host;
pub mod lesson;
pub mod operand;
pub mod outbox;
pub mod swap;
pub mod token;
