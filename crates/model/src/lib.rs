#![no_std]
extern crate alloc;

pub mod activity;
pub mod campaign;
pub mod question;
