#![no_std]

pub mod buttons;
pub mod time;
pub mod ws2812;
