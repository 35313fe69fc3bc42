#![allow(clippy::identity_op)]

pub mod apu;
pub mod bus;
pub mod cart;
pub mod console;
pub mod controller;
pub mod cpu;
pub mod ppu;

pub use apu::SampleQueue;
pub use bus::Bus;
pub use cart::{Cartridge, LoadError, Mirroring};
pub use console::Console;
pub use controller::InputStates;
pub use cpu::Cpu;
pub use ppu::{Frame, Ppu};

/// NES NTSC 2A03
pub const CPU_FREQUENCY: f64 = 1_789_773.0;

/// frame counter sequencer rate (240 Hz)
pub const FRAME_COUNTER_RATE: f64 = CPU_FREQUENCY / 240.0;

/// cpu cycles per emitted audio sample
pub const SAMPLE_RATE: f64 = CPU_FREQUENCY / 44100.0 / 2.0;
