use crate::apu::SampleQueue;
use crate::bus::Bus;
use crate::cart::{Cartridge, LoadError};
use crate::controller::InputStates;
use crate::cpu::Cpu;
use crate::ppu::Frame;
use std::sync::Arc;

/// The machine: CPU plus everything reachable from its address bus.
///
/// Stepping is CPU-major; each executed instruction is followed by three
/// PPU dots and one APU cycle per CPU cycle.
pub struct Console {
    cpu: Cpu,
    bus: Bus,
}

impl Console {
    /// Builds a console around an iNES image and runs the power-on reset.
    pub fn load(data: &[u8]) -> Result<Self, LoadError> {
        Ok(Self::new(Cartridge::load(data)?))
    }

    pub fn new(cart: Cartridge) -> Self {
        let mut console = Self {
            cpu: Cpu::new(),
            bus: Bus::new(cart),
        };
        console.reset();
        console
    }

    pub fn reset(&mut self) {
        self.cpu.reset(&mut self.bus);
    }

    /// Advances the simulation by `seconds` of emulated wall time.
    pub fn step_seconds(&mut self, seconds: f64) {
        let mut budget = (crate::CPU_FREQUENCY * seconds) as i64;
        while budget > 0 {
            budget -= self.step() as i64;
        }
    }

    /// One CPU step and the PPU/APU cycles it pays for; returns the CPU
    /// cycles consumed.
    pub fn step(&mut self) -> u32 {
        let cycles = self.cpu.step(&mut self.bus);

        if let Some(page) = self.bus.take_dma() {
            self.run_oam_dma(page);
        }

        for _ in 0..cycles * 3 {
            self.bus.tick_ppu_cycle(&mut self.cpu);
        }
        for _ in 0..cycles {
            self.bus.tick_apu_cycle(&mut self.cpu);
        }

        cycles
    }

    /// Copies a 256-byte page into OAM and stalls the CPU for 513 cycles,
    /// 514 when the write lands on an odd cycle.
    fn run_oam_dma(&mut self, page: u8) {
        let base = (page as u16) << 8;
        for i in 0..256u16 {
            let data = self.bus.read(base + i);
            self.bus.ppu_mut().write_oam(data);
        }
        self.cpu.add_stall(513 + (self.cpu.cycles() % 2) as u32);
    }

    /// Borrow of the most recently completed frame.
    pub fn frame(&self) -> &Frame {
        self.bus.ppu().frame_buffer()
    }

    pub fn set_buttons1(&mut self, states: InputStates) {
        self.bus.set_input0(states);
    }

    pub fn set_buttons2(&mut self, states: InputStates) {
        self.bus.set_input1(states);
    }

    /// Registers the queue the shell drains from its audio callback.
    pub fn set_audio_sink(&mut self, sink: Arc<SampleQueue>) {
        self.bus.apu_mut().set_sink(sink);
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }
}
