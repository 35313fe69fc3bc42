use crate::apu::Apu;
use crate::controller::{Controller, InputStates};
use crate::cpu::Cpu;
use crate::ppu::Ppu;
use crate::Cartridge;

const RAM_SIZE: usize = 0x0800;

/// The CPU-visible address space: work RAM, PPU and APU registers,
/// controller ports, and the cartridge.
pub struct Bus {
    ram: Box<[u8; RAM_SIZE]>,

    ppu: Ppu,
    apu: Apu,
    cart: Cartridge,
    input0: Controller,
    input1: Controller,

    dma_page: Option<u8>,
}

impl Bus {
    pub fn new(cart: Cartridge) -> Self {
        Self {
            ram: Box::new([0u8; RAM_SIZE]),

            ppu: Ppu::new(),
            apu: Apu::new(),
            cart,
            input0: Controller::default(),
            input1: Controller::default(),

            dma_page: None,
        }
    }

    pub fn read(&mut self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x1fff => self.ram[addr as usize % RAM_SIZE],
            0x2000..=0x3fff => self.ppu.read_register(&self.cart, 0x2000 + addr % 8),
            0x4014 => 0x00,
            0x4015 => self.apu.read_status(),
            0x4016 => self.input0.read(),
            0x4017 => self.input1.read(),
            0x6000..=0xffff => self.cart.read(addr),
            _ => {
                log::warn!("unmapped cpu read at {:#06x}", addr);
                0x00
            }
        }
    }

    pub fn write(&mut self, addr: u16, data: u8) {
        match addr {
            0x0000..=0x1fff => self.ram[addr as usize % RAM_SIZE] = data,
            0x2000..=0x3fff => {
                self.ppu.write_register(&mut self.cart, 0x2000 + addr % 8, data)
            }
            0x4014 => self.dma_page = Some(data),
            0x4016 => {
                self.input0.write(data);
                self.input1.write(data);
            }
            0x4000..=0x4013 | 0x4015 | 0x4017 => self.apu.write(addr, data),
            0x6000..=0xffff => self.cart.write(addr, data),
            _ => log::warn!("unmapped cpu write at {:#06x}", addr),
        }
    }

    /// One PPU dot, plus the mapper's view of it and any resulting
    /// interrupt edges.
    pub(crate) fn tick_ppu_cycle(&mut self, cpu: &mut Cpu) {
        self.ppu.tick(&self.cart);
        if self.ppu.take_nmi() {
            cpu.trigger_nmi();
        }

        let irq = self.cart.tick_ppu(
            self.ppu.dot(),
            self.ppu.scanline(),
            self.ppu.rendering_enabled(),
        );
        if irq {
            cpu.trigger_irq();
        }
    }

    /// One APU cycle; services DMC sample fetches against this bus and
    /// forwards the frame/DMC IRQ line.
    pub(crate) fn tick_apu_cycle(&mut self, cpu: &mut Cpu) {
        self.apu.tick();

        if let Some(addr) = self.apu.dmc_request() {
            let data = self.read(addr);
            self.apu.dmc_response(data);
            cpu.add_stall(4);
        }

        if self.apu.poll_irq() {
            cpu.trigger_irq();
        }
    }

    pub(crate) fn take_dma(&mut self) -> Option<u8> {
        self.dma_page.take()
    }

    pub fn set_input0(&mut self, states: InputStates) {
        self.input0.set_states(states);
    }

    pub fn set_input1(&mut self, states: InputStates) {
        self.input1.set_states(states);
    }

    pub fn ppu(&self) -> &Ppu {
        &self.ppu
    }

    pub(crate) fn ppu_mut(&mut self) -> &mut Ppu {
        &mut self.ppu
    }

    pub fn apu(&self) -> &Apu {
        &self.apu
    }

    pub(crate) fn apu_mut(&mut self) -> &mut Apu {
        &mut self.apu
    }

    pub fn cart(&self) -> &Cartridge {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cartridge {
        &mut self.cart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::build_rom;

    fn bus() -> Bus {
        Bus::new(Cartridge::load(&build_rom(0, 1, 1)).unwrap())
    }

    #[test]
    fn test_ram_mirroring() {
        let mut bus = bus();
        bus.write(0x0123, 0xab);
        assert_eq!(bus.read(0x0123), 0xab);
        assert_eq!(bus.read(0x0923), 0xab);
        assert_eq!(bus.read(0x1123), 0xab);
        assert_eq!(bus.read(0x1923), 0xab);

        bus.write(0x1fff, 0xcd);
        assert_eq!(bus.read(0x07ff), 0xcd);
    }

    #[test]
    fn test_ppu_register_mirroring() {
        let mut bus = bus();
        // $2005 mirrors every 8 bytes up to $3fff
        bus.write(0x2003, 0x42);
        bus.write(0x3ffc, 0x99); // $2004 mirror: oam write at 0x42
        bus.write(0x2003, 0x42);
        assert_eq!(bus.read(0x2004), 0x99);
    }

    #[test]
    fn test_unmapped_reads_are_zero() {
        let mut bus = bus();
        assert_eq!(bus.read(0x4018), 0);
        assert_eq!(bus.read(0x5123), 0);
        assert_eq!(bus.read(0x4014), 0);
    }

    #[test]
    fn test_sram_roundtrip() {
        let mut bus = bus();
        bus.write(0x6000, 0x5a);
        bus.write(0x7fff, 0xa5);
        assert_eq!(bus.read(0x6000), 0x5a);
        assert_eq!(bus.read(0x7fff), 0xa5);
    }

    #[test]
    fn test_controller_ports() {
        let mut bus = bus();
        bus.set_input0(InputStates {
            a: true,
            ..Default::default()
        });
        bus.set_input1(InputStates {
            start: true,
            ..Default::default()
        });
        bus.write(0x4016, 1);
        bus.write(0x4016, 0);

        let pad0: Vec<u8> = (0..8).map(|_| bus.read(0x4016)).collect();
        let pad1: Vec<u8> = (0..8).map(|_| bus.read(0x4017)).collect();
        assert_eq!(pad0, [1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(pad1, [0, 0, 0, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_dma_page_latched() {
        let mut bus = bus();
        bus.write(0x4014, 0x02);
        assert_eq!(bus.take_dma(), Some(0x02));
        assert_eq!(bus.take_dma(), None);
    }
}
