use super::{bank_offset, Mirroring};
use bit_field::BitField;

/// 004, MMC3
///
/// Eight bank registers behind a select/data pair, switchable mirroring,
/// and a scanline counter clocked from the PPU that drives the CPU IRQ
/// line.
pub struct Mapper004 {
    register: usize,
    registers: [u8; 8],
    prg_mode: u8,
    chr_mode: u8,

    prg_offsets: [usize; 4],
    chr_offsets: [usize; 8],
    prg_len: usize,
    chr_len: usize,

    reload: u8,
    counter: u8,
    irq_enable: bool,

    mirroring: Mirroring,
}

impl Mapper004 {
    pub fn new(mirroring: Mirroring, prg_len: usize, chr_len: usize) -> Self {
        let mut mapper = Self {
            register: 0,
            registers: [0; 8],
            prg_mode: 0,
            chr_mode: 0,

            prg_offsets: [0; 4],
            chr_offsets: [0; 8],
            prg_len,
            chr_len,

            reload: 0,
            counter: 0,
            irq_enable: false,

            mirroring,
        };
        mapper.update_offsets();
        mapper
    }

    fn write_register(&mut self, addr: u16, data: u8) {
        let even = addr % 2 == 0;
        match addr {
            0x8000..=0x9fff if even => {
                self.prg_mode = (data >> 6) & 1;
                self.chr_mode = (data >> 7) & 1;
                self.register = (data & 7) as usize;
                self.update_offsets();
            }
            0x8000..=0x9fff => {
                self.registers[self.register] = data;
                self.update_offsets();
            }
            0xa000..=0xbfff if even => {
                self.mirroring = if data.get_bit(0) {
                    Mirroring::Horizontal
                } else {
                    Mirroring::Vertical
                };
            }
            0xa000..=0xbfff => {} // PRG RAM protect, unused
            0xc000..=0xdfff if even => self.reload = data,
            0xc000..=0xdfff => self.counter = 0,
            0xe000..=0xffff if even => self.irq_enable = false,
            0xe000..=0xffff => self.irq_enable = true,
            _ => unreachable!(),
        }
    }

    fn update_offsets(&mut self) {
        let (prg_len, chr_len) = (self.prg_len, self.chr_len);
        let prg = move |index: i32| bank_offset(prg_len, index, 0x2000);
        let chr = move |index: i32| bank_offset(chr_len, index, 0x0400);
        let r = self.registers;

        self.prg_offsets = match self.prg_mode {
            0 => [prg(r[6] as i32), prg(r[7] as i32), prg(-2), prg(-1)],
            _ => [prg(-2), prg(r[7] as i32), prg(r[6] as i32), prg(-1)],
        };
        self.chr_offsets = match self.chr_mode {
            0 => [
                chr((r[0] & 0xfe) as i32),
                chr((r[0] | 0x01) as i32),
                chr((r[1] & 0xfe) as i32),
                chr((r[1] | 0x01) as i32),
                chr(r[2] as i32),
                chr(r[3] as i32),
                chr(r[4] as i32),
                chr(r[5] as i32),
            ],
            _ => [
                chr(r[2] as i32),
                chr(r[3] as i32),
                chr(r[4] as i32),
                chr(r[5] as i32),
                chr((r[0] & 0xfe) as i32),
                chr((r[0] | 0x01) as i32),
                chr((r[1] & 0xfe) as i32),
                chr((r[1] | 0x01) as i32),
            ],
        };
    }
}

impl super::Mapper for Mapper004 {
    fn read_prg(&self, prg: &[u8], addr: u16) -> u8 {
        // 4 x 8 KB PRG banks
        let addr = addr as usize - 0x8000;
        prg[self.prg_offsets[addr / 0x2000] + addr % 0x2000]
    }

    fn write_prg(&mut self, _prg: &mut [u8], addr: u16, data: u8) {
        self.write_register(addr, data);
    }

    fn read_chr(&self, chr: &[u8], addr: u16) -> u8 {
        // 8 x 1 KB CHR banks
        let addr = addr as usize;
        chr[self.chr_offsets[addr / 0x0400] + addr % 0x0400]
    }

    fn write_chr(&mut self, chr: &mut [u8], addr: u16, data: u8) {
        let addr = addr as usize;
        chr[self.chr_offsets[addr / 0x0400] + addr % 0x0400] = data;
    }

    /// Clocked once per PPU cycle; the counter only advances on dot 280 of
    /// render lines while rendering is enabled.
    fn tick_ppu(&mut self, dot: usize, scanline: usize, rendering: bool) -> bool {
        if dot != 280 || !rendering {
            return false;
        }
        if (240..261).contains(&scanline) {
            return false;
        }
        if self.counter == 0 {
            self.counter = self.reload;
            false
        } else {
            self.counter -= 1;
            self.counter == 0 && self.irq_enable
        }
    }

    fn mirroring(&self) -> Mirroring {
        self.mirroring
    }
}
