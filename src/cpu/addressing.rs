use super::Cpu;
use crate::Bus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum AddrMode {
    IMP,
    ACC,
    IMM,
    ZEP,
    ZPX,
    ZPY,
    IZX,
    IZY,
    ABS,
    ABX,
    ABY,
    IND,
    REL,
}

#[rustfmt::skip]
pub const ADDR_MODES: [AddrMode; 256] = {
    use AddrMode::*;
    //  00   01   02   03   04   05   06   07   08   09   0a   0b   0c   0d   0e   0f
    [
        IMP, IZX, IMP, IZX, ZEP, ZEP, ZEP, ZEP, IMP, IMM, ACC, IMM, ABS, ABS, ABS, ABS, // 00
        REL, IZY, IMP, IZY, ZPX, ZPX, ZPX, ZPX, IMP, ABY, IMP, ABY, ABX, ABX, ABX, ABX, // 10
        ABS, IZX, IMP, IZX, ZEP, ZEP, ZEP, ZEP, IMP, IMM, ACC, IMM, ABS, ABS, ABS, ABS, // 20
        REL, IZY, IMP, IZY, ZPX, ZPX, ZPX, ZPX, IMP, ABY, IMP, ABY, ABX, ABX, ABX, ABX, // 30
        IMP, IZX, IMP, IZX, ZEP, ZEP, ZEP, ZEP, IMP, IMM, ACC, IMM, ABS, ABS, ABS, ABS, // 40
        REL, IZY, IMP, IZY, ZPX, ZPX, ZPX, ZPX, IMP, ABY, IMP, ABY, ABX, ABX, ABX, ABX, // 50
        IMP, IZX, IMP, IZX, ZEP, ZEP, ZEP, ZEP, IMP, IMM, ACC, IMM, IND, ABS, ABS, ABS, // 60
        REL, IZY, IMP, IZY, ZPX, ZPX, ZPX, ZPX, IMP, ABY, IMP, ABY, ABX, ABX, ABX, ABX, // 70
        IMM, IZX, IMM, IZX, ZEP, ZEP, ZEP, ZEP, IMP, IMM, IMP, IMM, ABS, ABS, ABS, ABS, // 80
        REL, IZY, IMP, IZY, ZPX, ZPX, ZPY, ZPY, IMP, ABY, IMP, ABY, ABX, ABX, ABY, ABY, // 90
        IMM, IZX, IMM, IZX, ZEP, ZEP, ZEP, ZEP, IMP, IMM, IMP, IMM, ABS, ABS, ABS, ABS, // a0
        REL, IZY, IMP, IZY, ZPX, ZPX, ZPY, ZPY, IMP, ABY, IMP, ABY, ABX, ABX, ABY, ABY, // b0
        IMM, IZX, IMM, IZX, ZEP, ZEP, ZEP, ZEP, IMP, IMM, IMP, IMM, ABS, ABS, ABS, ABS, // c0
        REL, IZY, IMP, IZY, ZPX, ZPX, ZPX, ZPX, IMP, ABY, IMP, ABY, ABX, ABX, ABX, ABX, // d0
        IMM, IZX, IMM, IZX, ZEP, ZEP, ZEP, ZEP, IMP, IMM, IMP, IMM, ABS, ABS, ABS, ABS, // e0
        REL, IZY, IMP, IZY, ZPX, ZPX, ZPX, ZPX, IMP, ABY, IMP, ABY, ABX, ABX, ABX, ABX, // f0
    ]
};

pub(super) fn pages_differ(a: u16, b: u16) -> bool {
    a & 0xff00 != b & 0xff00
}

impl Cpu {
    /// Resolves the operand address for `op` without moving the program
    /// counter; the size table advances it afterwards.
    pub(super) fn addressing(&mut self, op: u8, bus: &mut Bus) {
        self.op_mode = ADDR_MODES[op as usize];
        self.op_address = 0;
        self.cross_page = false;

        let operand_pc = self.pc.wrapping_add(1);
        match self.op_mode {
            AddrMode::IMP | AddrMode::ACC => {}
            AddrMode::IMM => {
                self.op_address = operand_pc;
            }
            AddrMode::ZEP => {
                self.op_address = bus.read(operand_pc) as u16;
            }
            AddrMode::ZPX => {
                self.op_address = bus.read(operand_pc).wrapping_add(self.x) as u16;
            }
            AddrMode::ZPY => {
                self.op_address = bus.read(operand_pc).wrapping_add(self.y) as u16;
            }
            AddrMode::IZX => {
                let base = bus.read(operand_pc).wrapping_add(self.x);
                self.op_address = self.read_word_bug(base as u16, bus);
            }
            AddrMode::IZY => {
                let zp = bus.read(operand_pc) as u16;
                let base = self.read_word_bug(zp, bus);
                self.op_address = base.wrapping_add(self.y as u16);
                self.cross_page = pages_differ(base, self.op_address);
            }
            AddrMode::ABS => {
                self.op_address = self.read_word(operand_pc, bus);
            }
            AddrMode::ABX => {
                let base = self.read_word(operand_pc, bus);
                self.op_address = base.wrapping_add(self.x as u16);
                self.cross_page = pages_differ(base, self.op_address);
            }
            AddrMode::ABY => {
                let base = self.read_word(operand_pc, bus);
                self.op_address = base.wrapping_add(self.y as u16);
                self.cross_page = pages_differ(base, self.op_address);
            }
            AddrMode::IND => {
                let base = self.read_word(operand_pc, bus);
                self.op_address = self.read_word_bug(base, bus);
            }
            AddrMode::REL => {
                let offset = bus.read(operand_pc) as u16;
                self.op_address = if offset < 0x80 {
                    self.pc.wrapping_add(2).wrapping_add(offset)
                } else {
                    self.pc.wrapping_add(2).wrapping_add(offset).wrapping_sub(0x100)
                };
            }
        }
    }
}
