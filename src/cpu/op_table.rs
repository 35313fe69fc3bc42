use super::addressing::{pages_differ, AddrMode};
use super::Cpu;
use crate::Bus;

type Op = fn(&mut Cpu, &mut Bus);

#[rustfmt::skip]
pub const OP_FUNCS: [Op; 256] = [
//     00        01        02        03        04        05        06        07        08        09        0a        0b        0c        0d        0e        0f
    Cpu::brk, Cpu::ora, Cpu::kil, Cpu::slo, Cpu::nop, Cpu::ora, Cpu::asl, Cpu::slo, Cpu::php, Cpu::ora, Cpu::asl, Cpu::anc, Cpu::nop, Cpu::ora, Cpu::asl, Cpu::slo, // 00
    Cpu::bpl, Cpu::ora, Cpu::kil, Cpu::slo, Cpu::nop, Cpu::ora, Cpu::asl, Cpu::slo, Cpu::clc, Cpu::ora, Cpu::nop, Cpu::slo, Cpu::nop, Cpu::ora, Cpu::asl, Cpu::slo, // 10
    Cpu::jsr, Cpu::and, Cpu::kil, Cpu::rla, Cpu::bit, Cpu::and, Cpu::rol, Cpu::rla, Cpu::plp, Cpu::and, Cpu::rol, Cpu::anc, Cpu::bit, Cpu::and, Cpu::rol, Cpu::rla, // 20
    Cpu::bmi, Cpu::and, Cpu::kil, Cpu::rla, Cpu::nop, Cpu::and, Cpu::rol, Cpu::rla, Cpu::sec, Cpu::and, Cpu::nop, Cpu::rla, Cpu::nop, Cpu::and, Cpu::rol, Cpu::rla, // 30
    Cpu::rti, Cpu::eor, Cpu::kil, Cpu::sre, Cpu::nop, Cpu::eor, Cpu::lsr, Cpu::sre, Cpu::pha, Cpu::eor, Cpu::lsr, Cpu::alr, Cpu::jmp, Cpu::eor, Cpu::lsr, Cpu::sre, // 40
    Cpu::bvc, Cpu::eor, Cpu::kil, Cpu::sre, Cpu::nop, Cpu::eor, Cpu::lsr, Cpu::sre, Cpu::cli, Cpu::eor, Cpu::nop, Cpu::sre, Cpu::nop, Cpu::eor, Cpu::lsr, Cpu::sre, // 50
    Cpu::rts, Cpu::adc, Cpu::kil, Cpu::rra, Cpu::nop, Cpu::adc, Cpu::ror, Cpu::rra, Cpu::pla, Cpu::adc, Cpu::ror, Cpu::arr, Cpu::jmp, Cpu::adc, Cpu::ror, Cpu::rra, // 60
    Cpu::bvs, Cpu::adc, Cpu::kil, Cpu::rra, Cpu::nop, Cpu::adc, Cpu::ror, Cpu::rra, Cpu::sei, Cpu::adc, Cpu::nop, Cpu::rra, Cpu::nop, Cpu::adc, Cpu::ror, Cpu::rra, // 70
    Cpu::nop, Cpu::sta, Cpu::nop, Cpu::sax, Cpu::sty, Cpu::sta, Cpu::stx, Cpu::sax, Cpu::dey, Cpu::nop, Cpu::txa, Cpu::xaa, Cpu::sty, Cpu::sta, Cpu::stx, Cpu::sax, // 80
    Cpu::bcc, Cpu::sta, Cpu::kil, Cpu::ahx, Cpu::sty, Cpu::sta, Cpu::stx, Cpu::sax, Cpu::tya, Cpu::sta, Cpu::txs, Cpu::tas, Cpu::shy, Cpu::sta, Cpu::shx, Cpu::ahx, // 90
    Cpu::ldy, Cpu::lda, Cpu::ldx, Cpu::lax, Cpu::ldy, Cpu::lda, Cpu::ldx, Cpu::lax, Cpu::tay, Cpu::lda, Cpu::tax, Cpu::lax, Cpu::ldy, Cpu::lda, Cpu::ldx, Cpu::lax, // a0
    Cpu::bcs, Cpu::lda, Cpu::kil, Cpu::lax, Cpu::ldy, Cpu::lda, Cpu::ldx, Cpu::lax, Cpu::clv, Cpu::lda, Cpu::tsx, Cpu::las, Cpu::ldy, Cpu::lda, Cpu::ldx, Cpu::lax, // b0
    Cpu::cpy, Cpu::cmp, Cpu::nop, Cpu::dcp, Cpu::cpy, Cpu::cmp, Cpu::dec, Cpu::dcp, Cpu::iny, Cpu::cmp, Cpu::dex, Cpu::axs, Cpu::cpy, Cpu::cmp, Cpu::dec, Cpu::dcp, // c0
    Cpu::bne, Cpu::cmp, Cpu::kil, Cpu::dcp, Cpu::nop, Cpu::cmp, Cpu::dec, Cpu::dcp, Cpu::cld, Cpu::cmp, Cpu::nop, Cpu::dcp, Cpu::nop, Cpu::cmp, Cpu::dec, Cpu::dcp, // d0
    Cpu::cpx, Cpu::sbc, Cpu::nop, Cpu::isc, Cpu::cpx, Cpu::sbc, Cpu::inc, Cpu::isc, Cpu::inx, Cpu::sbc, Cpu::nop, Cpu::sbc, Cpu::cpx, Cpu::sbc, Cpu::inc, Cpu::isc, // e0
    Cpu::beq, Cpu::sbc, Cpu::kil, Cpu::isc, Cpu::nop, Cpu::sbc, Cpu::inc, Cpu::isc, Cpu::sed, Cpu::sbc, Cpu::nop, Cpu::isc, Cpu::nop, Cpu::sbc, Cpu::inc, Cpu::isc, // f0
];

#[rustfmt::skip]
pub const OP_NAMES: [&str; 256] = [
//   00     01     02     03     04     05     06     07     08     09     0a     0b     0c     0d     0e     0f
    "BRK", "ORA", "KIL", "SLO", "NOP", "ORA", "ASL", "SLO", "PHP", "ORA", "ASL", "ANC", "NOP", "ORA", "ASL", "SLO", // 00
    "BPL", "ORA", "KIL", "SLO", "NOP", "ORA", "ASL", "SLO", "CLC", "ORA", "NOP", "SLO", "NOP", "ORA", "ASL", "SLO", // 10
    "JSR", "AND", "KIL", "RLA", "BIT", "AND", "ROL", "RLA", "PLP", "AND", "ROL", "ANC", "BIT", "AND", "ROL", "RLA", // 20
    "BMI", "AND", "KIL", "RLA", "NOP", "AND", "ROL", "RLA", "SEC", "AND", "NOP", "RLA", "NOP", "AND", "ROL", "RLA", // 30
    "RTI", "EOR", "KIL", "SRE", "NOP", "EOR", "LSR", "SRE", "PHA", "EOR", "LSR", "ALR", "JMP", "EOR", "LSR", "SRE", // 40
    "BVC", "EOR", "KIL", "SRE", "NOP", "EOR", "LSR", "SRE", "CLI", "EOR", "NOP", "SRE", "NOP", "EOR", "LSR", "SRE", // 50
    "RTS", "ADC", "KIL", "RRA", "NOP", "ADC", "ROR", "RRA", "PLA", "ADC", "ROR", "ARR", "JMP", "ADC", "ROR", "RRA", // 60
    "BVS", "ADC", "KIL", "RRA", "NOP", "ADC", "ROR", "RRA", "SEI", "ADC", "NOP", "RRA", "NOP", "ADC", "ROR", "RRA", // 70
    "NOP", "STA", "NOP", "SAX", "STY", "STA", "STX", "SAX", "DEY", "NOP", "TXA", "XAA", "STY", "STA", "STX", "SAX", // 80
    "BCC", "STA", "KIL", "AHX", "STY", "STA", "STX", "SAX", "TYA", "STA", "TXS", "TAS", "SHY", "STA", "SHX", "AHX", // 90
    "LDY", "LDA", "LDX", "LAX", "LDY", "LDA", "LDX", "LAX", "TAY", "LDA", "TAX", "LAX", "LDY", "LDA", "LDX", "LAX", // a0
    "BCS", "LDA", "KIL", "LAX", "LDY", "LDA", "LDX", "LAX", "CLV", "LDA", "TSX", "LAS", "LDY", "LDA", "LDX", "LAX", // b0
    "CPY", "CMP", "NOP", "DCP", "CPY", "CMP", "DEC", "DCP", "INY", "CMP", "DEX", "AXS", "CPY", "CMP", "DEC", "DCP", // c0
    "BNE", "CMP", "KIL", "DCP", "NOP", "CMP", "DEC", "DCP", "CLD", "CMP", "NOP", "DCP", "NOP", "CMP", "DEC", "DCP", // d0
    "CPX", "SBC", "NOP", "ISC", "CPX", "SBC", "INC", "ISC", "INX", "SBC", "NOP", "SBC", "CPX", "SBC", "INC", "ISC", // e0
    "BEQ", "SBC", "KIL", "ISC", "NOP", "SBC", "INC", "ISC", "SED", "SBC", "NOP", "ISC", "NOP", "SBC", "INC", "ISC", // f0
];

#[rustfmt::skip]
pub const OP_SIZES: [u8; 256] = [
//  0  1  2  3  4  5  6  7  8  9  a  b  c  d  e  f
    1, 2, 0, 0, 2, 2, 2, 0, 1, 2, 1, 0, 3, 3, 3, 0, // 00
    2, 2, 0, 0, 2, 2, 2, 0, 1, 3, 1, 0, 3, 3, 3, 0, // 10
    3, 2, 0, 0, 2, 2, 2, 0, 1, 2, 1, 0, 3, 3, 3, 0, // 20
    2, 2, 0, 0, 2, 2, 2, 0, 1, 3, 1, 0, 3, 3, 3, 0, // 30
    1, 2, 0, 0, 2, 2, 2, 0, 1, 2, 1, 0, 3, 3, 3, 0, // 40
    2, 2, 0, 0, 2, 2, 2, 0, 1, 3, 1, 0, 3, 3, 3, 0, // 50
    1, 2, 0, 0, 2, 2, 2, 0, 1, 2, 1, 0, 3, 3, 3, 0, // 60
    2, 2, 0, 0, 2, 2, 2, 0, 1, 3, 1, 0, 3, 3, 3, 0, // 70
    2, 2, 0, 0, 2, 2, 2, 0, 1, 0, 1, 0, 3, 3, 3, 0, // 80
    2, 2, 0, 0, 2, 2, 2, 0, 1, 3, 1, 0, 0, 3, 0, 0, // 90
    2, 2, 2, 0, 2, 2, 2, 0, 1, 2, 1, 0, 3, 3, 3, 0, // a0
    2, 2, 0, 0, 2, 2, 2, 0, 1, 3, 1, 0, 3, 3, 3, 0, // b0
    2, 2, 0, 0, 2, 2, 2, 0, 1, 2, 1, 0, 3, 3, 3, 0, // c0
    2, 2, 0, 0, 2, 2, 2, 0, 1, 3, 1, 0, 3, 3, 3, 0, // d0
    2, 2, 0, 0, 2, 2, 2, 0, 1, 2, 1, 0, 3, 3, 3, 0, // e0
    2, 2, 0, 0, 2, 2, 2, 0, 1, 3, 1, 0, 3, 3, 3, 0, // f0
];

#[rustfmt::skip]
pub const OP_CYCLES: [u8; 256] = [
//  0  1  2  3  4  5  6  7  8  9  a  b  c  d  e  f
    7, 6, 2, 8, 3, 3, 5, 5, 3, 2, 2, 2, 4, 4, 6, 6, // 00
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, // 10
    6, 6, 2, 8, 3, 3, 5, 5, 4, 2, 2, 2, 4, 4, 6, 6, // 20
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, // 30
    6, 6, 2, 8, 3, 3, 5, 5, 3, 2, 2, 2, 3, 4, 6, 6, // 40
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, // 50
    6, 6, 2, 8, 3, 3, 5, 5, 4, 2, 2, 2, 5, 4, 6, 6, // 60
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, // 70
    2, 6, 2, 6, 3, 3, 3, 3, 2, 2, 2, 2, 4, 4, 4, 4, // 80
    2, 6, 2, 6, 4, 4, 4, 4, 2, 5, 2, 5, 5, 5, 5, 5, // 90
    2, 6, 2, 6, 3, 3, 3, 3, 2, 2, 2, 2, 4, 4, 4, 4, // a0
    2, 5, 2, 5, 4, 4, 4, 4, 2, 4, 2, 4, 4, 4, 4, 4, // b0
    2, 6, 2, 8, 3, 3, 5, 5, 2, 2, 2, 2, 4, 4, 6, 6, // c0
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, // d0
    2, 6, 2, 8, 3, 3, 5, 5, 2, 2, 2, 2, 4, 4, 6, 6, // e0
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, // f0
];

#[rustfmt::skip]
pub const OP_PAGE_CYCLES: [u8; 256] = [
//  0  1  2  3  4  5  6  7  8  9  a  b  c  d  e  f
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 00
    1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0, // 10
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 20
    1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0, // 30
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 40
    1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0, // 50
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 60
    1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0, // 70
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 80
    1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 90
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // a0
    1, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 1, 1, 1, 1, // b0
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // c0
    1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0, // d0
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // e0
    1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0, // f0
];

impl Cpu {
    fn operand(&mut self, bus: &mut Bus) -> u8 {
        match self.op_mode {
            AddrMode::ACC => self.a,
            _ => bus.read(self.op_address),
        }
    }

    fn write_back(&mut self, bus: &mut Bus, value: u8) {
        match self.op_mode {
            AddrMode::ACC => self.a = value,
            _ => bus.write(self.op_address, value),
        }
    }

    /// one extra cycle for taking a branch, another one across a page
    fn branch(&mut self) {
        self.cycles += 1;
        if pages_differ(self.pc, self.op_address) {
            self.cycles += 1;
        }
        self.pc = self.op_address;
    }

    fn compare(&mut self, a: u8, b: u8) {
        self.p.set_zn(a.wrapping_sub(b));
        self.p.c = a >= b;
    }
}

/// arith
impl Cpu {
    fn _adc(&mut self, b: u8) {
        let a = self.a;
        let c = self.p.c as u16;
        let sum = a as u16 + b as u16 + c;
        self.a = sum as u8;
        self.p.c = sum > 0xff;
        self.p.v = (a ^ b) & 0x80 == 0 && (a ^ self.a) & 0x80 != 0;
        self.p.set_zn(self.a);
    }

    fn adc(&mut self, bus: &mut Bus) {
        let b = self.operand(bus);
        self._adc(b);
    }

    /// A - M - (1 - C) == A + !M + C
    fn sbc(&mut self, bus: &mut Bus) {
        let b = self.operand(bus);
        self._adc(!b);
    }

    fn and(&mut self, bus: &mut Bus) {
        self.a &= self.operand(bus);
        self.p.set_zn(self.a);
    }

    fn ora(&mut self, bus: &mut Bus) {
        self.a |= self.operand(bus);
        self.p.set_zn(self.a);
    }

    fn eor(&mut self, bus: &mut Bus) {
        self.a ^= self.operand(bus);
        self.p.set_zn(self.a);
    }

    fn bit(&mut self, bus: &mut Bus) {
        let value = self.operand(bus);
        self.p.v = (value & (1 << 6)) != 0;
        self.p.z = value & self.a == 0;
        self.p.n = (value & 0x80) != 0;
    }

    fn cmp(&mut self, bus: &mut Bus) {
        let value = self.operand(bus);
        self.compare(self.a, value);
    }

    fn cpx(&mut self, bus: &mut Bus) {
        let value = self.operand(bus);
        self.compare(self.x, value);
    }

    fn cpy(&mut self, bus: &mut Bus) {
        let value = self.operand(bus);
        self.compare(self.y, value);
    }

    fn inc(&mut self, bus: &mut Bus) {
        let value = self.operand(bus).wrapping_add(1);
        self.write_back(bus, value);
        self.p.set_zn(value);
    }

    fn dec(&mut self, bus: &mut Bus) {
        let value = self.operand(bus).wrapping_sub(1);
        self.write_back(bus, value);
        self.p.set_zn(value);
    }

    fn inx(&mut self, _: &mut Bus) {
        self.x = self.x.wrapping_add(1);
        self.p.set_zn(self.x);
    }

    fn iny(&mut self, _: &mut Bus) {
        self.y = self.y.wrapping_add(1);
        self.p.set_zn(self.y);
    }

    fn dex(&mut self, _: &mut Bus) {
        self.x = self.x.wrapping_sub(1);
        self.p.set_zn(self.x);
    }

    fn dey(&mut self, _: &mut Bus) {
        self.y = self.y.wrapping_sub(1);
        self.p.set_zn(self.y);
    }
}

/// shift
impl Cpu {
    fn asl(&mut self, bus: &mut Bus) {
        let value = self.operand(bus);
        self.p.c = (value >> 7) & 1 != 0;
        let value = value << 1;
        self.write_back(bus, value);
        self.p.set_zn(value);
    }

    fn lsr(&mut self, bus: &mut Bus) {
        let value = self.operand(bus);
        self.p.c = value & 1 != 0;
        let value = value >> 1;
        self.write_back(bus, value);
        self.p.set_zn(value);
    }

    fn rol(&mut self, bus: &mut Bus) {
        let c = self.p.c as u8;
        let value = self.operand(bus);
        self.p.c = (value >> 7) & 1 != 0;
        let value = (value << 1) | c;
        self.write_back(bus, value);
        self.p.set_zn(value);
    }

    fn ror(&mut self, bus: &mut Bus) {
        let c = self.p.c as u8;
        let value = self.operand(bus);
        self.p.c = value & 1 != 0;
        let value = (value >> 1) | (c << 7);
        self.write_back(bus, value);
        self.p.set_zn(value);
    }
}

/// load / store / transfer
impl Cpu {
    fn lda(&mut self, bus: &mut Bus) {
        self.a = self.operand(bus);
        self.p.set_zn(self.a);
    }

    fn ldx(&mut self, bus: &mut Bus) {
        self.x = self.operand(bus);
        self.p.set_zn(self.x);
    }

    fn ldy(&mut self, bus: &mut Bus) {
        self.y = self.operand(bus);
        self.p.set_zn(self.y);
    }

    fn sta(&mut self, bus: &mut Bus) {
        bus.write(self.op_address, self.a);
    }

    fn stx(&mut self, bus: &mut Bus) {
        bus.write(self.op_address, self.x);
    }

    fn sty(&mut self, bus: &mut Bus) {
        bus.write(self.op_address, self.y);
    }

    fn tax(&mut self, _: &mut Bus) {
        self.x = self.a;
        self.p.set_zn(self.x);
    }

    fn tay(&mut self, _: &mut Bus) {
        self.y = self.a;
        self.p.set_zn(self.y);
    }

    fn txa(&mut self, _: &mut Bus) {
        self.a = self.x;
        self.p.set_zn(self.a);
    }

    fn tya(&mut self, _: &mut Bus) {
        self.a = self.y;
        self.p.set_zn(self.a);
    }

    fn tsx(&mut self, _: &mut Bus) {
        self.x = self.sp;
        self.p.set_zn(self.x);
    }

    fn txs(&mut self, _: &mut Bus) {
        self.sp = self.x;
    }
}

/// stack
impl Cpu {
    fn pha(&mut self, bus: &mut Bus) {
        self.push_byte(self.a, bus);
    }

    fn pla(&mut self, bus: &mut Bus) {
        self.a = self.pop_byte(bus);
        self.p.set_zn(self.a);
    }

    fn php(&mut self, bus: &mut Bus) {
        self.push_byte(self.p.to_u8() | 0x10, bus);
    }

    fn plp(&mut self, bus: &mut Bus) {
        let flags = self.pop_byte(bus);
        self.p = (flags & 0xef | 0x20).into();
    }
}

/// jump / interrupt
impl Cpu {
    fn jmp(&mut self, _: &mut Bus) {
        self.pc = self.op_address;
    }

    fn jsr(&mut self, bus: &mut Bus) {
        self.push_word(self.pc.wrapping_sub(1), bus);
        self.pc = self.op_address;
    }

    fn rts(&mut self, bus: &mut Bus) {
        self.pc = self.pop_word(bus).wrapping_add(1);
    }

    fn rti(&mut self, bus: &mut Bus) {
        let flags = self.pop_byte(bus);
        self.p = (flags & 0xef | 0x20).into();
        self.pc = self.pop_word(bus);
    }

    fn brk(&mut self, bus: &mut Bus) {
        self.push_word(self.pc, bus);
        self.push_byte(self.p.to_u8() | 0x10, bus);
        self.p.i = true;
        self.pc = self.read_word(super::IRQ_VECTOR, bus);
    }
}

/// branch
impl Cpu {
    fn bpl(&mut self, _: &mut Bus) {
        if !self.p.n {
            self.branch();
        }
    }

    fn bmi(&mut self, _: &mut Bus) {
        if self.p.n {
            self.branch();
        }
    }

    fn bvc(&mut self, _: &mut Bus) {
        if !self.p.v {
            self.branch();
        }
    }

    fn bvs(&mut self, _: &mut Bus) {
        if self.p.v {
            self.branch();
        }
    }

    fn bcc(&mut self, _: &mut Bus) {
        if !self.p.c {
            self.branch();
        }
    }

    fn bcs(&mut self, _: &mut Bus) {
        if self.p.c {
            self.branch();
        }
    }

    fn bne(&mut self, _: &mut Bus) {
        if !self.p.z {
            self.branch();
        }
    }

    fn beq(&mut self, _: &mut Bus) {
        if self.p.z {
            self.branch();
        }
    }
}

/// flags
impl Cpu {
    fn clc(&mut self, _: &mut Bus) {
        self.p.c = false;
    }

    fn sec(&mut self, _: &mut Bus) {
        self.p.c = true;
    }

    fn cli(&mut self, _: &mut Bus) {
        self.p.i = false;
    }

    fn sei(&mut self, _: &mut Bus) {
        self.p.i = true;
    }

    fn clv(&mut self, _: &mut Bus) {
        self.p.v = false;
    }

    fn cld(&mut self, _: &mut Bus) {
        self.p.d = false;
    }

    fn sed(&mut self, _: &mut Bus) {
        self.p.d = true;
    }

    fn nop(&mut self, _: &mut Bus) {}
}

/// undocumented opcodes execute as no-ops; the size and cycle tables
/// still account for them
impl Cpu {
    fn kil(&mut self, _: &mut Bus) {}
    fn slo(&mut self, _: &mut Bus) {}
    fn rla(&mut self, _: &mut Bus) {}
    fn sre(&mut self, _: &mut Bus) {}
    fn rra(&mut self, _: &mut Bus) {}
    fn sax(&mut self, _: &mut Bus) {}
    fn lax(&mut self, _: &mut Bus) {}
    fn dcp(&mut self, _: &mut Bus) {}
    fn isc(&mut self, _: &mut Bus) {}
    fn anc(&mut self, _: &mut Bus) {}
    fn alr(&mut self, _: &mut Bus) {}
    fn arr(&mut self, _: &mut Bus) {}
    fn xaa(&mut self, _: &mut Bus) {}
    fn axs(&mut self, _: &mut Bus) {}
    fn ahx(&mut self, _: &mut Bus) {}
    fn tas(&mut self, _: &mut Bus) {}
    fn shx(&mut self, _: &mut Bus) {}
    fn shy(&mut self, _: &mut Bus) {}
    fn las(&mut self, _: &mut Bus) {}
}
