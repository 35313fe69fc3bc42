use super::{Divider, Envelope, LengthCounter};
use bit_field::BitField;

const PERIOD: [usize; 16] = [
    4, 8, 16, 32, 64, 96, 128, 160, 202, 254, 380, 508, 762, 1016, 2034, 4068,
];

#[derive(Debug)]
pub struct Noise {
    envelope: Envelope,
    len_counter: LengthCounter,

    timer: Divider,
    lfsr: u16,
    tap: usize,
}

impl Noise {
    pub fn new() -> Self {
        Self {
            envelope: Envelope::new(),
            len_counter: LengthCounter::new(),

            timer: Divider::new(),
            lfsr: 1,
            tap: 1,
        }
    }
}

impl super::Channel for Noise {
    fn sample(&mut self) -> u8 {
        if self.len_counter.count() == 0 {
            return 0;
        }
        if self.lfsr.get_bit(0) {
            return 0;
        }
        self.envelope.volume()
    }

    fn tick(&mut self) {
        if self.timer.tick() {
            let feedback = self.lfsr.get_bit(0) ^ self.lfsr.get_bit(self.tap);
            self.lfsr >>= 1;
            self.lfsr.set_bit(14, feedback);
        }
    }

    fn tick_len(&mut self) {
        self.len_counter.tick();
    }

    fn tick_eve(&mut self) {
        self.envelope.tick();
    }

    fn write_reg0(&mut self, data: u8) {
        self.len_counter.set_halt(data.get_bit(5));
        self.envelope.load(data);
    }

    fn write_reg1(&mut self, _: u8) {}

    fn write_reg2(&mut self, data: u8) {
        // mode 1 taps bit 6 for the short 93-step sequence
        self.tap = data.get_bit(7) as usize * 5 + 1;
        self.timer.set_period(PERIOD[data.get_bits(0..4) as usize]);
    }

    fn write_reg3(&mut self, data: u8) {
        self.envelope.restart();
        self.len_counter.load(data);
    }

    fn set_enable(&mut self, enable: bool) {
        self.len_counter.set_enable(enable);
    }

    fn enabled(&self) -> bool {
        self.len_counter.count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::super::Channel;
    use super::*;

    #[test]
    fn test_lfsr_long_sequence() {
        let mut n = Noise::new();
        n.write_reg2(0x00); // period 4, long mode

        // seed 1: feedback = bit0 ^ bit1 = 1 -> bit 14
        for _ in 0..5 {
            n.tick();
        }
        assert_eq!(n.lfsr, 0x4000);

        // the 15-bit LFSR never reaches zero
        for _ in 0..200_000 {
            n.tick();
            assert_ne!(n.lfsr, 0);
        }
    }

    #[test]
    fn test_output_gated_by_bit0() {
        let mut n = Noise::new();
        n.set_enable(true);
        n.write_reg0(0x1a); // constant volume 10
        n.write_reg3(0x08);

        n.lfsr = 0x0001;
        assert_eq!(n.sample(), 0);
        n.lfsr = 0x0002;
        assert_eq!(n.sample(), 10);
    }
}
