use super::{Divider, Envelope, LengthCounter, Sweep};
use bit_field::BitField;

const DUTY: [[u8; 8]; 4] = [
    [0, 1, 0, 0, 0, 0, 0, 0],
    [0, 1, 1, 0, 0, 0, 0, 0],
    [0, 1, 1, 1, 1, 0, 0, 0],
    [1, 0, 0, 1, 1, 1, 1, 1],
];

#[derive(Debug)]
pub struct Pulse {
    len_counter: LengthCounter,
    envelope: Envelope,
    sweep: Sweep,

    timer: Divider,
    duty: usize,
    step: usize,
}

impl Pulse {
    pub fn new(channel2: bool) -> Self {
        Self {
            len_counter: LengthCounter::new(),
            envelope: Envelope::new(),
            sweep: Sweep::new(channel2),

            timer: Divider::new(),
            duty: 0,
            step: 0,
        }
    }
}

impl super::Channel for Pulse {
    fn sample(&mut self) -> u8 {
        if self.len_counter.count() == 0 {
            return 0;
        }
        if DUTY[self.duty][self.step] == 0 {
            return 0;
        }
        // silent outside the 8..=0x7ff timer range
        let period = self.timer.period();
        if !(8..=0x7ff).contains(&period) {
            return 0;
        }
        self.envelope.volume()
    }

    fn tick(&mut self) {
        if self.timer.tick() {
            self.step = (self.step + 1) % 8;
        }
    }

    fn tick_len(&mut self) {
        self.len_counter.tick();
        self.sweep.tick(&mut self.timer);
    }

    fn tick_eve(&mut self) {
        self.envelope.tick();
    }

    fn write_reg0(&mut self, data: u8) {
        self.duty = data.get_bits(6..8) as usize;
        self.len_counter.set_halt(data.get_bit(5));
        self.envelope.load(data);
    }

    fn write_reg1(&mut self, data: u8) {
        self.sweep.load(data);
    }

    fn write_reg2(&mut self, data: u8) {
        self.timer.set_period_low(data);
    }

    fn write_reg3(&mut self, data: u8) {
        self.len_counter.load(data);
        self.timer.set_period_high(data);
        self.envelope.restart();
        self.step = 0;
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
    fn test_silent_when_disabled() {
        let mut p = Pulse::new(false);
        p.write_reg0(0x9f); // duty 2, constant volume 15
        p.write_reg2(0x80);
        p.write_reg3(0x08);
        // load didn't land, the channel is disabled
        assert_eq!(p.sample(), 0);

        p.set_enable(true);
        p.write_reg3(0x08);
        // walk onto a high duty step
        p.tick();
        p.tick();
        assert_eq!(p.sample(), 15);
    }

    #[test]
    fn test_silent_below_minimum_period() {
        let mut p = Pulse::new(false);
        p.set_enable(true);
        p.write_reg0(0x9f);
        p.write_reg2(0x04); // period 4 < 8
        p.write_reg3(0x08);
        p.tick();
        p.tick();
        assert_eq!(p.sample(), 0);
    }
}
