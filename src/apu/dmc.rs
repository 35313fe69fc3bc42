use super::Divider;
use bit_field::BitField;

// NTSC rates in CPU cycles; the channel is clocked at half CPU rate
const RATE: [usize; 16] = [
    428, 380, 340, 320, 286, 254, 226, 214, 190, 160, 142, 128, 106, 84, 72, 54,
];

/// Delta modulation channel. Sample bytes come over the CPU bus through the
/// request/response pair; the console applies the 4-cycle fetch stall.
#[derive(Debug)]
pub struct Dmc {
    irq_on: bool,
    irq_level: bool,
    looping: bool,

    sample_address: u16,
    sample_length: u16,
    current_address: u16,
    current_length: u16,
    sample_request: Option<u16>,

    timer: Divider,
    shifter: u8,
    bits_remain: u8,

    value: u8,
}

impl Dmc {
    pub fn new() -> Self {
        Self {
            irq_on: false,
            irq_level: false,
            looping: false,

            sample_address: 0,
            sample_length: 0,
            current_address: 0,
            current_length: 0,
            sample_request: None,

            timer: Divider::new(),
            shifter: 0,
            bits_remain: 0,

            value: 0,
        }
    }

    /// Address of the next sample byte the channel wants from the CPU bus.
    pub fn read_sample(&mut self) -> Option<u16> {
        self.sample_request.take()
    }

    pub fn write_sample(&mut self, data: u8) {
        self.shifter = data;
        self.bits_remain = 8;
    }

    pub fn irq(&mut self) -> bool {
        std::mem::replace(&mut self.irq_level, false)
    }

    fn restart(&mut self) {
        self.current_address = self.sample_address;
        self.current_length = self.sample_length;
    }
}

impl super::Channel for Dmc {
    fn sample(&mut self) -> u8 {
        self.value
    }

    fn tick(&mut self) {
        // reader: request the next byte once the shifter drains
        if self.current_length > 0 && self.bits_remain == 0 {
            self.sample_request = Some(self.current_address);

            if self.current_address == 0xffff {
                self.current_address = 0x8000;
            } else {
                self.current_address += 1;
            }
            self.current_length -= 1;

            if self.current_length == 0 {
                if self.looping {
                    self.restart();
                } else if self.irq_on {
                    self.irq_level = true;
                }
            }
        }

        // shifter: each bit nudges the 7-bit output up or down by two
        if self.timer.tick() && self.bits_remain > 0 {
            if self.shifter.get_bit(0) {
                if self.value <= 125 {
                    self.value += 2;
                }
            } else if self.value >= 2 {
                self.value -= 2;
            }

            self.shifter >>= 1;
            self.bits_remain -= 1;
        }
    }

    fn tick_len(&mut self) {}

    fn tick_eve(&mut self) {}

    fn write_reg0(&mut self, data: u8) {
        self.irq_on = data.get_bit(7);
        self.looping = data.get_bit(6);
        self.timer.set_period(RATE[data.get_bits(0..4) as usize] / 2);

        if !self.irq_on {
            self.irq_level = false;
        }
    }

    fn write_reg1(&mut self, data: u8) {
        self.value = data & 0x7f;
    }

    fn write_reg2(&mut self, data: u8) {
        self.sample_address = 0xc000 + data as u16 * 64;
    }

    fn write_reg3(&mut self, data: u8) {
        self.sample_length = data as u16 * 16 + 1;
    }

    fn set_enable(&mut self, enable: bool) {
        if !enable {
            self.current_length = 0;
        } else if self.current_length == 0 {
            self.restart();
        }
        self.irq_level = false;
    }

    fn enabled(&self) -> bool {
        self.current_length > 0
    }
}
