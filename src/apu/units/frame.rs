use bit_field::BitField;

// mode 0:    mode 1:       function
// ---------  -----------  -----------------------------
//  - - - f    - - - - -    IRQ (if bit 6 is clear)
//  - l - l    l - l - -    Length counter and sweep
//  e e e e    e e e e -    Envelope and linear counter

#[derive(Debug, PartialEq, Eq)]
enum Mode {
    Step4,
    Step5,
}

bitflags::bitflags! {
    pub struct Step: u8 {
        const LENGTH   = 0b01;
        const ENVELOPE = 0b10;
    }
}

/// The 240 Hz sequencer. A step fires whenever the cycle count crosses a
/// multiple of the frame counter rate.
#[derive(Debug)]
pub struct FrameCounter {
    mode: Mode,
    value: u8,
    irq_on: bool,
    irq_level: bool,
}

impl FrameCounter {
    pub fn new() -> Self {
        Self {
            mode: Mode::Step4,
            value: 0,
            irq_on: false,
            irq_level: false,
        }
    }

    pub fn tick(&mut self, cycle1: u64, cycle2: u64) -> Step {
        let f1 = (cycle1 as f64 / crate::FRAME_COUNTER_RATE) as u64;
        let f2 = (cycle2 as f64 / crate::FRAME_COUNTER_RATE) as u64;
        if f1 == f2 {
            return Step::empty();
        }

        let mut step = Step::ENVELOPE;
        match self.mode {
            Mode::Step4 => {
                self.value = (self.value + 1) % 4;
                if self.value == 1 || self.value == 3 {
                    step |= Step::LENGTH;
                }
                if self.value == 3 && self.irq_on {
                    self.irq_level = true;
                }
            }
            Mode::Step5 => {
                self.value = (self.value + 1) % 5;
                match self.value {
                    0 | 2 => step |= Step::LENGTH,
                    1 | 3 => {}
                    _ => step = Step::empty(),
                }
            }
        }
        step
    }

    pub fn load(&mut self, data: u8) {
        self.mode = if data.get_bit(7) {
            Mode::Step5
        } else {
            Mode::Step4
        };
        self.irq_on = !data.get_bit(6);
        self.value = 0;
    }

    pub fn five_step(&self) -> bool {
        self.mode == Mode::Step5
    }

    pub fn irq(&mut self) -> bool {
        std::mem::replace(&mut self.irq_level, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_steps(fc: &mut FrameCounter, n: usize) -> Vec<Step> {
        let rate = crate::FRAME_COUNTER_RATE as u64 + 1;
        let mut steps = Vec::new();
        let mut cycle = 0u64;
        while steps.len() < n {
            let step = fc.tick(cycle, cycle + rate);
            steps.push(step);
            cycle += rate;
        }
        steps
    }

    #[test]
    fn test_four_step_sequence() {
        let mut fc = FrameCounter::new();
        fc.load(0x00);

        let steps = run_steps(&mut fc, 4);
        assert_eq!(steps[0], Step::ENVELOPE | Step::LENGTH); // step 1
        assert_eq!(steps[1], Step::ENVELOPE); // step 2
        assert_eq!(steps[2], Step::ENVELOPE | Step::LENGTH); // step 3
        assert_eq!(steps[3], Step::ENVELOPE); // step 0
        assert!(fc.irq());
        assert!(!fc.irq());
    }

    #[test]
    fn test_four_step_irq_inhibit() {
        let mut fc = FrameCounter::new();
        fc.load(0x40);
        run_steps(&mut fc, 8);
        assert!(!fc.irq());
    }

    #[test]
    fn test_five_step_sequence() {
        let mut fc = FrameCounter::new();
        fc.load(0x80);

        let steps = run_steps(&mut fc, 5);
        assert_eq!(steps[0], Step::ENVELOPE); // step 1
        assert_eq!(steps[1], Step::ENVELOPE | Step::LENGTH); // step 2
        assert_eq!(steps[2], Step::ENVELOPE); // step 3
        assert_eq!(steps[3], Step::empty()); // step 4
        assert_eq!(steps[4], Step::ENVELOPE | Step::LENGTH); // step 0
        assert!(!fc.irq());
    }

    #[test]
    fn test_no_step_between_boundaries() {
        let mut fc = FrameCounter::new();
        fc.load(0x00);
        assert_eq!(fc.tick(0, 1), Step::empty());
    }
}
