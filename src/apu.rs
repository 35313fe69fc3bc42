use bit_field::BitField;
use crossbeam_queue::ArrayQueue;
use std::sync::Arc;

mod dmc;
mod noise;
mod pulse;
mod triangle;
mod units;

use dmc::Dmc;
use noise::Noise;
use pulse::Pulse;
use triangle::Triangle;
use units::*;

/// Bounded audio hand-off to the shell; pushes that find it full are
/// dropped so the simulation never blocks on playback.
pub type SampleQueue = ArrayQueue<f32>;

trait Channel {
    fn sample(&mut self) -> u8;

    fn tick(&mut self);
    fn tick_len(&mut self);
    fn tick_eve(&mut self);

    fn write_reg0(&mut self, data: u8);
    fn write_reg1(&mut self, data: u8);
    fn write_reg2(&mut self, data: u8);
    fn write_reg3(&mut self, data: u8);

    fn set_enable(&mut self, enable: bool);
    fn enabled(&self) -> bool;
}

pub struct Apu {
    frame: FrameCounter,
    pulse1: Pulse,
    pulse2: Pulse,
    triangle: Triangle,
    noise: Noise,
    dmc: Dmc,

    cycles: u64,
    sink: Option<Arc<SampleQueue>>,
}

impl Default for Apu {
    fn default() -> Self {
        Self::new()
    }
}

impl Apu {
    pub fn new() -> Self {
        Self {
            frame: FrameCounter::new(),
            pulse1: Pulse::new(false),
            pulse2: Pulse::new(true),
            triangle: Triangle::new(),
            noise: Noise::new(),
            dmc: Dmc::new(),

            cycles: 0,
            sink: None,
        }
    }

    pub fn set_sink(&mut self, sink: Arc<SampleQueue>) {
        self.sink = Some(sink);
    }

    /// One CPU cycle worth of APU time.
    pub fn tick(&mut self) {
        let cycle1 = self.cycles;
        self.cycles += 1;
        let cycle2 = self.cycles;

        // pulse, noise and DMC run from the half-rate clock
        if self.cycles % 2 == 0 {
            self.pulse1.tick();
            self.pulse2.tick();
            self.noise.tick();
            self.dmc.tick();
        }
        self.triangle.tick();

        let step = self.frame.tick(cycle1, cycle2);
        self.frame_tick(step);

        let s1 = (cycle1 as f64 / crate::SAMPLE_RATE) as u64;
        let s2 = (cycle2 as f64 / crate::SAMPLE_RATE) as u64;
        if s1 != s2 {
            self.output();
        }
    }

    fn frame_tick(&mut self, step: Step) {
        if step.contains(Step::LENGTH) {
            self.pulse1.tick_len();
            self.pulse2.tick_len();
            self.triangle.tick_len();
            self.noise.tick_len();
            self.dmc.tick_len();
        }
        if step.contains(Step::ENVELOPE) {
            self.pulse1.tick_eve();
            self.pulse2.tick_eve();
            self.triangle.tick_eve();
            self.noise.tick_eve();
            self.dmc.tick_eve();
        }
    }

    fn output(&mut self) {
        let pulse_index =
            (self.pulse1.sample() + self.pulse2.sample()) as usize;
        let tnd_index = self.triangle.sample() as usize * 3
            + self.noise.sample() as usize * 2
            + self.dmc.sample() as usize;

        let sample = PULSE_TABLE[pulse_index] + TND_TABLE[tnd_index];
        if let Some(sink) = &self.sink {
            // drop the sample on back-pressure
            let _ = sink.push(sample);
        }
    }

    pub(crate) fn poll_irq(&mut self) -> bool {
        self.frame.irq() | self.dmc.irq()
    }

    pub(crate) fn dmc_request(&mut self) -> Option<u16> {
        self.dmc.read_sample()
    }

    pub(crate) fn dmc_response(&mut self, data: u8) {
        self.dmc.write_sample(data);
    }

    pub fn read_status(&self) -> u8 {
        let mut data = 0u8;
        data.set_bit(0, self.pulse1.enabled());
        data.set_bit(1, self.pulse2.enabled());
        data.set_bit(2, self.triangle.enabled());
        data.set_bit(3, self.noise.enabled());
        data.set_bit(4, self.dmc.enabled());
        data
    }

    pub fn write(&mut self, addr: u16, data: u8) {
        match addr {
            0x4000 => self.pulse1.write_reg0(data),
            0x4001 => self.pulse1.write_reg1(data),
            0x4002 => self.pulse1.write_reg2(data),
            0x4003 => self.pulse1.write_reg3(data),

            0x4004 => self.pulse2.write_reg0(data),
            0x4005 => self.pulse2.write_reg1(data),
            0x4006 => self.pulse2.write_reg2(data),
            0x4007 => self.pulse2.write_reg3(data),

            0x4008 => self.triangle.write_reg0(data),
            0x4009 => self.triangle.write_reg1(data),
            0x400a => self.triangle.write_reg2(data),
            0x400b => self.triangle.write_reg3(data),

            0x400c => self.noise.write_reg0(data),
            0x400d => self.noise.write_reg1(data),
            0x400e => self.noise.write_reg2(data),
            0x400f => self.noise.write_reg3(data),

            0x4010 => self.dmc.write_reg0(data),
            0x4011 => self.dmc.write_reg1(data),
            0x4012 => self.dmc.write_reg2(data),
            0x4013 => self.dmc.write_reg3(data),

            0x4015 => {
                self.pulse1.set_enable(data.get_bit(0));
                self.pulse2.set_enable(data.get_bit(1));
                self.triangle.set_enable(data.get_bit(2));
                self.noise.set_enable(data.get_bit(3));
                self.dmc.set_enable(data.get_bit(4));
            }
            0x4017 => {
                self.frame.load(data);
                if self.frame.five_step() {
                    self.frame_tick(Step::LENGTH | Step::ENVELOPE);
                }
            }
            _ => {}
        }
    }
}

lazy_static::lazy_static! {
    static ref PULSE_TABLE: [f32; 31] = {
        let mut table = [0.0f32; 31];
        table.iter_mut().enumerate().skip(1).for_each(|(i, t)| {
            *t = 95.52 / (8128.0 / i as f32 + 100.0);
        });
        table
    };

    static ref TND_TABLE: [f32; 203] = {
        let mut table = [0.0f32; 203];
        table.iter_mut().enumerate().skip(1).for_each(|(i, t)| {
            *t = 163.67 / (24329.0 / i as f32 + 100.0);
        });
        table
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tracks_lengths() {
        let mut apu = Apu::new();
        assert_eq!(apu.read_status(), 0);

        apu.write(0x4015, 0x0f);
        apu.write(0x4003, 0x08);
        apu.write(0x400b, 0x08);
        assert_eq!(apu.read_status(), 0b0101);

        // clearing an enable bit zeroes that channel's length
        apu.write(0x4015, 0x04);
        assert_eq!(apu.read_status(), 0b0100);
    }

    #[test]
    fn test_silence_mixes_to_zero() {
        let mut apu = Apu::new();
        let sink = Arc::new(SampleQueue::new(64));
        apu.set_sink(sink.clone());

        for _ in 0..100 {
            apu.tick();
        }
        assert!(!sink.is_empty());
        while let Some(sample) = sink.pop() {
            assert_eq!(sample, 0.0);
        }
    }

    #[test]
    fn test_sample_cadence() {
        let mut apu = Apu::new();
        let sink = Arc::new(SampleQueue::new(8192));
        apu.set_sink(sink.clone());

        let cycles = crate::CPU_FREQUENCY as usize / 60;
        for _ in 0..cycles {
            apu.tick();
        }
        let expected = (cycles as f64 / crate::SAMPLE_RATE) as usize;
        let got = sink.len();
        assert!(
            (expected as i64 - got as i64).abs() <= 1,
            "expected ~{} samples, got {}",
            expected,
            got
        );
    }

    #[test]
    fn test_sink_drops_on_full() {
        let mut apu = Apu::new();
        let sink = Arc::new(SampleQueue::new(2));
        apu.set_sink(sink.clone());

        for _ in 0..1000 {
            apu.tick();
        }
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_frame_irq_surfaces_through_poll() {
        let mut apu = Apu::new();
        apu.write(0x4017, 0x00); // 4-step, IRQ enabled

        let cycles = crate::CPU_FREQUENCY as usize / 50;
        let mut fired = false;
        for _ in 0..cycles {
            apu.tick();
            fired |= apu.poll_irq();
        }
        assert!(fired);
    }

    #[test]
    fn test_five_step_mode_has_no_irq() {
        let mut apu = Apu::new();
        apu.write(0x4017, 0x80);

        let cycles = crate::CPU_FREQUENCY as usize / 50;
        let mut fired = false;
        for _ in 0..cycles {
            apu.tick();
            fired |= apu.poll_irq();
        }
        assert!(!fired);
    }

    #[test]
    fn test_mixer_tables() {
        assert_eq!(PULSE_TABLE[0], 0.0);
        assert_eq!(TND_TABLE[0], 0.0);
        assert!((PULSE_TABLE[30] - 95.52 / (8128.0 / 30.0 + 100.0)).abs() < 1e-6);
        assert!((TND_TABLE[202] - 163.67 / (24329.0 / 202.0 + 100.0)).abs() < 1e-6);
    }
}
