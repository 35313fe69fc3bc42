use famicore::{Console, InputStates, SampleQueue};
use std::sync::Arc;

/// Builds a one-bank NROM image with `program` at 0x8000 and an NMI
/// handler that increments $f0.
fn build_rom(program: &[u8]) -> Vec<u8> {
    let mut prg = vec![0u8; 0x4000];
    prg[..program.len()].copy_from_slice(program);

    // NMI handler at 0x9000: INC $f0; RTI
    prg[0x1000..0x1003].copy_from_slice(&[0xe6, 0xf0, 0x40]);

    // vectors (the single bank is mirrored at 0xc000)
    prg[0x3ffa..0x3ffe].copy_from_slice(&[0x00, 0x90, 0x00, 0x80]);

    let mut rom = vec![b'N', b'E', b'S', 0x1a, 1, 1, 0, 0];
    rom.extend_from_slice(&[0u8; 8]);
    rom.extend_from_slice(&prg);
    rom.extend(std::iter::repeat(0u8).take(0x2000));
    rom
}

fn idle_console() -> Console {
    // JMP $8000
    Console::load(&build_rom(&[0x4c, 0x00, 0x80])).unwrap()
}

#[test]
fn test_load_and_reset_vector() {
    let console = idle_console();
    assert_eq!(console.cpu().pc(), 0x8000);
}

#[test]
fn test_reset_is_idempotent() {
    let mut console = idle_console();
    console.reset();
    let pc = console.cpu().pc();
    console.reset();
    assert_eq!(console.cpu().pc(), pc);
}

#[test]
fn test_program_writes_ram() {
    // LDA #$42; STA $0010; JMP $8005
    let mut console = Console::load(&build_rom(&[
        0xa9, 0x42, 0x8d, 0x10, 0x00, 0x4c, 0x05, 0x80,
    ]))
    .unwrap();

    console.step();
    console.step();
    assert_eq!(console.bus_mut().read(0x0010), 0x42);
}

#[test]
fn test_instruction_cycle_counts() {
    // LDA #$42 (2); STA $0010 (4); LDX #$10 (2); LDA $80f5,X (4+1 cross);
    // LDA #$00 (2); BEQ +2 taken same page (3)
    let mut console = Console::load(&build_rom(&[
        0xa9, 0x42, 0x8d, 0x10, 0x00, 0xa2, 0x10, 0xbd, 0xf5, 0x80, 0xa9, 0x00, 0xf0, 0x02,
    ]))
    .unwrap();

    assert_eq!(console.step(), 2);
    assert_eq!(console.step(), 4);
    assert_eq!(console.step(), 2);
    assert_eq!(console.step(), 5);
    assert_eq!(console.step(), 2);
    assert_eq!(console.step(), 3);
}

#[test]
fn test_oam_dma_stall() {
    // LDA #$02; STA $4014; then NOPs
    let mut console = Console::load(&build_rom(&[
        0xa9, 0x02, 0x8d, 0x14, 0x40, 0xea, 0xea, 0xea,
    ]))
    .unwrap();

    assert_eq!(console.step(), 2);
    // the DMA write itself costs the instruction's 4 cycles...
    assert_eq!(console.step(), 4);
    // ...then the CPU is stalled for 513 cycles (write landed on an even
    // cycle), one per step
    for _ in 0..513 {
        assert_eq!(console.step(), 1);
    }
    assert_eq!(console.step(), 2); // NOP resumes
}

#[test]
fn test_nmi_handler_runs_each_vblank() {
    // LDA #$80; STA $2000; JMP $8005
    let mut console = Console::load(&build_rom(&[
        0xa9, 0x80, 0x8d, 0x00, 0x20, 0x4c, 0x05, 0x80,
    ]))
    .unwrap();

    console.step_seconds(0.1);
    let count = console.bus_mut().read(0x00f0);
    // ~6 frames in 100 ms
    assert!((4..=8).contains(&count), "nmi handler ran {} times", count);
}

#[test]
fn test_rendered_frame_uses_backdrop_color() {
    // LDA #$08; STA $2001; JMP $8005 -- background on, everything zero
    let mut console = Console::load(&build_rom(&[
        0xa9, 0x08, 0x8d, 0x01, 0x20, 0x4c, 0x05, 0x80,
    ]))
    .unwrap();

    console.step_seconds(0.05);
    // palette entry 0 is 0x00 -> master palette color 0x666666
    assert_eq!(console.frame().pixel(10, 10), [0x66, 0x66, 0x66, 0xff]);
    assert_eq!(console.frame().pixel(255, 239), [0x66, 0x66, 0x66, 0xff]);
}

#[test]
fn test_controller_strobe_sequence() {
    let mut console = idle_console();

    console.set_buttons1(InputStates {
        a: true,
        ..Default::default()
    });
    console.bus_mut().write(0x4016, 1);
    console.bus_mut().write(0x4016, 0);
    let reads: Vec<u8> = (0..8).map(|_| console.bus_mut().read(0x4016)).collect();
    assert_eq!(reads, [1, 0, 0, 0, 0, 0, 0, 0]);

    console.set_buttons1(InputStates {
        right: true,
        ..Default::default()
    });
    console.bus_mut().write(0x4016, 1);
    console.bus_mut().write(0x4016, 0);
    let reads: Vec<u8> = (0..8).map(|_| console.bus_mut().read(0x4016)).collect();
    assert_eq!(reads, [0, 0, 0, 0, 0, 0, 0, 1]);
}

#[test]
fn test_silent_rom_audio_output() {
    let mut console = idle_console();
    let sink = Arc::new(SampleQueue::new(4096));
    console.set_audio_sink(sink.clone());

    console.step_seconds(1.0 / 60.0);

    // one sample every SAMPLE_RATE cpu cycles
    let expected = (famicore::CPU_FREQUENCY / 60.0 / famicore::SAMPLE_RATE) as i64;
    let got = sink.len() as i64;
    assert!(
        (expected - got).abs() <= 2,
        "expected ~{} samples, got {}",
        expected,
        got
    );
    while let Some(sample) = sink.pop() {
        assert_eq!(sample, 0.0);
    }
}

#[test]
fn test_step_seconds_budget() {
    let mut console = idle_console();
    let before = console.cpu().cycles();
    console.step_seconds(0.01);
    let ran = console.cpu().cycles() - before;

    let target = (famicore::CPU_FREQUENCY * 0.01) as u64;
    assert!(ran >= target);
    assert!(ran < target + 10);
}

#[test]
fn test_work_ram_mirroring_through_console() {
    let mut console = idle_console();
    console.bus_mut().write(0x0000, 0x7e);
    for addr in [0x0000u16, 0x0800, 0x1000, 0x1800] {
        assert_eq!(console.bus_mut().read(addr), 0x7e);
    }
}
