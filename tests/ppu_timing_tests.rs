// PPU timing and register integration tests
//
// Exercises the concrete scenarios from the 2C02 timing model end to end,
// through the Bus-mediated register interface rather than reaching into
// private PPU state: vblank/NMI assertion timing, the PPUSCROLL/PPUADDR
// round trip into the VRAM address, and the dot-counter invariant.

use nes_rs::{Bus, Cartridge, Mirroring};

fn test_bus() -> Bus {
    let mut cart = Cartridge::new();
    cart.prg_rom = vec![0; 16 * 1024];
    cart.chr_rom = vec![0; 8 * 1024];
    cart.mirroring = Mirroring::Horizontal;
    Bus::with_cartridge(cart).unwrap()
}

/// Scenario 3: enabling NMI-on-vblank via PPUCTRL asserts the NMI line at
/// scanline 241, dot 1, and PPUSTATUS bit 7 clears on read.
#[test]
fn nmi_asserted_at_vblank_start_and_status_clears_on_read() {
    let mut bus = test_bus();
    bus.write(0x2000, 0x80); // PPUCTRL: enable NMI on vblank

    loop {
        bus.ppu_mut().step();
        if bus.ppu().scanline() == 241 && bus.ppu().cycle() == 1 {
            break;
        }
    }

    assert!(bus.ppu().nmi_pending());
    let status = bus.read(0x2002);
    assert_eq!(status & 0x80, 0x80, "PPUSTATUS bit 7 must be set going into the read");

    let status_again = bus.read(0x2002);
    assert_eq!(status_again & 0x80, 0, "vblank flag clears after being read");
}

/// Scenario 4: two writes to PPUSCROLL then two to PPUADDR (0x00, 0x00,
/// 0x21, 0x08) leave the VRAM address pointed at 0x2108 - verified
/// end-to-end via a PPUDATA write/read round trip rather than inspecting
/// the internal v register directly.
#[test]
fn ppuscroll_then_ppuaddr_round_trips_through_ppudata() {
    let mut bus = test_bus();

    bus.write(0x2005, 0x00); // PPUSCROLL x
    bus.write(0x2005, 0x00); // PPUSCROLL y
    bus.write(0x2006, 0x21); // PPUADDR high
    bus.write(0x2006, 0x08); // PPUADDR low

    bus.write(0x2007, 0xAB); // store at 0x2108, v auto-increments by 1

    // Re-point the address back at 0x2108 and read it back. The first read
    // returns the stale read-buffer contents; the second returns the byte
    // actually stored at 0x2108.
    bus.write(0x2006, 0x21);
    bus.write(0x2006, 0x08);
    let _stale = bus.read(0x2007);
    let value = bus.read(0x2007);

    assert_eq!(value, 0xAB);
}

/// Invariant: for any run of CPU-equivalent cycles c, the PPU dot counter
/// advances by 3c modulo the frame's total dot count (341*262), aside from
/// the one-dot skip on odd frames while rendering is enabled. With
/// rendering disabled (the default, PPUMASK = 0) no dot is ever skipped.
#[test]
fn dot_counter_advances_three_per_cpu_cycle_with_rendering_disabled() {
    let mut bus = test_bus();
    const FRAME_DOTS: u64 = 341 * 262;

    let mut absolute_dot: u64 = 0;
    for _ in 0..10_000u32 {
        bus.ppu_mut().step();
        absolute_dot += 1;
        let expected_scanline = ((absolute_dot % FRAME_DOTS) / 341) as u16;
        let expected_cycle = ((absolute_dot % FRAME_DOTS) % 341) as u16;
        assert_eq!(bus.ppu().scanline(), expected_scanline);
        assert_eq!(bus.ppu().cycle(), expected_cycle);
    }
}

/// Frame completion: a full frame's worth of dots flips the `step` return
/// value to `true` exactly once as the pre-render line wraps to scanline 0.
#[test]
fn full_frame_reports_completion_once() {
    let mut bus = test_bus();
    let mut completions = 0;
    for _ in 0..(341 * 262) {
        if bus.ppu_mut().step() {
            completions += 1;
        }
    }
    assert_eq!(completions, 1);
}
