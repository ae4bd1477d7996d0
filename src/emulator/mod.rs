// Emulator module - Clock/loop coordinator
//
// Owns the CPU and the bus (which in turn owns the PPU, cartridge mapper, RAM,
// and controller I/O) and drives them together: one CPU instruction, three PPU
// dots per CPU cycle consumed, NMI delivery, and OAM-DMA stall accounting.

mod config;

pub use config::{EmulatorConfig, TraceConfig, VideoConfig};

use crate::bus::Bus;
use crate::cartridge::Cartridge;
use crate::cpu::Cpu;
use crate::error::EmulatorError;
use crate::input::Controller;
use std::path::{Path, PathBuf};

/// Main emulator structure
///
/// Coordinates the CPU and bus and provides the high-level operations a host
/// shell (CLI, display loop, test harness) needs: loading a ROM, resetting,
/// and stepping the machine one instruction (and its associated PPU dots) at
/// a time.
pub struct Emulator {
    cpu: Cpu,
    bus: Bus,
    config: EmulatorConfig,
    rom_path: Option<PathBuf>,
    paused: bool,
}

impl Emulator {
    /// Create a new emulator instance with no cartridge loaded.
    pub fn new() -> Self {
        Emulator {
            cpu: Cpu::new(),
            bus: Bus::new(),
            config: EmulatorConfig::load_or_default(),
            rom_path: None,
            paused: false,
        }
    }

    /// Load a ROM file, replacing whatever cartridge (if any) was loaded
    /// before, and reset the machine to its power-on state.
    pub fn load_rom<P: AsRef<Path>>(&mut self, path: P) -> Result<(), EmulatorError> {
        let path = path.as_ref();
        let cartridge = Cartridge::from_ines_file(path)?;
        log::info!(
            "loaded {}: mapper {}, {}KB PRG, {}KB CHR, {:?} mirroring",
            path.display(),
            cartridge.mapper,
            cartridge.prg_rom.len() / 1024,
            cartridge.chr_rom.len() / 1024,
            cartridge.mirroring,
        );

        self.bus = Bus::with_cartridge(cartridge)?;
        self.rom_path = Some(path.to_path_buf());
        self.reset();
        Ok(())
    }

    /// Reset the machine to its power-on state, as if pressing the reset button.
    pub fn reset(&mut self) {
        self.cpu.reset(&mut self.bus);
        self.paused = false;
        log::info!("emulator reset");
    }

    /// Execute exactly one CPU instruction, tick the PPU three dots per CPU
    /// cycle consumed (including any OAM DMA stall), and service a pending
    /// IRQ or NMI before the next instruction fetch.
    ///
    /// OAM DMA stall cycles and interrupt-service cycles are charged to the
    /// CPU's own cycle counter (`self.cpu.cycles`) as part of this same step,
    /// and the PPU is ticked three dots per cycle charged, so the dot counter
    /// and the `CYC:` trace field never drift out of sync with real elapsed
    /// cycles.
    ///
    /// Returns the number of CPU cycles the instruction itself consumed (not
    /// counting DMA stall or interrupt-service cycles) and whether a new
    /// frame was completed during this step.
    pub fn step(&mut self) -> (u8, bool) {
        let cycles = self.cpu.step(&mut self.bus);

        let stall = self.bus.take_dma_stall();
        self.cpu.cycles = self.cpu.cycles.wrapping_add(stall as u64);

        let mut frame_done = false;
        for _ in 0..(cycles as u32 + stall as u32) {
            frame_done |= self.bus.tick_ppu();
        }

        // The mapper's IRQ line (always low for NROM/MMC1) takes priority
        // over NMI only in the sense that both are checked here; NMI is
        // non-maskable and will fire next regardless.
        if self.bus.irq_pending() {
            let irq_cycles = self.cpu.irq(&mut self.bus);
            for _ in 0..irq_cycles as u32 {
                frame_done |= self.bus.tick_ppu();
            }
        }

        if self.bus.ppu().nmi_pending() {
            let nmi_cycles = self.cpu.nmi(&mut self.bus);
            self.bus.ppu_mut().clear_nmi();
            for _ in 0..nmi_cycles as u32 {
                frame_done |= self.bus.tick_ppu();
            }
        }

        (cycles, frame_done)
    }

    /// Run instructions until a frame completes or the configured cycle cap
    /// is reached (whichever comes first). Returns `false` if the cap was hit
    /// before a frame finished.
    pub fn run_frame(&mut self) -> bool {
        loop {
            let (_, frame_done) = self.step();
            if frame_done {
                return true;
            }
            if let Some(max) = self.config.trace.max_cycles {
                if self.cpu.cycles >= max {
                    return false;
                }
            }
        }
    }

    /// Render a `nestest`-format trace line for the instruction about to be
    /// fetched. Must be called before `step()`, since the CYC/PPU fields
    /// reflect machine state at the moment of fetch.
    pub fn trace_line(&mut self) -> String {
        self.cpu.trace(&mut self.bus)
    }

    /// Feed controller 1's current button state into the machine.
    pub fn set_controller1(&mut self, state: Controller) {
        self.bus.controllers_mut().set_controller1(state);
    }

    /// Feed controller 2's current button state into the machine.
    pub fn set_controller2(&mut self, state: Controller) {
        self.bus.controllers_mut().set_controller2(state);
    }

    /// The current frame buffer: 256x240 NES-palette indices.
    pub fn frame(&self) -> &[u8] {
        self.bus.ppu().frame()
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut EmulatorConfig {
        &mut self.config
    }

    pub fn rom_path(&self) -> Option<&Path> {
        self.rom_path.as_deref()
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nrom_test_rom() -> Vec<u8> {
        let mut data = vec![0u8; 16 + 16 * 1024 + 8 * 1024];
        data[0..4].copy_from_slice(b"NES\x1A");
        data[4] = 1; // 16KB PRG
        data[5] = 1; // 8KB CHR
        let prg_start = 16;
        for b in data[prg_start..prg_start + 16 * 1024].iter_mut() {
            *b = 0xEA; // NOP
        }
        // Reset/NMI/IRQ vectors all point at $8000
        let vectors_offset = prg_start + 16 * 1024 - 6;
        data[vectors_offset] = 0x00;
        data[vectors_offset + 1] = 0x80;
        data[vectors_offset + 2] = 0x00;
        data[vectors_offset + 3] = 0x80;
        data[vectors_offset + 4] = 0x00;
        data[vectors_offset + 5] = 0x80;
        data
    }

    #[test]
    fn test_load_rom_and_reset() {
        let dir = std::env::temp_dir();
        let path = dir.join("nes_rs_emulator_test.nes");
        std::fs::write(&path, nrom_test_rom()).unwrap();

        let mut emulator = Emulator::new();
        emulator.load_rom(&path).unwrap();

        assert_eq!(emulator.cpu().pc, 0x8000);
        assert!(!emulator.is_paused());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_step_runs_nop() {
        let dir = std::env::temp_dir();
        let path = dir.join("nes_rs_emulator_test_step.nes");
        std::fs::write(&path, nrom_test_rom()).unwrap();

        let mut emulator = Emulator::new();
        emulator.load_rom(&path).unwrap();

        let (cycles, _) = emulator.step();
        assert_eq!(cycles, 2); // NOP takes 2 cycles
        assert_eq!(emulator.cpu().pc, 0x8001);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_pause_toggle() {
        let mut emulator = Emulator::new();
        assert!(!emulator.is_paused());
        emulator.toggle_pause();
        assert!(emulator.is_paused());
        emulator.resume();
        assert!(!emulator.is_paused());
    }
}
