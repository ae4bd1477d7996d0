// NES Emulator Library
//
// A 6502 CPU, a 2C02 PPU, and a cartridge/mapper bus interleaved behind a
// single-threaded clock. Audio (APU), save states, and an in-process
// debugger UI are deliberately not part of this crate; see DESIGN.md.

// Public modules
pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod debug;
pub mod display;
pub mod emulator;
pub mod error;
pub mod input;
pub mod ppu;
pub mod ram;

// Re-export main types for convenience
pub use bus::{Bus, MemoryMappedDevice};
pub use cartridge::{Cartridge, INesError, INesHeader, Mapper, Mirroring};
pub use cpu::Cpu;
pub use debug::{
    disassemble_count, disassemble_instruction, disassemble_range, DisassembledInstruction,
};
pub use display::{FrameBuffer, WindowConfig};
pub use emulator::{EmulatorConfig, TraceConfig, VideoConfig};
pub use error::EmulatorError;
pub use input::{Controller, ControllerIO};
pub use ppu::Ppu;
pub use ram::Ram;

pub use emulator::Emulator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_components() {
        // Test that all components can be instantiated
        let _cpu = Cpu::new();
        let _ppu = Ppu::new();
        let _bus = Bus::new();
        let _cartridge = Cartridge::new();
        let _controller = Controller::new();
        let _controller_io = ControllerIO::new();
        let _ram = Ram::new();
        let _emulator = Emulator::new();
    }
}
