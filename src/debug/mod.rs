// Debug module - Debugging tools for NES emulator
//
// The only surviving debug tool is the disassembler, used to produce
// nestest-style CPU trace lines for the `--trace` CLI flag. The full
// in-process debugger UI (breakpoints, memory/PPU viewers, execution log)
// belongs to the host application layer, not this core, and isn't built here.

pub mod disassembler;

pub use disassembler::{disassemble_count, disassemble_instruction, disassemble_range, DisassembledInstruction};
