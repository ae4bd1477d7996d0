// Mappers module - Implementations of various NES cartridge mappers
//
// This module contains the mapper factory and individual mapper implementations.
// Each mapper handles memory mapping and banking for different cartridge types.

mod mapper0;
mod mapper1;

use super::{Cartridge, Mapper};
use mapper0::Mapper0;
use mapper1::Mapper1;

/// Error type for mapper creation
#[derive(Debug)]
pub enum MapperError {
    /// The requested mapper number is not supported
    UnsupportedMapper(u8),
    /// Invalid cartridge configuration for the mapper
    InvalidConfiguration(String),
}

impl std::fmt::Display for MapperError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapperError::UnsupportedMapper(num) => {
                write!(f, "Mapper {} is not supported", num)
            }
            MapperError::InvalidConfiguration(msg) => {
                write!(f, "Invalid mapper configuration: {}", msg)
            }
        }
    }
}

impl std::error::Error for MapperError {}

impl From<MapperError> for crate::error::EmulatorError {
    fn from(err: MapperError) -> Self {
        match err {
            MapperError::UnsupportedMapper(num) => crate::error::EmulatorError::UnsupportedMapper(num),
            MapperError::InvalidConfiguration(msg) => {
                crate::error::EmulatorError::HeaderInvalid(msg)
            }
        }
    }
}

/// Create a mapper instance based on the mapper number in the cartridge
///
/// This factory function creates the appropriate mapper implementation for the
/// given cartridge. The mapper number is determined from the iNES header.
///
/// # Arguments
/// * `cartridge` - The cartridge to create a mapper for
///
/// # Returns
/// A boxed trait object implementing the Mapper trait
///
/// # Errors
/// Returns `MapperError::UnsupportedMapper` if the mapper number is not implemented
///
/// # Example
/// ```no_run
/// use nes_rs::Cartridge;
/// use nes_rs::cartridge::mappers::create_mapper;
///
/// let cartridge = Cartridge::from_ines_file("game.nes").unwrap();
/// let mapper = create_mapper(cartridge).unwrap();
/// ```
pub fn create_mapper(cartridge: Cartridge) -> Result<Box<dyn Mapper>, MapperError> {
    match cartridge.mapper {
        0 => Ok(Box::new(Mapper0::new(cartridge))),
        1 => Ok(Box::new(Mapper1::new(cartridge))),
        mapper_num => Err(MapperError::UnsupportedMapper(mapper_num)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::Mirroring;

    #[test]
    fn test_mapper0_creation() {
        // Create a cartridge with Mapper 0 configuration
        let cartridge = Cartridge {
            prg_rom: vec![0xAA; 16 * 1024], // 16KB PRG-ROM
            chr_rom: vec![0xBB; 8 * 1024],  // 8KB CHR-ROM
            trainer: None,
            mapper: 0,
            mirroring: Mirroring::Horizontal,
            has_battery: false,
        };

        let result = create_mapper(cartridge);
        assert!(result.is_ok());

        let mapper = result.unwrap();
        assert_eq!(mapper.mirroring(), Mirroring::Horizontal);
    }

    #[test]
    fn test_mapper1_creation() {
        let cartridge = Cartridge {
            prg_rom: vec![0xAA; 16 * 16 * 1024], // 256KB PRG-ROM, 16 banks
            chr_rom: vec![0xBB; 8 * 4 * 1024],   // 32KB CHR-ROM, 8 banks
            trainer: None,
            mapper: 1,
            mirroring: Mirroring::Vertical,
            has_battery: true,
        };

        let result = create_mapper(cartridge);
        assert!(result.is_ok());
    }

    #[test]
    fn test_unsupported_mapper() {
        let mut cartridge = Cartridge::new();
        cartridge.mapper = 99; // Non-existent mapper

        let result = create_mapper(cartridge);
        assert!(matches!(result, Err(MapperError::UnsupportedMapper(99))));
    }
}
