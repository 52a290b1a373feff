/// A single matrix cell, stored as a bitflag byte.
///
/// `COLOR` is the module's drawn color (1 = dark, 0 = light); `FUNCTION`
/// marks a cell the placer must not overwrite with data bits; `BLANK`
/// marks a function cell that is reserved but not yet colored (format and
/// version information areas before their bits are placed). Mask penalty
/// scoring treats `BLANK` cells as light but distinguishes them from
/// colored function cells when matching finder-like patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Module(pub u8);

pub const COLOR: u8 = 0x1;
pub const FUNCTION: u8 = 0x2;
pub const BLANK: u8 = 0x4;

pub const LIGHT: Module = Module(FUNCTION);
pub const DARK: Module = Module(FUNCTION | COLOR);
pub const RESERVED: Module = Module(FUNCTION | BLANK);
pub const UNSET: Module = Module(0);

impl Module {
    pub fn is_function(self) -> bool {
        self.0 & FUNCTION != 0
    }

    pub fn is_blank(self) -> bool {
        self.0 & BLANK != 0
    }

    pub fn is_dark(self) -> bool {
        self.0 & COLOR != 0
    }

    /// A non-function data cell carrying just the given color, as placed by
    /// the zig-zag codeword placer (never carries the `FUNCTION` bit).
    pub fn data_bit(dark: bool) -> Module {
        Module(if dark { COLOR } else { 0 })
    }

    /// Raw byte value, for mask application and penalty scoring.
    pub fn raw(self) -> u8 {
        self.0
    }
}

/// A square, row-major matrix of [`Module`] cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    pub size: usize,
    cells: Vec<Module>,
}

impl Matrix {
    pub fn new(size: usize) -> Self {
        Matrix {
            size,
            cells: vec![Module::default(); size * size],
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Module {
        self.cells[y as usize * self.size + x as usize]
    }

    pub fn set(&mut self, x: i32, y: i32, module: Module) {
        self.cells[y as usize * self.size + x as usize] = module;
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_composition() {
        assert!(DARK.is_function());
        assert!(DARK.is_dark());
        assert!(LIGHT.is_function());
        assert!(!LIGHT.is_dark());
        assert!(RESERVED.is_function());
        assert!(RESERVED.is_blank());
        assert!(!UNSET.is_function());
    }

    #[test]
    fn matrix_get_set_roundtrip() {
        let mut m = Matrix::new(21);
        m.set(3, 4, DARK);
        assert_eq!(m.get(3, 4), DARK);
        assert_eq!(m.get(0, 0), UNSET);
    }
}
