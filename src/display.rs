//! Character display capability

/// HD44780 ROM glyph for `°`
pub const DEGREE_GLYPH: u8 = 0xDF;

/// A text display addressed by column and row.
pub trait CharDisplay {
    type Error;

    /// Blanks the screen and homes the cursor.
    fn clear(&mut self) -> Result<(), Self::Error>;

    fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), Self::Error>;

    /// Writes raw character codes at the cursor.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.write_bytes(s.as_bytes())
    }
}

impl<D: CharDisplay> CharDisplay for &mut D {
    type Error = D::Error;

    fn clear(&mut self) -> Result<(), Self::Error> {
        (**self).clear()
    }

    fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), Self::Error> {
        (**self).set_cursor(column, row)
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        (**self).write_bytes(bytes)
    }
}

/// Lets `ufmt::uwrite!` format straight onto a display.
pub struct TextWriter<'a, D: CharDisplay>(pub &'a mut D);

impl<D: CharDisplay> ufmt::uWrite for TextWriter<'_, D> {
    type Error = D::Error;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.0.write_str(s)
    }
}
