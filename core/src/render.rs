//! Plain-text grid rendering.

use std::fmt;

use crate::board::Board;

/// One line per row, top row first. `.` blank, `x` dot, `*` star.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let mut first = true;
            for cell in row.iter() {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.status().as_char())?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
