//! Fixed-width text rendering of term sequences.

use std::fmt::Write as _;
use std::io;

use crate::term::Term;

/// Options for rendering polynomials as text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FormatOptions {
    /// Digits after the decimal point.
    pub precision: usize,
    /// Minimum field width of each coefficient.
    pub width: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            precision: 2,
            width: 6,
        }
    }
}

impl FormatOptions {
    /// Creates options with the given precision and width.
    #[must_use]
    pub const fn new(precision: usize, width: usize) -> Self {
        Self { precision, width }
    }

    /// Appends one term as `"<coefficient>x^<exponent> "`.
    pub fn write_term(&self, out: &mut String, term: &Term) {
        // Writing into a String cannot fail
        let _ = write!(
            out,
            "{:>width$.precision$}x^{} ",
            term.coefficient(),
            term.exponent(),
            width = self.width,
            precision = self.precision,
        );
    }

    /// Renders a whole sequence on one line, without the newline.
    #[must_use]
    pub fn render(&self, terms: &[Term]) -> String {
        let mut out = String::new();
        for t in terms {
            self.write_term(&mut out, t);
        }
        out
    }

    /// Writes a sequence followed by a newline.
    ///
    /// # Errors
    ///
    /// Propagates any error from `writer`.
    pub fn write_line<W: io::Write>(&self, writer: &mut W, terms: &[Term]) -> io::Result<()> {
        writeln!(writer, "{}", self.render(terms))
    }
}
