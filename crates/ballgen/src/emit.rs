use crate::ball::Ball;
use std::io::{self, Write};
use tracing::trace;

/// Write one assignment line per cell of `ball` to `out`, each terminated by `\n`.
///
/// Returns the number of lines written. `out` is flushed before returning.
#[tracing::instrument(level = "debug", skip(out))]
pub fn write_table(ball: &Ball, mut out: impl Write) -> io::Result<usize> {
    let mut lines = 0;

    for cell in ball.cells() {
        trace!(idx = cell.idx, x = cell.x, y = cell.y, value = cell.value);
        writeln!(out, "{cell}")?;
        lines += 1;
    }

    out.flush()?;
    Ok(lines)
}

/// Same output as [`write_table`], collected into a string.
pub fn render_table(ball: &Ball) -> String {
    ball.cells().map(|cell| format!("{cell}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::{render_table, write_table};
    use crate::Ball;
    use std::io::{self, Write};

    #[test]
    fn writes_every_line() {
        let mut out = Vec::new();
        let lines = write_table(&Ball::DEFAULT, &mut out).unwrap();

        assert_eq!(lines, 256);

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().count(), 256);
        assert!(out.ends_with(";\n"));
        assert_eq!(out, render_table(&Ball::DEFAULT));
    }

    struct Failing {
        budget: usize,
    }

    impl Write for Failing {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.budget == 0 {
                return Err(io::Error::from(io::ErrorKind::BrokenPipe));
            }
            self.budget -= 1;
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn propagates_write_errors() {
        let err = write_table(&Ball::DEFAULT, Failing { budget: 3 }).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
