use minus::Pager;
use std::io::{self, Write};

/// Destination for rendered diffs.
///
/// The minus pager doesn't implement `std::io::Write`, so the `Pager` variant adapts it. Paged
/// output is only shown once [`Output::finish`] is called.
pub enum Output {
    Stream(Box<dyn Write>),
    Pager(Pager),
}

impl Output {
    pub fn stdout() -> Self {
        Output::Stream(Box::new(io::stdout()))
    }

    pub fn pager() -> Self {
        Output::Pager(Pager::new())
    }

    pub fn finish(self) -> anyhow::Result<()> {
        match self {
            Output::Stream(mut writer) => writer.flush()?,
            Output::Pager(pager) => minus::page_all(pager)?,
        }

        Ok(())
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stream(writer) => writer.write(buf),
            Output::Pager(pager) => {
                let s = std::str::from_utf8(buf)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                pager.push_str(s).map_err(io::Error::other)?;
                Ok(buf.len())
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stream(writer) => writer.flush(),
            Output::Pager(_) => Ok(()),
        }
    }
}
