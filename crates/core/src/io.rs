//! Traits for implementing IO handlers. This is to enable
//! generic IO. The defaults are the obvious Rust native
//! functions.

/// Rust native I/O handling.
pub struct StdIo;

impl Io for StdIo {}

#[allow(missing_docs)]
#[allow(clippy::print_stdout, clippy::print_stderr)]
pub trait Io {
    fn print(&self, output: impl AsRef<str>) {
        print!("{}", output.as_ref());
    }

    fn flush(&self) {
        use std::io::Write;
        std::io::stdout().flush().unwrap();
    }

    fn println(&self, output: impl AsRef<str>) {
        println!("{}", output.as_ref());
    }

    fn write<W: std::io::Write>(
        &self,
        mut writer: W,
        output: impl AsRef<str>,
    ) -> std::io::Result<()> {
        write!(writer, "{}", output.as_ref())
    }

    fn writeln<W: std::io::Write>(
        &self,
        mut writer: W,
        output: impl AsRef<str>,
    ) -> std::io::Result<()> {
        writeln!(writer, "{}", output.as_ref())
    }

    fn eprintln(&self, output: impl AsRef<str>) {
        eprintln!("{}", output.as_ref());
    }
}

/// Convenience macro for formatting arguments to
/// [`Io::print`]
#[macro_export]
macro_rules! display {
    ($io:expr) => {
        $io.print("")
    };
    ($io:expr, $w:expr; $($args:tt)*) => {
        $io.write($w, format_args!($($args)*).to_string())
    };
    ($io:expr,$($args:tt)*) => {
        $io.print(format_args!($($args)*).to_string())
    };
}

/// Convenience macro for formatting arguments to
/// [`Io::println`] and [`Io::writeln`]
#[macro_export]
macro_rules! display_line {
    ($io:expr) => {
        $io.println("")
    };
    ($io:expr, $w:expr; $($args:tt)*) => {
        $io.writeln($w, format_args!($($args)*).to_string())
    };
    ($io:expr,$($args:tt)*) => {
        $io.println(format_args!($($args)*).to_string())
    };
}

/// Convenience macro for formatting arguments to
/// [`Io::eprintln`]
#[macro_export]
macro_rules! edisplay_line {
    ($io:expr,$($args:tt)*) => {
        $io.eprintln(format_args!($($args)*).to_string())
    };
}
