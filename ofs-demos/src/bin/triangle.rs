use std::process::ExitCode;

use ofs_demos::demos::Triangle;

fn main() -> ExitCode {
    ofs_demos::run::<Triangle>()
}
