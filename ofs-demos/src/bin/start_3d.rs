use std::process::ExitCode;

use ofs_demos::demos::Start3d;

fn main() -> ExitCode {
    ofs_demos::run::<Start3d>()
}
