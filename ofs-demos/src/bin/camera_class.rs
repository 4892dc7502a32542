use std::process::ExitCode;

use ofs_demos::demos::CameraClass;

fn main() -> ExitCode {
    ofs_demos::run::<CameraClass>()
}
