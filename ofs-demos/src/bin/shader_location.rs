use std::process::ExitCode;

use ofs_demos::demos::ShaderLocation;

fn main() -> ExitCode {
    ofs_demos::run::<ShaderLocation>()
}
