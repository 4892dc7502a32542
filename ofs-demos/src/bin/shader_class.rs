use std::process::ExitCode;

use ofs_demos::demos::ShaderClass;

fn main() -> ExitCode {
    ofs_demos::run::<ShaderClass>()
}
