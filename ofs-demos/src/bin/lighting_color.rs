use std::process::ExitCode;

use ofs_demos::demos::LightingColor;

fn main() -> ExitCode {
    ofs_demos::run::<LightingColor>()
}
