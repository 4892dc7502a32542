use std::process::ExitCode;

use ofs_demos::demos::DirectionalLightDemo;

fn main() -> ExitCode {
    ofs_demos::run::<DirectionalLightDemo>()
}
