use std::process::ExitCode;

use ofs_demos::demos::PointLightDemo;

fn main() -> ExitCode {
    ofs_demos::run::<PointLightDemo>()
}
