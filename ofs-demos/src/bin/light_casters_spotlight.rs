use std::process::ExitCode;

use ofs_demos::demos::SpotlightDemo;

fn main() -> ExitCode {
    ofs_demos::run::<SpotlightDemo>()
}
