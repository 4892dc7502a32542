use std::process::ExitCode;

use ofs_demos::demos::BlankWindow;

fn main() -> ExitCode {
    ofs_demos::run::<BlankWindow>()
}
