use std::process::ExitCode;

fn main() -> ExitCode {
    vn_text_trim_lib::run()
}
