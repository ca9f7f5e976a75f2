use std::process::ExitCode;

use tailshade::cli::{BuildInfo, run_cli};

fn main() -> ExitCode {
    run_cli(&BuildInfo::from_env())
}
