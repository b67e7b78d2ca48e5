use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    match journal_icon::generate_icon() {
        Ok(path) => {
            println!("Icon created: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
