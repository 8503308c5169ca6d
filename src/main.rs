fn main() {
    if let Err(err) = readiness_assessment::cli::run() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
