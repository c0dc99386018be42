fn main() {
    if let Err(err) = csv_fdw::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
