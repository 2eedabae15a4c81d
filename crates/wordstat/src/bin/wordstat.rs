fn main() {
    if let Err(err) = wordstat::run() {
        eprintln!("{}", wordstat::format_error(&err));
        std::process::exit(1);
    }
}
