fn main() {
    if let Err(err) = styloprint::run() {
        eprintln!("{}", styloprint::format_error(&err));
        std::process::exit(1);
    }
}
