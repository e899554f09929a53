fn main() {
    if let Err(e) = nyuki_lib::run() {
        eprintln!("nyuki-stage: {}", e);
        std::process::exit(1);
    }
}
