fn main() {
    if let Err(err) = tagcloud_rs::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
