#[cfg(any(feature = "encrypt", feature = "decrypt"))]
use raescrypt::cli;

#[cfg(any(feature = "encrypt", feature = "decrypt"))]
fn main() {
    if let Err(e) = cli::run(std::env::args()) {
        eprintln!("Error: {:?}", e);
        std::process::exit(cli::exit_code(&e));
    }
}

#[cfg(not(any(feature = "encrypt", feature = "decrypt")))]
fn main() {
    eprintln!("Error: at least one of the 'encrypt' or 'decrypt' features is required for the binary");
    std::process::exit(1);
}
