fn main() {
    if let Err(e) = montela_catalog_lib::run() {
        tracing::error!(error = %e, "startup failed");
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
