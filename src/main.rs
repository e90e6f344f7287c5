#[tokio::main]
async fn main() {
    if let Err(e) = vaxcard_lib::run().await {
        tracing::error!("{e}");
        eprintln!("vaxcard: {e}");
        std::process::exit(1);
    }
}
