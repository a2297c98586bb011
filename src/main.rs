#[tokio::main]
async fn main() {
    if let Err(e) = quiz_platform_api::run().await {
        eprintln!("quiz-platform-api fatal: {e:#}");
        std::process::exit(1);
    }
}
