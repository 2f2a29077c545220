#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    if let Err(err) = gong_mcp::mcp::server::run_stdio().await {
        eprintln!("gong-mcp: {}", err);
        std::process::exit(1);
    }
}
