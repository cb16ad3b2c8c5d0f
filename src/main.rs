#[tokio::main]
async fn main() {
    if let Err(e) = golf_league_be::start_server().await {
        eprintln!("Failed to start server: {e}");
        std::process::exit(1);
    }
}
