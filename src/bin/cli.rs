#[tokio::main]
async fn main() -> anyhow::Result<()> {
    hcpaudit_ui_terminal::run().await
}
