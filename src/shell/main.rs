use marketplace_cart::shell::config::CartConfig;
use marketplace_cart::shell::state::mount;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CartConfig::from_env()?;
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let provider = mount(&config).await;
    let cart = provider.handle().products()?;

    tracing::info!(
        data_dir = %config.data_dir.display(),
        items = cart.len(),
        total_quantity = cart.total_quantity(),
        subtotal = cart.subtotal(),
        "cart ready"
    );
    for item in cart.items() {
        tracing::info!(
            id = %item.id,
            title = %item.title,
            price = item.price,
            quantity = item.quantity,
            "line item"
        );
    }

    provider.unmount();
    Ok(())
}
