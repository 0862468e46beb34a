use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bloom_app=info,bloom_core=info,bloom_catalog=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = bloom_store::Config::load()?;
    tracing::info!(shop = %config.shop.name, pricing = ?config.pricing.strategy, "starting demo");

    let lines = match bloom_app::demo::run(&config) {
        Ok(lines) => lines,
        Err(err) if err.is_client_error() => {
            tracing::warn!(error = %err, "demo order rejected");
            return Err(err.into());
        }
        Err(err) => {
            tracing::error!(error = %err, "demo failed");
            return Err(err.into());
        }
    };
    for line in lines {
        println!("{}", line);
    }

    Ok(())
}
