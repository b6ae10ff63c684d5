pub mod apdu;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod hid;
pub mod identity;
pub mod ledger;
pub mod scan;

use hid::DeviceFilter;

pub async fn run(cfg: config::Config) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cfg.log_level))
        .with_writer(std::io::stderr)
        .init();

    let filter = DeviceFilter::from_config(&cfg);
    let wanted = cfg.ledger_id.clone();

    // HID enumeration and every exchange block; keep them off the runtime.
    tokio::task::spawn_blocking(move || -> anyhow::Result<()> {
        let api = diagnostics::check()?;
        let mut stdout = std::io::stdout();
        scan::scan(
            hid::discovery::enumerate(&api),
            &filter,
            |candidate| candidate.open(&api),
            &identity::tezos(),
            &wanted,
            &mut stdout,
        )?;
        Ok(())
    })
    .await?
}
