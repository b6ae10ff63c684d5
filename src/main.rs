use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cfg = ledger_check::config::Config::parse();
    if cfg.wants_version() {
        println!("{}", ledger_check::config::VERSION);
        return Ok(());
    }
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(ledger_check::run(cfg))
}
