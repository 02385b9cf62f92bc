use grid_tui::App;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // the TUI owns stdout, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let terminal = ratatui::init();
    let app = App::new()?;
    let result = app.run(terminal).await;
    ratatui::restore();
    result
}
