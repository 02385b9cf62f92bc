use grid_tui::App;
use grid_tui::Config;
use grid_tui::common::{IdentityResponse, RequestFailed};

// cargo test --package grid-tui --test test_status_screen -- test_status_screen_online --exact --nocapture --ignored
#[tokio::test]
#[ignore = "run manually"]
async fn test_status_screen_online() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let terminal = ratatui::init();

    let mut app = App::with_config(Config::default())?;
    app.status.apply_identity(Ok(IdentityResponse {
        data: "OpenGrid".to_string(),
    }));

    let result = app.run(terminal).await;
    ratatui::restore();
    result
}

// cargo test --package grid-tui --test test_status_screen -- test_status_screen_offline --exact --nocapture --ignored
#[tokio::test]
#[ignore = "run manually"]
async fn test_status_screen_offline() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let terminal = ratatui::init();

    let mut app = App::with_config(Config::default())?;
    app.status
        .apply_identity(Err(RequestFailed::new("connection refused")));

    let result = app.run(terminal).await;
    ratatui::restore();
    result
}
