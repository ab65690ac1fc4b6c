use penny::app::App;
use penny::config::Config;
use penny::logging;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    // Flushes buffered log lines when dropped at the end of main
    let _log_guard = logging::init(&config)?;

    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}
