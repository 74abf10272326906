mod platform;

use anyhow::{Context, Result};
use clap::Parser;
use ttd_core::GameState;
use ttd_debug::{debug, dump_facility_names, facility, show_info, BoundedWriter};
use ttd_headless::{load_settings, start_video_driver, write_desync_report, GameRunner};

use platform::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_categories {
        let mut buf = [0u8; 1024];
        let mut writer = BoundedWriter::new(&mut buf);
        dump_facility_names(&mut writer);
        show_info(writer.as_str().trim_end());
        return Ok(());
    }

    let mut settings = load_settings(&cli.settings);
    cli.apply_to(&mut settings);

    let (log_destination, log_file) = settings.effective_log_target();
    platform::logging::initialize(
        log_destination,
        &log_file,
        settings.desync_log_file.as_deref(),
    );

    let facility = facility();
    facility.set_show_date_in_logs(settings.show_date_in_logs);
    let report = facility.configure(&settings.debug);
    debug!(Misc, 1, "Debug levels: {}", report.effective);

    let mut driver = start_video_driver(&settings.video, settings.resolution)
        .with_context(|| format!("starting video driver '{}'", settings.video))?;

    let mut runner = GameRunner::new(GameState::new());
    driver.main_loop(&mut runner);
    driver.stop();

    debug!(
        Misc,
        1,
        "Ran {} ticks, final checksum {:016x}",
        runner.state().tick(),
        runner.state().checksum()
    );

    if let Some(dir) = &settings.report_dir {
        let path = write_desync_report(dir)
            .with_context(|| format!("writing desync report to {:?}", dir))?;
        debug!(Desync, 0, "Desync report written to {:?}", path);
    }

    Ok(())
}
