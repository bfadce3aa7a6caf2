use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use indicatif_log_bridge::LogWrapper;
use log::{info, LevelFilter, SetLoggerError};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

static MULTI: OnceLock<MultiProgress> = OnceLock::new();

pub fn initialize_logging(log_level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = env_logger::builder()
        .filter_level(log_level)
        .parse_default_env() // Allow overriding log level through RUST_LOG env var
        .build();

    let multi = MultiProgress::new();

    LogWrapper::new(multi.clone(), logger).try_init()?;

    // A second initialisation already failed in try_init above
    let _ = MULTI.set(multi);

    Ok(())
}

/// Runs `function` while showing a spinner. Without initialised logging (tests, library use)
/// the function is just executed and timed.
pub fn run_with_spinner<'a, F, Out>(target: &'a str, task_desc: &'a str, function: F) -> Out
where
    F: FnOnce() -> Out,
{
    let start_time = Instant::now();

    let pb = MULTI.get().and_then(|multi| {
        let style = ProgressStyle::with_template("{spinner:.white} [{elapsed:.green}] {msg}").ok()?;
        let pb = ProgressBar::new_spinner()
            .with_message(format!("{}...", task_desc))
            .with_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));
        // Set up connection with log library so that progress bars don't jump around
        Some(multi.add(pb))
    });

    let out = function();

    if let (Some(multi), Some(pb)) = (MULTI.get(), pb) {
        pb.finish_and_clear();
        multi.remove(&pb);
    }
    let elapsed = indicatif::HumanDuration(start_time.elapsed());
    info!(target: target, "{} finished (took {})", task_desc, elapsed);

    out
}

pub fn run_with_pb<'a, F, Out>(
    target: &'a str, task_desc: &'a str, total: u64, function: F,
) -> Out where
    F: FnOnce(&ProgressBar) -> Out,
{
    let start_time = Instant::now();

    let style = ProgressStyle::with_template(
        "[{elapsed:.green}] {msg} [{wide_bar:.cyan/blue}] {human_pos}/{human_len} [{eta}]",
    )
    .map(|style| style.progress_chars("=> "));

    let pb = match (MULTI.get(), style) {
        (Some(multi), Ok(style)) => {
            let pb = ProgressBar::new(total)
                .with_message(format!("{}...", task_desc))
                .with_style(style);
            pb.enable_steady_tick(Duration::from_secs(1));
            multi.add(pb)
        }
        _ => ProgressBar::hidden(),
    };

    let out = function(&pb);

    pb.finish_and_clear();
    if let Some(multi) = MULTI.get() {
        multi.remove(&pb);
    }
    let elapsed = indicatif::HumanDuration(start_time.elapsed());
    info!(target: target, "{} finished (took {})", task_desc, elapsed);

    out
}
