mod cli;
mod output;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use dialoguer::{Input, MultiSelect};
use indicatif::{ProgressBar, ProgressStyle};

use nmclean::disk_info;
use nmclean::utils::{display_path, format_bytes};
use nmclean::{measure_only, reclaim, CleanSummary, Config, ScanReport, Scanner};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose);
    output::print_banner();

    let config = Config::default().with_decimals(cli.decimals);
    let config = match cli.root {
        Some(root) => config.with_root(root),
        None => {
            let root = prompt_root(&config.root)?;
            config.with_root(root)
        }
    };

    let report = scan_with_spinner(&config)?;
    output::print_scan_summary(report.matches.len(), report.skipped.len());
    if report.is_empty() {
        output::print_info(&format!("Nothing to clean under {}", config.root.display()));
        return Ok(());
    }

    let selected = if cli.all {
        report.matches.clone()
    } else {
        prompt_selection(&report.matches)?
    };
    if selected.is_empty() {
        return Ok(());
    }

    let fmt = |bytes: u64| format_bytes(bytes, config.decimals);
    let summary = clean(&selected, cli.dry_run, config.decimals);

    if cli.dry_run {
        output::print_dry_run_footer(&fmt(summary.reclaimable_bytes));
        return Ok(());
    }

    output::print_summary(summary.cleaned, &fmt(summary.freed_bytes));
    if summary.failed > 0 {
        output::print_failed_count(summary.failed);
    }
    print_disk_free(&config);

    Ok(())
}

/// Reclaim (or, on a dry run, only measure) each selected path in order,
/// printing one line per path.
fn clean(selected: &[PathBuf], dry_run: bool, decimals: usize) -> CleanSummary {
    let mut summary = CleanSummary::default();

    for path in selected {
        let shown = path.display().to_string();
        let outcome = if dry_run {
            measure_only(path)
        } else {
            reclaim(path)
        };
        let size = format_bytes(outcome.size_bytes, decimals);

        if let Some(err) = outcome.deletion_error() {
            output::print_delete_error(&shown, &err.to_string());
        } else if dry_run {
            output::print_would_delete(&shown, &size);
        } else {
            output::print_deleted(&shown, &size);
        }
        if !outcome.measure_errors.is_empty() {
            log::warn!(
                "size of {} is partial: {} entries could not be read",
                shown,
                outcome.measure_errors.len()
            );
        }
        summary.record(&outcome);
    }

    summary
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn prompt_root(default: &Path) -> Result<PathBuf> {
    let answer = Input::<String>::new()
        .with_prompt("Which path would you like to clean?")
        .default(default.display().to_string())
        .interact_text()?;
    Ok(PathBuf::from(answer.trim()))
}

fn scan_with_spinner(config: &Config) -> Result<ScanReport> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.set_message(format!("Scanning {} for {}", config.root.display(), config.marker));
    spinner.enable_steady_tick(Duration::from_millis(120));

    let report = Scanner::new(&config.marker).scan(&config.root);

    spinner.finish_and_clear();
    log::debug!(
        "scan of {} finished: {} matches, {} skipped",
        config.root.display(),
        report.matches.len(),
        report.skipped.len()
    );
    Ok(report)
}

/// Empty when the user picks nothing or cancels the prompt.
fn prompt_selection(matches: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let items: Vec<String> = matches.iter().map(|p| display_path(p)).collect();
    let picked = MultiSelect::new()
        .with_prompt("Pick the node_modules paths to delete (space to toggle, enter to confirm)")
        .items(&items)
        .interact_opt()?;

    Ok(picked
        .unwrap_or_default()
        .into_iter()
        .map(|i| matches[i].clone())
        .collect())
}

fn print_disk_free(config: &Config) {
    let Some(volume) = disk_info::existing_ancestor(&config.root) else {
        return;
    };
    if let Some(info) = disk_info::get_disk_info(volume) {
        output::print_disk_free(
            &format_bytes(info.available, config.decimals),
            info.usage_percent(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn project(root: &Path, name: &str, bytes: usize) -> PathBuf {
        let dir = root.join(name).join("node_modules");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("index.js"), vec![0u8; bytes]).unwrap();
        dir
    }

    #[test]
    fn empty_selection_deletes_nothing() {
        let tmp = tempdir().unwrap();
        let dir = project(tmp.path(), "app", 10);

        let summary = clean(&[], false, 2);

        assert_eq!(summary.cleaned, 0);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.freed_bytes, 0);
        assert!(dir.exists());
    }

    #[test]
    fn selected_paths_are_removed_and_totalled() {
        let tmp = tempdir().unwrap();
        let p1 = project(tmp.path(), "p1", 100);
        let p2 = project(tmp.path(), "p2", 200);
        let untouched = project(tmp.path(), "p3", 50);

        let summary = clean(&[p1.clone(), p2.clone()], false, 2);

        assert_eq!(summary.cleaned, 2);
        assert_eq!(summary.freed_bytes, 300);
        assert_eq!(
            output::summary_line(summary.cleaned, &format_bytes(summary.freed_bytes, 2)),
            "cleaned 2 directories, freed 300 Bytes"
        );
        assert!(!p1.exists() && !p2.exists());
        assert!(untouched.exists());
    }

    #[test]
    fn dry_run_keeps_everything() {
        let tmp = tempdir().unwrap();
        let dir = project(tmp.path(), "app", 64);

        let summary = clean(&[dir.clone()], true, 2);

        assert_eq!(summary.cleaned, 0);
        assert_eq!(summary.freed_bytes, 0);
        assert_eq!(summary.reclaimable_bytes, 64);
        assert!(dir.exists());
    }
}
