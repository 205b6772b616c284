use colored::Colorize;

pub fn print_banner() {
    println!(
        "{}",
        concat!("nmclean v", env!("CARGO_PKG_VERSION")).bold().cyan()
    );
    println!();
}

pub fn print_scan_summary(found: usize, skipped: usize) {
    println!(
        "{} {}",
        format!("Found {found}").bold(),
        "node_modules directories".bold()
    );
    if skipped > 0 {
        print_warning(&format!("{skipped} directories could not be read and were skipped"));
    }
}

pub fn deleted_line(path: &str, size: &str) -> String {
    format!("{path} and contents deleted, freed {size}")
}

pub fn would_delete_line(path: &str, size: &str) -> String {
    format!("{path} would free {size}")
}

pub fn summary_line(count: usize, freed: &str) -> String {
    format!("cleaned {count} directories, freed {freed}")
}

pub fn print_deleted(path: &str, size: &str) {
    println!("  {}", deleted_line(path, size));
}

pub fn print_would_delete(path: &str, size: &str) {
    println!("  {}", would_delete_line(path, size).dimmed());
}

pub fn print_delete_error(path: &str, err: &str) {
    println!("  {} {}: {}", "Failed".red().bold(), path.dimmed(), err.red());
}

pub fn print_summary(count: usize, freed: &str) {
    println!();
    println!("{}", summary_line(count, freed).green().bold());
}

pub fn print_failed_count(failed: usize) {
    print_warning(&format!("{failed} directories could not be deleted"));
}

pub fn print_dry_run_footer(total: &str) {
    println!();
    println!(
        "{}",
        format!("Dry run: {total} reclaimable. Run without --dry-run to delete.")
            .yellow()
            .bold()
    );
}

pub fn print_disk_free(available: &str, percent_used: f32) {
    println!(
        "  {} {} available ({percent_used:.0}% used)",
        "Disk:".cyan().bold(),
        available
    );
}

pub fn print_warning(msg: &str) {
    println!("{} {}", "Warning:".red().bold(), msg.red());
}

pub fn print_info(msg: &str) {
    println!("{} {}", "Info:".cyan().bold(), msg);
}
