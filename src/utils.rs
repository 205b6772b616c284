use std::path::{Path, PathBuf};

const UNITS: [&str; 9] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Home directory of the current user, if the platform reports one.
pub fn home_dir() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Format byte count as human-readable string with two decimals at most.
pub fn format_size(bytes: u64) -> String {
    format_bytes(bytes, 2)
}

/// Format byte count using base-1024 units, rounded to `decimals` places with
/// trailing zeros dropped ("1 KB", "1.5 KB").
pub fn format_bytes(bytes: u64, decimals: usize) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut value = bytes as f64;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    // Ties round away from zero; f64's Display drops the trailing zeros.
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    format!("{rounded} {}", UNITS[unit])
}

/// Shorten a path for display by replacing home dir with ~.
pub fn display_path(path: &Path) -> String {
    if let Some(home) = home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_has_no_fraction() {
        assert_eq!(format_size(0), "0 Bytes");
        assert_eq!(format_bytes(0, 5), "0 Bytes");
    }

    #[test]
    fn unit_boundaries() {
        assert_eq!(format_size(1), "1 Bytes");
        assert_eq!(format_size(1023), "1023 Bytes");
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1024 * 1024), "1 MB");
        assert_eq!(format_size(5 * 1024 * 1024 * 1024), "5 GB");
    }

    #[test]
    fn rounding_respects_decimals() {
        assert_eq!(format_size(1100), "1.07 KB");
        assert_eq!(format_bytes(1100, 0), "1 KB");
        assert_eq!(format_bytes(1100, 1), "1.1 KB");
        // 1023.999 KB rounds up but stays in the smaller unit.
        assert_eq!(format_bytes(1024 * 1024 - 1, 2), "1024 KB");
    }

    #[test]
    fn ties_round_up() {
        assert_eq!(format_size(1152), "1.13 KB");
        assert_eq!(format_bytes(1280, 1), "1.3 KB");
        assert_eq!(format_bytes(2560, 0), "3 KB");
    }

    #[test]
    fn largest_u64_fits_the_ladder() {
        assert_eq!(format_size(u64::MAX), "16 EB");
    }

    #[test]
    fn display_path_outside_home_is_unchanged() {
        let p = Path::new("/definitely/not/home/node_modules");
        if home_dir().map_or(true, |h| !p.starts_with(h)) {
            assert_eq!(display_path(p), "/definitely/not/home/node_modules");
        }
    }
}
