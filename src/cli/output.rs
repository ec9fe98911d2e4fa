//! Output control utilities for verbosity management.

/// Output control configuration.
pub struct OutputConfig {
    quiet: bool,
    verbose_level: u8,
}

impl OutputConfig {
    /// Creates a new output configuration from CLI flags.
    pub fn new(quiet: bool, verbose: u8) -> Self {
        Self {
            quiet,
            verbose_level: verbose,
        }
    }

    /// Whether info messages should be displayed.
    pub fn should_show_info(&self) -> bool {
        !self.quiet
    }

    /// Whether verbose messages should be displayed.
    pub fn should_show_verbose(&self) -> bool {
        !self.quiet && self.verbose_level >= 2
    }

    /// Whether debug messages should be displayed.
    pub fn should_show_debug(&self) -> bool {
        !self.quiet && self.verbose_level >= 3
    }
}

/// Prints an info message (shown unless `--quiet`).
pub fn info(config: &OutputConfig, message: &str) {
    if config.should_show_info() {
        println!("{}", message);
    }
}

/// Prints a verbose message (shown at verbosity level 2+).
pub fn verbose(config: &OutputConfig, message: &str) {
    if config.should_show_verbose() {
        println!("{}", message);
    }
}

/// Prints a debug message (shown at verbosity level 3+).
pub fn debug(config: &OutputConfig, message: &str) {
    if config.should_show_debug() {
        eprintln!("[DEBUG] {}", message);
    }
}
