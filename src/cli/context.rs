//! CLI context - bundles settings, flags, and clipboard state.

use std::path::{Path, PathBuf};

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::prompts::Prompts;
use super::{CliError, CliFlags};
use crate::entropy::{RandomSource, Source};
use crate::pass::charset;
use crate::pass::output::{self, Target};
use crate::settings::Settings;
use crate::terminal::{calculate_entropy, entropy_strength, format_number, print_box};

const DEFAULT_OUTPUT_FILE: &str = "passwords.txt";

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    prompts: Prompts,
    clipboard: Option<ClipboardContext>,
}

impl Context {
    /// Build the context, starting from saved settings when `--saved` is given.
    pub fn new(flags: CliFlags) -> Self {
        let prompts = Prompts::new(flags.quiet);

        let base = if flags.saved {
            Settings::load().unwrap_or_else(|e| {
                prompts.warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Self::with_settings(flags, base)
    }

    /// Apply `flags` on top of `base`.
    pub fn with_settings(flags: CliFlags, base: Settings) -> Self {
        let mut ctx = Self {
            settings: base,
            prompts: Prompts::new(flags.quiet),
            flags,
            clipboard: None,
        };
        ctx.apply_flags();
        ctx
    }

    pub fn run(&mut self) -> Result<(), CliError> {
        self.settings.config.validate()?;
        self.handle_save()?;

        let count = self.settings.number_of_passwords;
        if self.flags.stats {
            self.print_stats(count);
        }

        log::info!("random source: {}", self.settings.source);
        let mut rng = self.settings.source.build();
        self.generate_output(count, rng.as_mut())
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        let flags = &self.flags;
        let config = &mut self.settings.config;

        if let Some(len) = flags.length {
            *config = std::mem::take(config).with_length(len);
        }
        match (flags.min, flags.max) {
            (Some(min), Some(max)) => {
                config.min_length = min;
                config.max_length = max;
            }
            (Some(min), None) => {
                config.min_length = min;
                config.max_length = config.max_length.max(min);
            }
            (None, Some(max)) => {
                config.max_length = max;
                config.min_length = config.min_length.min(max);
            }
            (None, None) => {}
        }

        if flags.no_upper {
            config.allow_capital_letters = false;
        }
        if flags.no_numbers {
            config.use_numbers = false;
        }
        if flags.no_special {
            config.use_special_chars = false;
        }
        if let Some(ref chars) = flags.special {
            config.special_chars_list = chars.clone();
            config.use_special_chars = true;
        }
        if let Some(ref chars) = flags.exclude {
            config.exclude_chars = chars.clone();
        }
        if flags.no_ensure {
            config.ensure_one_of_each = false;
        }
        if flags.no_repeats {
            config.no_consecutive_repeats = true;
        }

        if let Some(num) = flags.number {
            self.settings.number_of_passwords = num;
        }
        if flags.urandom {
            self.settings.source = Source::Os;
        }
        if let Some(seed) = flags.seed {
            self.settings.source = Source::Seeded(seed);
        }
    }

    fn handle_save(&self) -> Result<(), CliError> {
        if !self.flags.save {
            return Ok(());
        }
        if let Source::Seeded(_) = self.settings.source {
            self.prompts.warn("Warning: saving a fixed seed - every run will repeat the same passwords");
        }
        let path = self.settings.save()?;
        self.prompts.settings_saved(&path.display().to_string());
        Ok(())
    }

    fn print_stats(&self, count: usize) {
        let config = &self.settings.config;
        let pool = charset::size(config);
        let low = calculate_entropy(config.min_length, pool);
        let high = calculate_entropy(config.max_length, pool);

        let length = if config.min_length == config.max_length {
            config.min_length.to_string()
        } else {
            format!("{}-{}", config.min_length, config.max_length)
        };
        let entropy = if low == high {
            format!("{:.1} bits ({})", low, entropy_strength(low))
        } else {
            format!("{:.1}-{:.1} bits ({})", low, high, entropy_strength(low))
        };

        print_box(
            "Entropy",
            &[
                entropy,
                format!("Pool: {} chars \u{2022} Length: {}", pool, length),
                format!("Source: {}", self.settings.source),
                format!("Passwords: {}", format_number(count)),
            ],
        );
    }

    /// Generate passwords and handle output.
    fn generate_output(
        &mut self,
        count: usize,
        rng: &mut dyn RandomSource,
    ) -> Result<(), CliError> {
        let use_clipboard = self.flags.board && self.open_clipboard()?;
        let config = &self.settings.config;

        if use_clipboard {
            let mut passwords = output::write_batch(config, count, rng, Target::Clipboard)?
                .unwrap_or_default();
            let Some(ctx) = self.clipboard.as_mut() else {
                passwords.zeroize();
                return Ok(());
            };
            hand_off(ctx, &mut passwords)?;
            self.prompts.clipboard_copied(count);
            return Ok(());
        }

        if let Some(ref raw) = self.flags.output {
            let path = resolve_output_path(raw);
            output::write_batch(config, count, rng, Target::File(&path))?;
            let full_path = std::fs::canonicalize(&path)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| path.display().to_string());
            self.prompts.passwords_written(count, &full_path);
            return Ok(());
        }

        output::write_batch(config, count, rng, Target::Stdout)?;
        Ok(())
    }

    /// Returns false when the user chose to fall back to the terminal.
    fn open_clipboard(&mut self) -> Result<bool, CliError> {
        match ClipboardContext::new() {
            Ok(ctx) => {
                self.clipboard = Some(ctx);
                Ok(true)
            }
            Err(e) => {
                log::debug!("clipboard unavailable: {}", e);
                if self.prompts.clipboard_fallback() {
                    Ok(false)
                } else {
                    Err(CliError::Aborted)
                }
            }
        }
    }
}

/// Moves the joined passwords into the clipboard, leaving `passwords` empty.
fn hand_off<C: ClipboardProvider>(ctx: &mut C, passwords: &mut String) -> Result<(), CliError> {
    ctx.set_contents(std::mem::take(passwords))
        .map_err(|e| CliError::Clipboard(e.to_string()))
}

/// `.` and directories get `passwords.txt`; other paths get a `.txt` extension if missing.
pub fn resolve_output_path(raw: &str) -> PathBuf {
    if raw == "." || raw.ends_with('/') || Path::new(raw).is_dir() {
        return Path::new(raw).join(DEFAULT_OUTPUT_FILE);
    }
    if raw.ends_with(".txt") {
        PathBuf::from(raw)
    } else {
        PathBuf::from(format!("{}.txt", raw))
    }
}
