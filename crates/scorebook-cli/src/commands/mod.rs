pub mod check;
pub mod compare;
pub mod import;

use scorebook_core::Config;

/// Output settings resolved from config and command-line flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    pub json: bool,
    pub color: bool,
}

impl OutputOptions {
    /// Flags only ever switch JSON on and color off; config supplies the rest.
    pub fn resolve(config: &Config, json_flag: bool, no_color_flag: bool) -> Self {
        Self {
            json: json_flag || config.display.json,
            color: !no_color_flag && config.display.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let options = OutputOptions::resolve(&Config::default(), false, false);
        assert_eq!(
            options,
            OutputOptions {
                json: false,
                color: true
            }
        );
    }

    #[test]
    fn test_resolve_flags_override_config() {
        let options = OutputOptions::resolve(&Config::default(), true, true);
        assert!(options.json);
        assert!(!options.color);
    }

    #[test]
    fn test_resolve_config_values() {
        let mut config = Config::default();
        config.display.json = true;
        config.display.color = false;

        let options = OutputOptions::resolve(&config, false, false);
        assert!(options.json);
        assert!(!options.color);
    }
}
