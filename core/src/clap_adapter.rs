//! Conversion from [`clap::Command`] definitions to option descriptors.
//!
//! Lets a clap-based front end hand its arguments to
//! [`HelpLayout`](crate::HelpLayout) instead of relying on clap's own help
//! renderer.

use clap::{Arg, Command};

use crate::types::OptionDescriptor;

/// Converts every argument of `command` into an [`OptionDescriptor`].
///
/// The command is built first (on a clone) so clap's generated `--help` and
/// `--version` arguments are included. Help text is kept as written.
///
/// # Examples
///
/// ```
/// use clap::{Arg, ArgAction, Command};
/// use helplayout_core::descriptors_from_command;
///
/// let command = Command::new("demo")
///     .arg(Arg::new("input").help("Input file"))
///     .arg(
///         Arg::new("jobs")
///             .short('j')
///             .long("jobs")
///             .value_name("N")
///             .help("Parallel jobs"),
///     )
///     .arg(Arg::new("quiet").short('q').action(ArgAction::SetTrue));
///
/// let options = descriptors_from_command(&command);
/// let jobs = options.iter().find(|o| o.name == "jobs").unwrap();
/// assert_eq!(jobs.display_text(), "-j, --jobs N");
/// assert!(options.iter().any(|o| o.flags.contains(&"--help".to_string())));
/// ```
pub fn descriptors_from_command(command: &Command) -> Vec<OptionDescriptor> {
    let mut command = command.clone();
    command.build();
    command.get_arguments().map(descriptor_from_arg).collect()
}

/// Converts a single clap argument.
pub fn descriptor_from_arg(arg: &Arg) -> OptionDescriptor {
    let mut flags = Vec::new();
    if let Some(short) = arg.get_short() {
        flags.push(format!("-{short}"));
    }
    if let Some(long) = arg.get_long() {
        flags.push(format!("--{long}"));
    }

    let takes_value = arg.is_positional() || arg.get_action().takes_values();
    let value_placeholder = takes_value.then(|| placeholder_for(arg));

    OptionDescriptor {
        name: arg.get_id().to_string(),
        flags,
        value_placeholder,
        help: arg.get_help().map(|help| help.to_string()),
        takes_value,
        keep_caps: true,
        hidden: arg.is_hide_set(),
    }
}

/// Value names joined by spaces, falling back to the uppercased id.
fn placeholder_for(arg: &Arg) -> String {
    match arg.get_value_names() {
        Some(names) if !names.is_empty() => names
            .iter()
            .map(|name| name.to_string())
            .collect::<Vec<_>>()
            .join(" "),
        _ => arg.get_id().as_str().to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use clap::{ArgAction, Parser};

    use super::*;
    use crate::{HelpLayout, LayoutConfig};

    /// Converts media files.
    #[derive(Debug, Parser)]
    #[command(name = "convert")]
    struct ConvertArgs {
        /// Source file.
        source: String,
        /// Output format.
        #[arg(short, long, value_name = "FMT")]
        format: Option<String>,
        /// Overwrite existing files.
        #[arg(long)]
        force: bool,
        #[arg(long, hide = true)]
        debug_dump: bool,
    }

    #[test]
    fn test_derive_command_conversion() {
        use clap::CommandFactory;

        let options = descriptors_from_command(&ConvertArgs::command());

        let source = options.iter().find(|o| o.name == "source").unwrap();
        assert!(source.is_positional());
        assert_eq!(source.display_text(), "SOURCE");

        let format = options.iter().find(|o| o.name == "format").unwrap();
        assert_eq!(format.flags, vec!["-f".to_string(), "--format".to_string()]);
        assert_eq!(format.display_text(), "-f, --format FMT");

        let force = options.iter().find(|o| o.name == "force").unwrap();
        assert!(!force.takes_value);
        assert!(force.help.as_deref().is_some_and(|h| h.starts_with("Overwrite existing files")));

        let dump = options.iter().find(|o| o.name == "debug_dump").unwrap();
        assert!(dump.hidden);
    }

    #[test]
    fn test_flag_without_value_has_no_placeholder() {
        let arg = Arg::new("verbose")
            .short('v')
            .long("verbose")
            .action(ArgAction::SetTrue);
        let option = descriptor_from_arg(&arg);
        assert_eq!(option.value_placeholder, None);
        assert_eq!(option.display_text(), "-v, --verbose");
    }

    #[test]
    fn test_converted_options_render() {
        let command = Command::new("tool")
            .arg(Arg::new("level").long("level").help("Log level"));
        let mut help = HelpLayout::new(
            LayoutConfig::default()
                .with_total_width(60)
                .with_column_bounds(4, 30)
                .with_padding(2),
        );
        help.extend_options(descriptors_from_command(&command));
        let rendered = help.render();
        assert!(rendered.contains("  --level LEVEL  Log level\n"));
        assert!(rendered.contains("  -h, --help     Print help\n"));
    }
}
