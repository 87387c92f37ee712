// Renders the regenerated `homebrew.nix`.
//
// Every package is looked up again and rendered as one line of the list:
//   "git", # Distributed revision control system
// or, when the lookup failed, commented out with the error as the comment:
//   # "nope", # Error: No available formula with the name "nope".

use colored::Colorize;

use crate::libs::brew_info::InfoSource;
use crate::libs::description::describe;
use crate::log_debug;
use crate::schemas::packages::{Description, PackageKind};

/// Indentation of entries inside a list block.
const ENTRY_INDENT: &str = "      ";
/// Separator between rendered entries.
const ENTRY_SEPARATOR: &str = ",\n";

/// Looks up every brew and cask through `source` and returns the new file content.
///
/// # Arguments
/// * `source`: Answers the `brew info` lookups.
/// * `brews`: Formula names, in the order they appeared in the input.
/// * `casks`: Cask names, in the order they appeared in the input.
///
/// # Returns
/// The full text of the regenerated `homebrew.nix`. Failed lookups are
/// commented out, never dropped.
pub fn generate(source: &dyn InfoSource, brews: &[String], casks: &[String]) -> String {
    log_debug!(
        "[Generator] Rendering {} brews and {} casks",
        brews.len().to_string().cyan(),
        casks.len().to_string().cyan()
    );
    let brew_lines = render_list(source, brews, PackageKind::Formula);
    let cask_lines = render_list(source, casks, PackageKind::Cask);
    render_template(&brew_lines, &cask_lines)
}

/// Rendered entries for one list, joined with the entry separator.
fn render_list(source: &dyn InfoSource, names: &[String], kind: PackageKind) -> String {
    names
        .iter()
        .map(|name| render_entry(name, &describe(source, name, kind)))
        .collect::<Vec<_>>()
        .join(ENTRY_SEPARATOR)
}

/// One list line for `name`, commented out when its lookup failed.
///
/// # Arguments
/// * `name`: The package name, quoted in the output.
/// * `description`: Becomes the trailing comment.
///
/// # Returns
/// A single indented line without a trailing newline.
pub fn render_entry(name: &str, description: &Description) -> String {
    let prefix = if description.is_failure() { "# " } else { "" };
    format!(
        "{}{}\"{}\", # {}",
        ENTRY_INDENT,
        prefix,
        name,
        description.comment_text()
    )
}

/// Substitutes the rendered lists into the fixed `homebrew` block.
/// The text starts with an empty line.
fn render_template(brew_lines: &str, cask_lines: &str) -> String {
    format!(
        r#"
{{
  homebrew = {{
    enable = true;

    brews = [
{brew_lines}
    ];

    casks = [
{cask_lines}
    ];

    taps = [
    ];

    masApps = [
    ];
  }};
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::brew_info::MockInfoSource;
    use crate::schemas::packages::PackageInfo;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn active_entry_carries_description() {
        assert_eq!(
            render_entry("git", &Description::Found("Distributed revision control system".into())),
            "      \"git\", # Distributed revision control system"
        );
    }

    #[test]
    fn missing_description_keeps_entry_active() {
        assert_eq!(
            render_entry("tool", &Description::Missing),
            "      \"tool\", # "
        );
    }

    #[test]
    fn failed_entry_is_commented_out() {
        let line = render_entry(
            "nope",
            &Description::Failed("Error: No available formula with the name \"nope\".".into()),
        );
        assert_eq!(
            line,
            "      # \"nope\", # Error: No available formula with the name \"nope\"."
        );
        assert!(line.trim_start().starts_with("# "));
    }

    #[test]
    fn empty_lists_render_empty_blocks() {
        let source = MockInfoSource::new();
        let output = generate(&source, &[], &[]);
        assert!(output.contains("    brews = [\n\n    ];"));
        assert!(output.contains("    casks = [\n\n    ];"));
        assert!(output.contains("    taps = [\n    ];"));
        assert!(output.contains("    masApps = [\n    ];"));
    }

    #[test]
    fn template_starts_with_blank_line() {
        let output = render_template("", "");
        assert!(output.starts_with("\n{\n  homebrew = {\n    enable = true;\n"));
        assert!(output.ends_with("  };\n}\n"));
    }

    #[test]
    fn generates_mixed_output() {
        let mut source = MockInfoSource::new();
        source
            .expect_fetch()
            .withf(|name, kind| name == "git" && *kind == PackageKind::Formula)
            .times(1)
            .returning(|_, _| {
                PackageInfo::Fetched(
                    "==> git: stable 2.45.2\nDistributed revision control system\n".into(),
                )
            });
        source
            .expect_fetch()
            .withf(|name, kind| name == "nope" && *kind == PackageKind::Formula)
            .times(1)
            .returning(|_, _| {
                PackageInfo::Failed("Error: No available formula with the name \"nope\".".into())
            });
        source
            .expect_fetch()
            .withf(|name, kind| name == "firefox" && *kind == PackageKind::Cask)
            .times(1)
            .returning(|_, _| {
                PackageInfo::Fetched("==> firefox: 127.0\n==> Description\nWeb browser\n".into())
            });

        let output = generate(&source, &names(&["git", "nope"]), &names(&["firefox"]));

        assert!(output.contains(
            "    brews = [\n      \"git\", # Distributed revision control system,\n      # \"nope\", # Error: No available formula with the name \"nope\".\n    ];"
        ));
        assert!(output.contains("    casks = [\n      \"firefox\", # Web browser\n    ];"));
        assert!(!output.contains("\n      \"nope\""));
    }
}
