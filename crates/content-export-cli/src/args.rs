use std::path::PathBuf;

use content_export_engine::ExportFormat;

pub const USAGE: &str =
    "<input.html|input-dir> [output-dir] [--format docx|pdf] [--title TEXT] [--save-config]";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub input: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub format: Option<ExportFormat>,
    pub title: Option<String>,
    /// Remember the output directory and format as the new defaults.
    pub save_config: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Export(Args),
    Help,
}

/// Parse the arguments after the program name.
pub fn parse_args<I, S>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut positional = Vec::new();
    let mut format = None;
    let mut title = None;
    let mut save_config = false;

    let mut args = args.into_iter().map(Into::into);
    while let Some(arg) = args.next() {
        let (flag, inline_value) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--save-config" => save_config = true,
            "-f" | "--format" => {
                let value = inline_value
                    .or_else(|| args.next())
                    .ok_or_else(|| format!("{flag} needs a value"))?;
                let parsed = value.parse::<ExportFormat>().map_err(|e| e.to_string())?;
                format = Some(parsed);
            }
            "-t" | "--title" => {
                let value = inline_value
                    .or_else(|| args.next())
                    .ok_or_else(|| format!("{flag} needs a value"))?;
                title = Some(value);
            }
            _ if flag.starts_with('-') && flag.len() > 1 => {
                return Err(format!("Unknown option: {flag}"));
            }
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let input = positional
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| "No input file or directory given".to_string())?;
    let output_dir = positional.next().map(PathBuf::from);
    if let Some(extra) = positional.next() {
        return Err(format!("Unexpected argument: {extra}"));
    }

    Ok(Command::Export(Args {
        input,
        output_dir,
        format,
        title,
        save_config,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn export(args: &[&str]) -> Args {
        match parse_args(args.iter().copied()).unwrap() {
            Command::Export(args) => args,
            Command::Help => panic!("expected export command"),
        }
    }

    #[test]
    fn input_only() {
        assert_eq!(
            export(&["page.html"]),
            Args {
                input: PathBuf::from("page.html"),
                output_dir: None,
                format: None,
                title: None,
                save_config: false,
            }
        );
    }

    #[test]
    fn all_options() {
        assert_eq!(
            export(&[
                "pages",
                "out",
                "--format",
                "PDF",
                "--title",
                "Oferta 2024",
                "--save-config",
            ]),
            Args {
                input: PathBuf::from("pages"),
                output_dir: Some(PathBuf::from("out")),
                format: Some(ExportFormat::Pdf),
                title: Some("Oferta 2024".to_string()),
                save_config: true,
            }
        );
    }

    #[test]
    fn inline_option_values() {
        let args = export(&["--format=docx", "page.html", "--title=Raport"]);
        assert_eq!(args.format, Some(ExportFormat::Docx));
        assert_eq!(args.title.as_deref(), Some("Raport"));
        assert_eq!(args.input, PathBuf::from("page.html"));
    }

    #[test]
    fn help() {
        assert_eq!(parse_args(["page.html", "--help"]), Ok(Command::Help));
    }

    #[test]
    fn errors() {
        assert!(parse_args(Vec::<String>::new()).is_err());
        assert!(parse_args(["page.html", "--format"]).is_err());
        assert!(parse_args(["page.html", "--format", "odt"]).is_err());
        assert!(parse_args(["page.html", "--verbose"]).is_err());
        assert!(parse_args(["a.html", "out", "extra"]).is_err());
    }
}
