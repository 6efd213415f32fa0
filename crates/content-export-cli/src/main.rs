use anyhow::{Context, Result, bail};
use content_export_config::Config;
use content_export_engine::{
    ExportError, ExportFormat, ExportRequest, RenderOptions, export, io,
};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::{env, process};

mod args;

use args::{Args, Command, USAGE, parse_args};

/// Everything needed to convert one or more files.
struct Job {
    output_dir: PathBuf,
    format: ExportFormat,
    title: Option<String>,
    options: RenderOptions,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    converted: usize,
    skipped: usize,
}

impl Job {
    fn resolve(args: &Args, config: Config) -> Self {
        let output_dir = args
            .output_dir
            .clone()
            .or(config.output_dir)
            .unwrap_or_else(|| default_output_dir(&args.input));

        Self {
            output_dir,
            format: args.format.unwrap_or(config.default_format),
            title: args.title.clone(),
            options: config.render,
        }
    }

    /// Convert `input` and write it under `output_dir`. Returns `None` when
    /// the file holds no document content.
    ///
    /// `claimed` holds the paths already written by this run; a clashing
    /// name gets a numeric suffix instead of overwriting.
    fn convert_file(
        &self,
        input: &Path,
        output_dir: &Path,
        claimed: &mut HashSet<PathBuf>,
    ) -> Result<Option<PathBuf>> {
        let html = io::read_html_file(input)?;
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("document");

        let mut request = ExportRequest::new(html, self.format).with_file_name(stem);
        request.title = self.title.clone();

        match export(&request, &self.options) {
            Ok(mut document) => {
                document.file_name = claim_file_name(claimed, output_dir, &document.file_name);
                let path = io::write_document(output_dir, &document)?;
                Ok(Some(path))
            }
            Err(ExportError::EmptyContent | ExportError::NoContent) => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to export {}", input.display())),
        }
    }

    fn run(&self, input: &Path) -> Result<Summary> {
        let mut summary = Summary::default();
        let mut claimed = HashSet::new();

        if input.is_dir() {
            let files = io::scan_html_files(input)?;
            if files.is_empty() {
                log::warn!("No HTML files found in {}", input.display());
            }
            for file in files {
                // Mirror the input layout below the output directory
                let relative_dir = file
                    .parent()
                    .and_then(|parent| parent.strip_prefix(input).ok())
                    .unwrap_or(Path::new(""));
                let output_dir = self.output_dir.join(relative_dir);
                let written = self.convert_file(&file, &output_dir, &mut claimed)?;
                self.record(&file, written, &mut summary);
            }
        } else {
            let written = self.convert_file(input, &self.output_dir, &mut claimed)?;
            if written.is_none() {
                bail!("{} contains no document content", input.display());
            }
            self.record(input, written, &mut summary);
        }

        Ok(summary)
    }

    fn record(&self, input: &Path, written: Option<PathBuf>, summary: &mut Summary) {
        match written {
            Some(path) => {
                log::info!("{} -> {}", input.display(), path.display());
                summary.converted += 1;
            }
            None => {
                log::warn!("Skipping {}: no document content", input.display());
                summary.skipped += 1;
            }
        }
    }
}

/// The settings worth keeping from this run: an explicit output directory
/// and format win over what the config already held.
fn remembered_config(args: &Args, config: &Config) -> Config {
    let output_dir = args
        .output_dir
        .clone()
        .map(|dir| std::path::absolute(&dir).unwrap_or(dir))
        .or_else(|| config.output_dir.clone());

    Config {
        output_dir,
        default_format: args.format.unwrap_or(config.default_format),
        render: config.render.clone(),
    }
}

/// `file_name`, or `stem-2.ext`, `stem-3.ext`, ... when it is already taken
/// in `output_dir`.
fn claim_file_name(claimed: &mut HashSet<PathBuf>, output_dir: &Path, file_name: &str) -> String {
    let path = Path::new(file_name);
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or(file_name);
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or_default();

    let mut candidate = file_name.to_string();
    let mut n = 1;
    while !claimed.insert(output_dir.join(&candidate)) {
        n += 1;
        candidate = format!("{stem}-{n}.{extension}");
    }
    if n > 1 {
        log::warn!(
            "{} already written in this run, using {candidate}",
            output_dir.join(file_name).display()
        );
    }
    candidate
}

/// Next to the input file, or inside the input directory.
fn default_output_dir(input: &Path) -> PathBuf {
    if input.is_dir() {
        return input.to_path_buf();
    }
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {program_name} {USAGE}");
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut argv = env::args();
    let program_name = argv
        .next()
        .unwrap_or_else(|| "content-export".to_string());

    let args = match parse_args(argv) {
        Ok(Command::Export(args)) => args,
        Ok(Command::Help) => {
            print_usage(&program_name);
            return Ok(());
        }
        Err(e) => {
            eprintln!("Error: {e}");
            print_usage(&program_name);
            process::exit(1);
        }
    };

    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            print_usage(&program_name);
            process::exit(1);
        }
    };

    if !args.input.exists() {
        eprintln!("Error: Input '{}' does not exist", args.input.display());
        print_usage(&program_name);
        process::exit(1);
    }

    if args.save_config {
        remembered_config(&args, &config)
            .save()
            .context("Failed to save config file")?;
        log::info!("Saved defaults to {}", config_path.display());
    }

    let job = Job::resolve(&args, config);
    let summary = job.run(&args.input)?;
    log::info!(
        "Converted {} file(s) to {}, skipped {}",
        summary.converted,
        job.format,
        summary.skipped
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn job(output_dir: &Path, format: ExportFormat) -> Job {
        Job {
            output_dir: output_dir.to_path_buf(),
            format,
            title: None,
            options: RenderOptions::default(),
        }
    }

    fn args(input: &Path) -> Args {
        Args {
            input: input.to_path_buf(),
            output_dir: None,
            format: None,
            title: None,
            save_config: false,
        }
    }

    #[test]
    fn command_line_wins_over_config() {
        let mut cli = args(Path::new("page.html"));
        cli.output_dir = Some(PathBuf::from("cli-out"));
        cli.format = Some(ExportFormat::Pdf);
        let config = Config {
            output_dir: Some(PathBuf::from("config-out")),
            default_format: ExportFormat::Docx,
            ..Config::default()
        };

        let job = Job::resolve(&cli, config);

        assert_eq!(job.output_dir, PathBuf::from("cli-out"));
        assert_eq!(job.format, ExportFormat::Pdf);
    }

    #[test]
    fn config_fills_in_missing_arguments() {
        let config = Config {
            output_dir: Some(PathBuf::from("config-out")),
            default_format: ExportFormat::Pdf,
            ..Config::default()
        };

        let job = Job::resolve(&args(Path::new("page.html")), config);

        assert_eq!(job.output_dir, PathBuf::from("config-out"));
        assert_eq!(job.format, ExportFormat::Pdf);
    }

    #[test]
    fn remembers_explicit_choices_over_config() {
        let dir = TempDir::new().unwrap();
        let mut cli = args(Path::new("page.html"));
        cli.output_dir = Some(dir.path().join("out"));
        cli.format = Some(ExportFormat::Pdf);
        let config = Config {
            output_dir: Some(PathBuf::from("/old/out")),
            ..Config::default()
        };

        let remembered = remembered_config(&cli, &config);
        assert_eq!(remembered.output_dir, Some(dir.path().join("out")));
        assert_eq!(remembered.default_format, ExportFormat::Pdf);

        let remembered = remembered_config(&args(Path::new("page.html")), &config);
        assert_eq!(remembered, config);
    }

    #[test]
    fn output_defaults_to_input_location() {
        let job = Job::resolve(&args(Path::new("pages/page.html")), Config::default());
        assert_eq!(job.output_dir, PathBuf::from("pages"));
        assert_eq!(job.format, ExportFormat::Docx);

        let job = Job::resolve(&args(Path::new("page.html")), Config::default());
        assert_eq!(job.output_dir, PathBuf::from("."));
    }

    #[test]
    fn clashing_names_get_numeric_suffixes() {
        let mut claimed = HashSet::new();
        let out = Path::new("out");

        assert_eq!(claim_file_name(&mut claimed, out, "a.docx"), "a.docx");
        assert_eq!(claim_file_name(&mut claimed, out, "a.docx"), "a-2.docx");
        assert_eq!(claim_file_name(&mut claimed, out, "a.docx"), "a-3.docx");
        assert_eq!(claim_file_name(&mut claimed, Path::new("out/sub"), "a.docx"), "a.docx");
    }

    #[test]
    fn converts_single_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("oferta.html");
        fs::write(&input, "<h1>Oferta</h1><p>Treść</p>").unwrap();
        let out = dir.path().join("out");

        let summary = job(&out, ExportFormat::Pdf).run(&input).unwrap();

        assert_eq!(summary, Summary { converted: 1, skipped: 0 });
        assert!(fs::read(out.join("oferta.pdf")).unwrap().starts_with(b"%PDF-"));
    }

    #[test]
    fn single_file_without_content_is_an_error() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("empty.html");
        fs::write(&input, "<p> </p>").unwrap();

        assert!(job(dir.path(), ExportFormat::Docx).run(&input).is_err());
    }

    #[test]
    fn converts_directory_and_mirrors_layout() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("pages");
        fs::create_dir_all(input.join("offers")).unwrap();
        fs::write(input.join("index.html"), "<p>Start</p>").unwrap();
        fs::write(input.join("index.htm"), "<p>Stara wersja</p>").unwrap();
        fs::write(input.join("Oferta!.html"), "<p>Pierwsza</p>").unwrap();
        fs::write(input.join("Oferta.html"), "<p>Druga</p>").unwrap();
        fs::write(input.join("offers/spring.htm"), "<ul><li>Promocja</li></ul>").unwrap();
        fs::write(input.join("blank.html"), "<script>x()</script>").unwrap();
        fs::write(input.join("notes.txt"), "not html").unwrap();
        let out = dir.path().join("out");

        let summary = job(&out, ExportFormat::Docx).run(&input).unwrap();

        assert_eq!(summary, Summary { converted: 5, skipped: 1 });
        assert!(out.join("index.docx").exists());
        assert!(out.join("index-2.docx").exists());
        assert!(out.join("Oferta.docx").exists());
        assert!(out.join("Oferta-2.docx").exists());
        assert!(out.join("offers/spring.docx").exists());
        assert!(!out.join("blank.docx").exists());
    }
}
