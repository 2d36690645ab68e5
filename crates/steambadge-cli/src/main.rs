use std::io::Read;
use std::str::FromStr;

use steambadge::render::Renderer;
use steambadge::{DisplayFields, Stat, StatusKind, Theme};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
    Template(steambadge::render::BadgeError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Template(err) => write!(f, "{err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<steambadge::render::BadgeError> for CliError {
    fn from(value: steambadge::render::BadgeError) -> Self {
        Self::Template(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Render,
    Sample,
}

#[derive(Debug, Clone, Copy, Default)]
enum OutputFormat {
    #[default]
    Svg,
    Html,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    fields: Option<String>,
    template: Option<String>,
    theme: Option<Theme>,
    lang: Option<String>,
    width: Option<u32>,
    format: OutputFormat,
    out: Option<String>,
}

fn usage() -> &'static str {
    "steambadge-cli\n\
\n\
USAGE:\n\
  steambadge-cli render [--theme dark|light] [--lang <code>] [--width <px>] [--html] [--template <path>] [--out <path>] [<fields.json>|-]\n\
  steambadge-cli sample [--theme dark|light] [--lang <code>] [--width <px>] [--html] [--out <path>]\n\
\n\
NOTES:\n\
  - render reads a JSON display-field record; if <fields.json> is omitted or '-', input is read from stdin.\n\
  - sample renders built-in fixture fields, no input needed.\n\
  - output goes to stdout by default; use --out to write a file.\n\
  - --theme, --lang and --width override the corresponding record fields.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "render" => args.command = Command::Render,
            "sample" => args.command = Command::Sample,
            "--html" => args.format = OutputFormat::Html,
            "--theme" => {
                let Some(theme) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.theme =
                    Some(Theme::from_str(theme).map_err(|_| CliError::Usage(usage()))?);
            }
            "--lang" => {
                let Some(lang) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.lang = Some(lang.clone());
            }
            "--width" => {
                let Some(w) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.width = Some(w.parse::<u32>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--template" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.template = Some(path.clone());
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.fields.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.fields = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

/// Fixture record for eyeballing the badge without touching the Steam API.
fn sample_fields() -> DisplayFields {
    DisplayFields {
        player_name: "TEST USER".to_string(),
        steam_level: Stat::Count(42),
        games_count: Stat::Count(123),
        friends_count: Stat::Count(77),
        last_played_game: "Remnant: From the Ashes".to_string(),
        status_color: StatusKind::Online.color().to_string(),
        status_kind: StatusKind::Online,
        ..DisplayFields::default()
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let mut fields = match args.command {
        Command::Sample => sample_fields(),
        Command::Render => {
            let raw = read_input(args.fields.as_deref())?;
            serde_json::from_str::<DisplayFields>(&raw)?
        }
    };

    if let Some(theme) = args.theme {
        fields.theme = theme;
    }
    if let Some(lang) = args.lang {
        fields.lang = lang;
    }
    if let Some(width) = args.width {
        fields.width = Some(width);
    }

    let renderer = match args.template.as_deref() {
        None => Renderer::new(),
        Some(path) => Renderer::with_template_source(std::fs::read_to_string(path)?)?,
    };

    let output = match args.format {
        OutputFormat::Svg => renderer.render_svg(&fields),
        OutputFormat::Html => renderer.render_html(&fields),
    };

    write_text(&output, args.out.as_deref())
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
