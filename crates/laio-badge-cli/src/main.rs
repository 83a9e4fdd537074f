use laio_badge::ingest::{self, IngestRequest, Method};
use laio_badge::raster::{RasterOptions, render_png};
use laio_badge::render::{BadgeElement, SnippetOptions, embed_script_snippet, markdown_snippet};
use laio_badge::palette::{PillScheme, pill_scheme_colors};
use laio_badge::sanitize::{name_to_slug, validate_color, validate_slug};
use laio_badge::{BadgeConfig, EmbedAttributes, ValidationError};
use serde::Serialize;
use std::io::Read;
use std::str::FromStr;

/// Placeholder origin for requests read from a file or stdin.
const COLLECTOR_URL: &str = "https://collector.invalid/track";

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Render(laio_badge_render::Error),
    Raster(laio_badge::raster::RasterError),
    Json(serde_json::Error),
    Invalid(ValidationError),
    Rejected(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Render(err) => write!(f, "{err}"),
            CliError::Raster(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Invalid(err) => write!(f, "{err}"),
            CliError::Rejected(reason) => write!(f, "event rejected: {reason}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<laio_badge_render::Error> for CliError {
    fn from(value: laio_badge_render::Error) -> Self {
        Self::Render(value)
    }
}

impl From<laio_badge::raster::RasterError> for CliError {
    fn from(value: laio_badge::raster::RasterError) -> Self {
        Self::Raster(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<ValidationError> for CliError {
    fn from(value: ValidationError) -> Self {
        Self::Invalid(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    Resolve,
    #[default]
    Render,
    Snippet,
    Ingest,
}

#[derive(Debug, Clone, Copy, Default)]
enum RenderFormat {
    #[default]
    Svg,
    Png,
    Html,
}

impl FromStr for RenderFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            "html" => Ok(Self::Html),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    attrs: EmbedAttributes,
    name: Option<String>,
    color: Option<String>,
    family: Option<String>,
    scheme: PillScheme,
    reverse: bool,
    pretty: bool,
    render_format: RenderFormat,
    width: Option<f64>,
    render_scale: f32,
    out: Option<String>,
    markdown: bool,
    script_url: Option<String>,
    method: Option<Method>,
    headers: Vec<(String, String)>,
    input: Option<String>,
}

fn usage() -> &'static str {
    "laio-badge-cli\n\
\n\
USAGE:\n\
  laio-badge-cli resolve [--pretty] [BUILDER] [--attr name=value]...\n\
  laio-badge-cli [render] [--format svg|png|html] [--width <px>] [--scale <n>] [--out <path>] [BUILDER] [--attr name=value]...\n\
  laio-badge-cli snippet [--markdown] [--script-url <url>] [BUILDER] [--attr name=value]...\n\
  laio-badge-cli ingest [--method get|post] [--header name=value]... [<path>|-]\n\
\n\
BUILDER:\n\
  --name <display name>     partner name, validated and turned into a URL slug (Acme Corp -> acme-corp)\n\
  --color <hex>             badge color, validated strictly\n\
  --family <name>           two-tone pill colors from a brand family (implies data-layout=pill)\n\
  --scheme easy-dark|electric-dark   pill scheme for --family (default easy-dark)\n\
  --reverse                 swap pill background and foreground\n\
\n\
NOTES:\n\
  - --attr takes embed attributes as written on the script tag (data-slug=acme) or as\n\
    dataset keys (bgColor=#01233C). Invalid values fall back to defaults.\n\
  - render prints SVG or HTML to stdout by default; PNG defaults to ./badge.png.\n\
  - ingest reads a request URL (get) or JSON body (post, the default) from <path> or stdin\n\
    and exits with status 3 when the collector would reject it.\n\
"
}

fn next_value<'a>(it: &mut impl Iterator<Item = &'a String>) -> Result<&'a String, CliError> {
    it.next().ok_or(CliError::Usage(usage()))
}

fn split_pair(raw: &str) -> Result<(&str, &str), CliError> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim(), value)),
        _ => Err(CliError::Usage(usage())),
    }
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        render_scale: 2.0,
        ..Default::default()
    };

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "resolve" => args.command = Command::Resolve,
            "render" => args.command = Command::Render,
            "snippet" => args.command = Command::Snippet,
            "ingest" => args.command = Command::Ingest,
            "--pretty" => args.pretty = true,
            "--markdown" => args.markdown = true,
            "--attr" => {
                let (name, value) = split_pair(next_value(&mut it)?)?;
                args.attrs.insert(name, value);
            }
            "--name" => args.name = Some(next_value(&mut it)?.clone()),
            "--color" => args.color = Some(next_value(&mut it)?.clone()),
            "--family" => args.family = Some(next_value(&mut it)?.clone()),
            "--scheme" => {
                args.scheme = next_value(&mut it)?
                    .parse::<PillScheme>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--reverse" => args.reverse = true,
            "--format" => {
                args.render_format = next_value(&mut it)?
                    .parse::<RenderFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--width" => {
                let width = next_value(&mut it)?
                    .parse::<f64>()
                    .map_err(|_| CliError::Usage(usage()))?;
                args.width = Some(width);
            }
            "--scale" => {
                args.render_scale = next_value(&mut it)?
                    .parse::<f32>()
                    .map_err(|_| CliError::Usage(usage()))?;
                if !(args.render_scale.is_finite() && args.render_scale > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--out" => args.out = Some(next_value(&mut it)?.clone()),
            "--script-url" => args.script_url = Some(next_value(&mut it)?.clone()),
            "--method" => {
                args.method = match next_value(&mut it)?.to_ascii_lowercase().as_str() {
                    "get" => Some(Method::Get),
                    "post" => Some(Method::Post),
                    _ => return Err(CliError::Usage(usage())),
                };
            }
            "--header" => {
                let (name, value) = split_pair(next_value(&mut it)?)?;
                args.headers.push((name.to_string(), value.to_string()));
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    if args.input.is_some() && !matches!(args.command, Command::Ingest) {
        return Err(CliError::Usage(usage()));
    }
    let builder = args.name.is_some() || args.color.is_some() || args.family.is_some();
    if builder && matches!(args.command, Command::Ingest) {
        return Err(CliError::Usage(usage()));
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

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            println!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

/// `--attr` values with the builder flags applied on top.
fn resolve_attrs(args: &Args) -> Result<EmbedAttributes, CliError> {
    let mut attrs = args.attrs.clone();
    if let Some(name) = args.name.as_deref() {
        let name = validate_slug(name)?;
        attrs.insert("data-slug", name_to_slug(&name));
    }
    if let Some(color) = args.color.as_deref() {
        attrs.insert("data-color", validate_color(color)?.to_string());
    }
    if let Some(family) = args.family.as_deref() {
        let colors = pill_scheme_colors(family, args.scheme, args.reverse);
        attrs.insert("data-bg-color", colors.bg.to_string());
        attrs.insert("data-fg-color", colors.fg.to_string());
        attrs.insert("data-layout", "pill");
    }
    Ok(attrs)
}

fn badge_svg(config: &BadgeConfig, width: Option<f64>) -> String {
    match width {
        Some(width) => laio_badge::render::render_svg(
            config.layout,
            width,
            config.color,
            config.bg_color,
            config.fg_color,
        ),
        None => laio_badge::render::render_config_svg(config),
    }
}

fn render(args: &Args) -> Result<(), CliError> {
    let config = BadgeConfig::resolve(&resolve_attrs(args)?);
    match args.render_format {
        RenderFormat::Svg => write_text(&badge_svg(&config, args.width), args.out.as_deref()),
        RenderFormat::Html => {
            let mut element = BadgeElement::build(&config);
            element.svg = badge_svg(&config, args.width);
            write_text(&element.to_html(), args.out.as_deref())
        }
        RenderFormat::Png => {
            let svg = badge_svg(&config, args.width);
            let options = RasterOptions {
                scale: args.render_scale,
                background: None,
            };
            let bytes = if args.width.is_some() {
                laio_badge::raster::svg_to_png(&svg, &options)?
            } else {
                render_png(&config, &options)?
            };
            let out = args.out.as_deref().unwrap_or("badge.png");
            std::fs::write(out, bytes)?;
            Ok(())
        }
    }
}

fn snippet(args: &Args) -> Result<(), CliError> {
    let config = BadgeConfig::resolve(&resolve_attrs(args)?);
    let mut options = SnippetOptions::default();
    if let Some(url) = args.script_url.as_deref() {
        options = options.with_script_url(url)?;
    }
    let text = if args.markdown {
        markdown_snippet(&config, &options)?
    } else {
        embed_script_snippet(&config, &options)
    };
    write_text(&text, None)
}

#[derive(Serialize)]
struct IngestOut<'a> {
    status: u16,
    record: Option<&'a ingest::EventRecord>,
    error: Option<String>,
}

fn ingest(args: &Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let mut request = match args.method.unwrap_or(Method::Post) {
        Method::Get => {
            let target = text.trim();
            let url = if target.starts_with('?') {
                format!("{COLLECTOR_URL}{target}")
            } else {
                target.to_string()
            };
            IngestRequest::get(url)
        }
        Method::Post | Method::Options => IngestRequest::post(COLLECTOR_URL, text),
    };
    for (name, value) in &args.headers {
        request = request.with_header(name, value.as_str());
    }

    let outcome = ingest::handle(&request, chrono::Utc::now());
    write_json(
        &IngestOut {
            status: outcome.response.status,
            record: outcome.record.as_ref(),
            error: outcome.rejection.as_ref().map(ToString::to_string),
        },
        args.pretty,
    )?;
    match outcome.rejection {
        Some(err) => Err(CliError::Rejected(err.to_string())),
        None => Ok(()),
    }
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Resolve => write_json(&BadgeConfig::resolve(&resolve_attrs(&args)?), args.pretty),
        Command::Render => render(&args),
        Command::Snippet => snippet(&args),
        Command::Ingest => ingest(&args),
    }
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
        Err(err @ CliError::Rejected(_)) => {
            eprintln!("{err}");
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
