mod logging;

use std::io::IsTerminal as _;
use std::path::{Path, PathBuf};
use std::process::exit;

use anyhow::{Context, Result};
use clap::{ColorChoice, CommandFactory as _, Parser, Subcommand};
use glshadow_core::serialize::{render, DEFAULT_DELIMITER};
use glshadow_core::{group_mask, group_names, AttribMask, ContextState, SimulatedContext};

fn main() {
    let args = Args::parse();
    handle_result(run(args));
}

fn run(args: Args) -> Result<()> {
    let mut logger = logging::set_up(to_logging_options(&args.options))?;
    let r = run_args(&args);
    logger.tear_down()?;
    r
}

fn run_args(args: &Args) -> Result<()> {
    match &args.command {
        Commands::Defaults(subargs) => print!("{}", defaults(subargs)?),
        Commands::Replay(subargs) => print!("{}", replay(subargs)?),
        Commands::Diff(subargs) => print!("{}", diff(subargs)?),
        Commands::GenerateMan => {
            let cmd = Args::command();
            let man = clap_mangen::Man::new(cmd);
            let mut buffer: Vec<u8> = Default::default();
            man.render(&mut buffer)?;
            println!("{}", String::from_utf8(buffer)?);
        }
        Commands::GenerateMarkdown => {
            let opts = clap_markdown::MarkdownOptions::new().show_footer(false);
            let markdown: String = clap_markdown::help_markdown_custom::<Args>(&opts);
            println!("{}", markdown);
        }
        Commands::GenerateCompletion { shell } => {
            let mut cmd = Args::command();
            clap_complete::generate(*shell, &mut cmd, "glshadow", &mut std::io::stdout());
        }
    }
    Ok(())
}

fn to_logging_options(options: &Options) -> logging::Options {
    logging::Options {
        verbose: options.verbose,
        color: match options.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::stderr().is_terminal(),
        },
    }
}

fn handle_result(r: Result<()>) {
    match r {
        Ok(()) => {}
        Err(e) => {
            eprintln!("glshadow error: {}, {:#}", e.root_cause(), e);
            exit(1);
        }
    }
}

/// The union of the selected groups, or every group when none is selected.
fn selected_mask(groups: &[AttribMask]) -> AttribMask {
    if groups.is_empty() {
        AttribMask::TRACKED
    } else {
        groups.iter().fold(AttribMask::empty(), |acc, m| acc | *m)
    }
}

fn parse_group(name: &str) -> Result<AttribMask, String> {
    group_mask(name).map_err(|e| e.to_string())
}

fn read_snapshot(path: &Path) -> Result<ContextState> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("parsing JSON in {}", path.display()))?;
    ContextState::from_json(value).with_context(|| format!("loading snapshot {}", path.display()))
}

fn defaults(args: &DefaultsArgs) -> Result<String> {
    let mask = selected_mask(&args.groups);
    let state = ContextState::default();
    if args.json {
        let mut value = state.to_json()?;
        if let serde_json::Value::Object(map) = &mut value {
            let names = group_names(mask);
            map.retain(|k, _| k == "_type" || names.contains(&k.as_str()));
        }
        let mut out = serde_json::to_string_pretty(&value)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(state.to_statements(mask, &args.delimiter))
    }
}

fn replay(args: &ReplayArgs) -> Result<String> {
    let state = read_snapshot(&args.snapshot)?;
    let mask = selected_mask(&args.groups);
    let mut ctx = SimulatedContext::new();
    state.apply(&mut ctx, mask);
    let calls = ctx.take_log();
    tracing::debug!(calls = calls.len(), groups = ?group_names(mask), "replayed snapshot");
    Ok(render(&calls, &args.delimiter))
}

fn diff(args: &DiffArgs) -> Result<String> {
    let from = read_snapshot(&args.from)?;
    let to = read_snapshot(&args.to)?;
    if args.json_patch {
        let patch = from.json_diff(&to)?;
        let mut out = serde_json::to_string_pretty(&patch)?;
        out.push('\n');
        return Ok(out);
    }
    let mask = selected_mask(&args.groups);
    let mut ctx = SimulatedContext::with_state(from.clone());
    to.apply_diff(&mut ctx, mask, &from);
    let calls = ctx.take_log();
    tracing::debug!(calls = calls.len(), groups = ?group_names(mask), "computed state diff");
    Ok(render(&calls, &args.delimiter))
}

/// glshadow: inspect, replay and diff OpenGL state snapshots
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    options: Options,
}

#[derive(Parser, Debug, Clone)]
struct Options {
    #[arg(short, long, global = true, default_value = "false")]
    verbose: bool,

    #[arg(long, global = true, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
}

#[derive(Parser, Debug)]
struct DefaultsArgs {
    /// Only print this state group; may be repeated
    #[arg(long = "group", value_name = "NAME", value_parser = parse_group)]
    groups: Vec<AttribMask>,

    /// Text written after every statement
    #[arg(long, default_value = DEFAULT_DELIMITER)]
    delimiter: String,

    /// Print a JSON snapshot instead of call statements
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// JSON snapshot to replay
    snapshot: PathBuf,

    /// Only replay this state group; may be repeated
    #[arg(long = "group", value_name = "NAME", value_parser = parse_group)]
    groups: Vec<AttribMask>,

    /// Text written after every statement
    #[arg(long, default_value = DEFAULT_DELIMITER)]
    delimiter: String,
}

#[derive(Parser, Debug)]
struct DiffArgs {
    /// Snapshot of the current state
    from: PathBuf,

    /// Snapshot of the desired state
    to: PathBuf,

    /// Only diff this state group; may be repeated
    #[arg(long = "group", value_name = "NAME", value_parser = parse_group)]
    groups: Vec<AttribMask>,

    /// Text written after every statement
    #[arg(long, default_value = DEFAULT_DELIMITER)]
    delimiter: String,

    /// Print the structural difference as a JSON Patch instead of calls
    #[arg(long, conflicts_with = "groups")]
    json_patch: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the initial state of a fresh context
    Defaults(DefaultsArgs),

    /// Print the calls that establish the state in a snapshot
    Replay(ReplayArgs),

    /// Print the minimal calls that move one snapshot to another
    Diff(DiffArgs),

    /// Generate markdown documentation for glshadow
    #[command(hide = true)]
    GenerateMarkdown,

    /// Generate a manpage for glshadow
    #[command(hide = true)]
    GenerateMan,

    /// Generate shell completion for glshadow
    #[command(hide = true)]
    GenerateCompletion {
        /// The shell to generate completion for
        #[arg(long)]
        shell: clap_complete::Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn snapshot_file(value: serde_json::Value) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", value).unwrap();
        file
    }

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("glshadow").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_for_one_group() {
        let args = parse(&["defaults", "--group", "list", "--delimiter", " "]);
        let Commands::Defaults(sub) = &args.command else {
            panic!("expected defaults");
        };
        assert_eq!(defaults(sub).unwrap(), "glListBase(0); ");
    }

    #[test]
    fn defaults_as_json() {
        let args = parse(&["defaults", "--group", "depth", "--json"]);
        let Commands::Defaults(sub) = &args.command else {
            panic!("expected defaults");
        };
        let value: serde_json::Value = serde_json::from_str(&defaults(sub).unwrap()).unwrap();
        assert_eq!(value["_type"], "glshadowSnapshot");
        assert_eq!(value["depth"]["func"], 0x0201);
        assert!(value.get("stencil").is_none());
    }

    #[test]
    fn unknown_group_is_rejected() {
        let err = Args::try_parse_from(["glshadow", "defaults", "--group", "texture"]).unwrap_err();
        assert!(err.to_string().contains("unknown state group 'texture'"));
    }

    #[test]
    fn replay_snapshot() {
        let file = snapshot_file(serde_json::json!({
            "_type": "glshadowSnapshot",
            "list": { "base": 7 },
            "line": { "width": 2.0 }
        }));
        let sub = ReplayArgs {
            snapshot: file.path().to_path_buf(),
            groups: vec![AttribMask::LIST, AttribMask::LINE],
            delimiter: "\n".to_string(),
        };
        assert_eq!(
            replay(&sub).unwrap(),
            "glListBase(7);\n\
             glLineWidth(2);\n\
             glDisable(GL_LINE_SMOOTH);\n\
             glDisable(GL_LINE_STIPPLE);\n\
             glLineStipple(1,0xffff);\n"
        );
    }

    #[test]
    fn diff_snapshots() {
        let from = snapshot_file(serde_json::json!({ "_type": "glshadowSnapshot" }));
        let to = snapshot_file(serde_json::json!({
            "_type": "glshadowSnapshot",
            "depth": { "clear": 0.5, "func": 0x0203 }
        }));
        let mut sub = DiffArgs {
            from: from.path().to_path_buf(),
            to: to.path().to_path_buf(),
            groups: vec![],
            delimiter: "\n".to_string(),
            json_patch: false,
        };
        assert_eq!(
            diff(&sub).unwrap(),
            "glDepthFunc(GL_LEQUAL);\n\
             glClearDepth(0.5);\n"
        );

        sub.json_patch = true;
        let patch: serde_json::Value = serde_json::from_str(&diff(&sub).unwrap()).unwrap();
        assert_eq!(patch.as_array().unwrap().len(), 2);
    }

    #[test]
    fn bad_snapshot_reports_path() {
        let file = snapshot_file(serde_json::json!({ "_type": "somethingElse" }));
        let sub = ReplayArgs {
            snapshot: file.path().to_path_buf(),
            groups: vec![],
            delimiter: "\n".to_string(),
        };
        let err = replay(&sub).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("loading snapshot"));
        assert!(message.contains("unexpected _type in snapshot"));
    }
}
