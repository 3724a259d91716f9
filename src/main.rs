use melodify::model::Theme;

#[derive(Debug, Default)]
struct CliArgs {
    theme: Option<Theme>,
    fps: Option<u16>,
    path: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = parse_args(std::env::args().skip(1).collect())?;

    if let Err(err) = melodify::logging::init() {
        eprintln!("logging disabled: {err:#}");
    }

    melodify::app::run_with_startup(melodify::app::AppStartupOptions {
        theme: args.theme,
        frame_rate: args.fps,
        start_path: args.path,
    })
}

fn parse_args(args: Vec<String>) -> anyhow::Result<CliArgs> {
    let mut out = CliArgs::default();
    let mut index = 0;
    while index < args.len() {
        match args[index].as_str() {
            "--theme" => {
                index += 1;
                let Some(value) = args.get(index) else {
                    anyhow::bail!("--theme requires light or dark");
                };
                let Some(theme) = Theme::parse(value) else {
                    anyhow::bail!("unknown theme {value}");
                };
                out.theme = Some(theme);
            }
            "--fps" => {
                index += 1;
                let Some(value) = args.get(index) else {
                    anyhow::bail!("--fps requires a number");
                };
                let fps: u16 = value
                    .trim()
                    .parse()
                    .map_err(|_| anyhow::anyhow!("invalid --fps value {value}"))?;
                if fps == 0 {
                    anyhow::bail!("--fps must be at least 1");
                }
                out.fps = Some(fps);
            }
            "--path" => {
                index += 1;
                let Some(value) = args.get(index) else {
                    anyhow::bail!("--path requires a route like /discover");
                };
                if value.trim().is_empty() {
                    anyhow::bail!("--path cannot be empty");
                }
                out.path = Some(value.trim().to_string());
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => anyhow::bail!("unknown argument {other}"),
        }
        index += 1;
    }
    Ok(out)
}

fn print_help() {
    println!("Melodify");
    println!("  --theme light|dark   Start with this theme and remember it");
    println!("  --fps N              Waveform redraw rate (default 60)");
    println!("  --path /route        Open this route instead of /");
    println!();
    println!("Environment:");
    println!("  MELODIFY_CONFIG_DIR  Settings and log directory");
    println!("  MELODIFY_LOG         Log filter, e.g. debug or melodify=trace");
}
