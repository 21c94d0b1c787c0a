use clap::{ArgGroup, Parser};
use h2svg::generators::{erdos_renyi, random_geometric, uniform};
use h2svg::svg::render_svg;
use h2svg::{
    render_frame, DiagramColors, Graph, PanZoom, Projection, RenderOptions, SvgRenderOptions, Theme,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Read};
use std::process;
use std::str::FromStr;
use tracing_subscriber::{fmt, EnvFilter};

const AFTER_HELP: &str = r#"Input shape: {"nodes": [{"id": 1}], "edges": [{"source": 1, "target": 2}]}

Logging goes to stderr and is controlled with RUST_LOG (default: warn).

Example:
  echo '{"nodes":[{"id":1},{"id":2}],"edges":[{"source":1,"target":2}]}' | h2svg
  h2svg --random-er 40,0.08 --seed 7 --pan 30,0 > graph.svg"#;

#[derive(Parser, Debug)]
#[command(name = "h2svg")]
#[command(version)]
#[command(about = "Draw graphs in the Poincaré disk as SVG")]
#[command(long_about = "Reads graph JSON from an argument or stdin and outputs SVG.")]
#[command(after_help = AFTER_HELP)]
#[command(group(
    ArgGroup::new("generator").args(["random_er", "random_geometric", "random_uniform"])
))]
struct Cli {
    /// Graph JSON; read from stdin when absent
    #[arg(conflicts_with = "generator")]
    input: Option<String>,

    /// Draw in Euclidean space (default: hyperbolic)
    #[arg(long, short)]
    euclidean: bool,

    /// Edge stroke width in px (default: 1)
    #[arg(long, value_name = "N")]
    edge_thickness: Option<f64>,

    /// Canvas width and height in px
    #[arg(long, value_name = "N", default_value_t = 600.0)]
    size: f64,

    /// Pan the view after the layout settles
    #[arg(long, value_name = "DX,DY", allow_hyphen_values = true, value_parser = parse_pair::<f64, f64>)]
    pan: Option<(f64, f64)>,

    /// Generate an Erdős–Rényi G(n, p) graph
    #[arg(long, value_name = "N,P", value_parser = parse_pair::<usize, f64>)]
    random_er: Option<(usize, f64)>,

    /// Generate a random geometric graph
    #[arg(long, value_name = "N,R", value_parser = parse_pair::<usize, f64>)]
    random_geometric: Option<(usize, f64)>,

    /// Generate a uniform G(n, m) graph
    #[arg(long, value_name = "N,M", value_parser = parse_pair::<usize, usize>)]
    random_uniform: Option<(usize, usize)>,

    /// Seed for random graphs
    #[arg(long, value_name = "S", default_value_t = 0)]
    seed: u64,

    /// Use the dark theme
    #[arg(long)]
    dark: bool,

    /// Print the frame as JSON instead of SVG
    #[arg(long, short)]
    json: bool,
}

/// Parse two comma-separated values such as `40,0.08`.
fn parse_pair<A: FromStr, B: FromStr>(text: &str) -> Result<(A, B), String> {
    let (a, b) = text
        .split_once(',')
        .ok_or_else(|| format!("expected two comma-separated values, got {:?}", text))?;
    let a = a.trim().parse().map_err(|_| format!("cannot parse {:?}", a))?;
    let b = b.trim().parse().map_err(|_| format!("cannot parse {:?}", b))?;
    Ok((a, b))
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

fn read_input(input: Option<String>) -> String {
    let input = match input {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                fail(format!("failed to read from stdin: {}", e));
            }
            buf
        }
    };
    if input.trim().is_empty() {
        fail("No input provided");
    }
    input
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let mut rng = StdRng::seed_from_u64(cli.seed);
    let generated = if let Some((n, p)) = cli.random_er {
        Some(erdos_renyi(n, p, &mut rng))
    } else if let Some((n, r)) = cli.random_geometric {
        Some(random_geometric(n, r, &mut rng))
    } else {
        cli.random_uniform.map(|(n, m)| uniform(n, m, &mut rng))
    };

    let graph: Graph = match generated {
        Some(result) => result.unwrap_or_else(|e| fail(e)),
        None => Graph::from_json(&read_input(cli.input)).unwrap_or_else(|e| fail(e)),
    };

    let options = SvgRenderOptions {
        render: RenderOptions {
            projection: Some(if cli.euclidean {
                Projection::Euclidean
            } else {
                Projection::Hyperbolic
            }),
            edge_thickness: cli.edge_thickness,
        },
        size: cli.size,
        pan: cli.pan.map(|(dx, dy)| PanZoom::translate(dx, dy)),
        colors: DiagramColors::from_theme(if cli.dark { Theme::Dark } else { Theme::Light }),
        transparent: false,
    };

    let frame = render_frame(graph, &options).unwrap_or_else(|e| fail(e));

    if cli.json {
        match serde_json::to_string_pretty(&frame) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(e),
        }
    } else {
        println!("{}", render_svg(&frame, &options.colors, options.transparent));
    }
}
