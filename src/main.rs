//! GestureLink CLI - drives the decoder against a scripted board
//!
//! Usage:
//!   gesturelink --list                          # Messages and this node's slots
//!   gesturelink --message 3 --node 4            # Perform message3 on node 4
//!   gesturelink --script demo.gl                # Replay a script file
//!   gesturelink -s "gesture +z" -s "reset"      # Inline statements
//!   gesturelink --script demo.gl --json         # JSON lines output

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use gesturelink::core::{GestureDecoder, MessageDictionary, NodeEncoder, ScriptParser, ScriptStep, ScriptedBoard};
use gesturelink::types::{letters, CycleOutput, GestureError, NodeId, Symbol};
use gesturelink::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "gesturelink",
    version = VERSION,
    about = "GestureLink - decode motion gestures into messages and replay them as light",
    long_about = "GestureLink decodes short motion bursts into six gesture symbols\n\
                  (+x -x +y -y +z -z), collects them into a sequence and, when the\n\
                  sequence equals one of ten fixed messages, replays it as colored\n\
                  pulses on the pixel assigned to that message for this node.\n\n\
                  Script statements:\n  \
                  idle [xN]               no buttons for N cycles\n  \
                  reset                   reset button\n  \
                  hold X Y Z [xN]         activation held N polls at a reading\n  \
                  gesture DIR [xN]        DIR is +x..-z or r o y g b v\n  \
                  message I               every gesture of message I"
)]
struct Args {
    /// Node identity (selects the slot permutation table)
    #[arg(short, long, default_value_t = 1)]
    node: u8,

    /// Script file to replay
    #[arg(long)]
    script: Option<String>,

    /// Inline script statement (repeatable)
    #[arg(short, long = "step")]
    steps: Vec<String>,

    /// Perform every gesture of a dictionary message
    #[arg(short, long)]
    message: Option<usize>,

    /// Stop after this many cycles
    #[arg(long)]
    cycles: Option<u64>,

    /// Sleep for real instead of on a virtual clock
    #[arg(long)]
    realtime: bool,

    /// List the dictionary and this node's slots, then exit
    #[arg(short, long)]
    list: bool,

    /// Output as JSON lines
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.no_color || args.json {
        colored::control::set_override(false);
    }

    let node = match NodeId::checked(args.node) {
        Ok(node) => node,
        Err(e) => fail(e),
    };

    if args.list {
        print_listing(node);
        return;
    }

    let steps = match load_steps(&args) {
        Ok(steps) => steps,
        Err(e) => fail(e),
    };

    if steps.is_empty() {
        print_listing(node);
        println!();
        println!("Nothing to replay. Use --message, --script or --step.");
        return;
    }

    run(node, steps, &args);
}

/// Install the tracing subscriber; RUST_LOG wins over --verbose
fn init_logging(verbose: bool) {
    let default = if verbose { "gesturelink=debug" } else { "gesturelink=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Collect steps from --script, --step and --message, in that order
fn load_steps(args: &Args) -> Result<Vec<ScriptStep>, GestureError> {
    let parser = ScriptParser::new();
    let mut steps = Vec::new();

    if let Some(ref path) = args.script {
        steps.extend(parser.load(path)?);
    }
    if !args.steps.is_empty() {
        steps.extend(parser.parse(&args.steps.join("\n"))?);
    }
    if let Some(index) = args.message {
        steps.extend(parser.parse(&format!("message {}", index))?);
    }
    Ok(steps)
}

fn run(node: NodeId, steps: Vec<ScriptStep>, args: &Args) {
    let mut board = if args.realtime {
        ScriptedBoard::realtime(steps)
    } else {
        ScriptedBoard::new(steps)
    };
    let mut decoder = GestureDecoder::new(node);

    if !args.json {
        print_header(decoder.node(), args.no_color);
    }

    let mut matches = 0usize;
    let mut pulses = 0usize;
    decoder.run(&mut board, args.cycles, |output| {
        if output.is_match() {
            matches += 1;
            pulses += output.pulses.len();
        }
        print_cycle(output, args);
    });

    if !args.json {
        println!();
        println!(
            "Cycles: {} | Matches: {} | Pulses: {} | Elapsed: {:.1}s",
            decoder.cycle(),
            matches,
            pulses,
            board.slept_ms() as f64 / 1000.0
        );
        if !decoder.buffer().is_empty() {
            println!("Unmatched buffer: [{}]", letters(decoder.buffer()));
        }
    }
}

fn print_cycle(output: &CycleOutput, args: &Args) {
    if args.json {
        match serde_json::to_string(output) {
            Ok(line) => println!("{}", line),
            Err(e) => eprintln!("Failed to encode cycle {}: {}", output.cycle, e),
        }
    } else if args.no_color {
        println!("{}", output.to_parseable_string());
    } else {
        println!("{}", output.to_terminal_string());
    }
}

/// Print header
fn print_header(node: NodeId, no_color: bool) {
    let title = format!("GestureLink v{} - {}", VERSION, node);
    if no_color {
        println!("========================================");
        println!("  {}", title);
        println!("========================================");
    } else {
        println!("{}", "════════════════════════════════════════".bold());
        println!("  {}", title.bold());
        println!("{}", "════════════════════════════════════════".bold());
    }
    println!();
}

/// Print every message with the slot it lights on this node
fn print_listing(node: NodeId) {
    let dictionary = MessageDictionary::new();
    let encoder = NodeEncoder::new();

    println!("Messages for {}:", node);
    for (index, message) in dictionary.iter() {
        let slot = encoder
            .slot_for(node, index)
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        let colored_symbols: Vec<String> = message
            .iter()
            .map(|&s| {
                let c = encoder.color_for(Some(s));
                s.axis_label().truecolor(c.red(), c.green(), c.blue()).to_string()
            })
            .collect();
        println!("  {}  slot {}  {:<8} {}", index, slot, letters(message), colored_symbols.join(" "));
    }

    println!();
    println!("Colors:");
    for symbol in Symbol::ALL {
        let c = encoder.color_for(Some(symbol));
        println!(
            "  {} {}  {}",
            symbol.axis_label(),
            symbol.letter(),
            c.to_string().truecolor(c.red(), c.green(), c.blue())
        );
    }
}

fn fail(e: GestureError) -> ! {
    eprintln!("Error: {}", e);
    std::process::exit(1);
}
