use std::{fs, path::PathBuf};

use clap::Parser;
use ega::interpreter::evaluator::core::Interp;

/// EGA is a tiny embeddable scripting language in which every construct is
/// a function call.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script file to execute; starts the interactive shell when omitted.
    file: Option<PathBuf>,

    /// Echo input lines back to the output.
    #[arg(short, long)]
    echo: bool,
}

fn main() {
    let args = Args::parse();

    let mut interp = Interp::new();
    interp.set_echo_input(args.echo);

    if let Some(path) = args.file {
        let source = fs::read_to_string(&path).unwrap_or_else(|_| {
            eprintln!("ERROR: cannot open file '{}'", path.display());
            std::process::exit(1);
        });
        interp.eval_text_ex(strip_bom(&source));
    } else {
        interactive(&mut interp, args.echo);
    }
}

/// The characters trimmed from the ends of every shell input line.
const TRIM_SET: &str = " \t\r\n\x0c\x0b;";

/// Runs the interactive shell until `exit`, `exit()` or end of input.
///
/// The shell handles `exit`, `help` and `help <name>` itself; everything
/// else goes through the text-evaluation boundary, which reports errors
/// without a line suffix in this mode.
fn interactive(interp: &mut Interp, echo: bool) {
    interp.set_interactive(true);

    let border = "@".repeat(50);
    interp.print(&format!("{border}\n"));
    interp.print(&format!(
        "@ {:<46} @\n",
        format!("EGA Version {}", env!("CARGO_PKG_VERSION"))
    ));
    interp.print(&format!(
        "@ {:<46} @\n",
        "Type 'exit' to exit. Type 'help' to see help."
    ));
    interp.print(&format!("{border}\n"));

    loop {
        interp.print("\nEGA> ");

        let Some(line) = interp.read_line() else {
            break;
        };
        let input = line.trim_matches(|c: char| TRIM_SET.contains(c));

        if echo {
            interp.print(&format!("{input};\n"));
        }

        if input == "exit" {
            break;
        }

        if let Some(rest) = input.strip_prefix("help") {
            if rest.is_empty() {
                interp.show_help();
                continue;
            }
            if rest.starts_with(char::is_whitespace) {
                let name = rest.trim_matches(|c: char| TRIM_SET.contains(c));
                interp.show_help_for(name);
                continue;
            }
        }

        if !interp.eval_text_ex(input) {
            break;
        }
    }
}

/// Strips a leading UTF-8 byte-order mark from a loaded script.
fn strip_bom(source: &str) -> &str {
    source.strip_prefix('\u{feff}').unwrap_or(source)
}
