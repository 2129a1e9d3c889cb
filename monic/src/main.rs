use monic::{run_monic, MonicResult, Opts};
use std::io::Write;
use termcolor::{BufferedStandardStream, Color, ColorChoice, ColorSpec, WriteColor};

fn get_opts() -> Result<Opts, clap::Error> {
    let matches = clap::App::new(clap::crate_name!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .arg(
            clap::Arg::with_name("polynomial")
                .help("Polynomial to operate on, e.g. \"36*X*Y + 6*X + 6*Y + 1\"")
                .required(true),
        )
        .arg(
            clap::Arg::with_name("op")
                .long("--op")
                .help("Binary operation to apply to the polynomial and the --with polynomial.")
                .takes_value(true)
                .possible_values(&["add", "subtract", "multiply", "divide", "gcd"])
                .requires("with"),
        )
        .arg(
            clap::Arg::with_name("with")
                .long("--with")
                .value_name("polynomial")
                .help("Right-hand polynomial for --op.")
                .takes_value(true),
        )
        .arg(
            clap::Arg::with_name("pow")
                .long("--pow")
                .value_name("exponent")
                .help("Raise the polynomial to an integer exponent.")
                .takes_value(true)
                .allow_hyphen_values(true)
                .conflicts_with("op"),
        )
        .arg(
            clap::Arg::with_name("derivative")
                .long("--derivative")
                .value_name("symbol")
                .help("Differentiate the polynomial with respect to a variable symbol.")
                .takes_value(true)
                .conflicts_with_all(&["op", "pow"]),
        )
        .arg(
            clap::Arg::with_name("evaluate")
                .long("--evaluate")
                .value_name("bindings")
                .help("Evaluate the polynomial at variable bindings, e.g. \"x=3,y=4.5\".")
                .takes_value(true)
                .conflicts_with_all(&["op", "pow", "derivative"]),
        )
        .get_matches_safe()?;

    let pow = match matches.value_of("pow") {
        Some(exp) => Some(exp.parse::<i32>().map_err(|_| {
            clap::Error::value_validation_auto(format!(r#""{}" is not an integer exponent"#, exp))
        })?),
        None => None,
    };
    let derivative = match matches.value_of("derivative") {
        Some(sym) if sym.chars().count() == 1 => sym.chars().next(),
        Some(sym) => {
            return Err(clap::Error::value_validation_auto(format!(
                r#""{}" is not a single variable symbol"#,
                sym
            )))
        }
        None => None,
    };

    Ok(Opts {
        program: matches.value_of("polynomial").unwrap().into(),
        op: matches.value_of("op").map(str::to_owned),
        with: matches.value_of("with").map(str::to_owned),
        pow,
        derivative,
        evaluate: matches.value_of("evaluate").map(str::to_owned),
    })
}

fn main_impl() -> Result<(), Box<dyn std::error::Error>> {
    let mut ch_stdout = BufferedStandardStream::stdout(ColorChoice::Auto);
    let mut ch_stderr = BufferedStandardStream::stderr(ColorChoice::Auto);
    let use_color = atty::is(atty::Stream::Stderr) && ch_stderr.supports_color();

    let opts = get_opts().unwrap_or_else(|e| e.exit());
    let MonicResult {
        code,
        stdout,
        stderr,
    } = run_monic(opts);

    if !stderr.is_empty() {
        if use_color {
            ch_stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        }
        writeln!(&mut ch_stderr, "{}", stderr)?;
        ch_stderr.reset()?;
        ch_stderr.flush()?;
    }
    if !stdout.is_empty() {
        writeln!(&mut ch_stdout, "{}", stdout)?;
        ch_stdout.flush()?;
    }

    std::process::exit(code)
}

fn main() {
    if main_impl().is_err() {
        std::process::exit(2);
    }
}
