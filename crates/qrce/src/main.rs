mod error;

use std::io::{Read, Write};
use std::process::ExitCode;

use qrce_core::{encode, CodeEcc, EncodeOptions};

use error::CliError;

const MAX_DATA_LENGTH: usize = 7089;

const USAGE: &str = "Usage: qrce [/E ErrorCorrectionLevel] [/V Version] [/K] [/O]

Options:
  /E ErrorCorrectionLevel   Error correction level. L, M, Q, or H.
  /V Version                Size of the symbol represented by version 1 to 40.
  /K                        Use Kanji mode.
  /O                        Optimize the length of the bit string.
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    None,
    ErrorCorrectionLevel,
    Version,
}

struct Invocation {
    ec_level: CodeEcc,
    options: EncodeOptions,
}

fn parse_version(v: &str) -> Option<u8> {
    let version: u8 = v.parse().ok()?;
    (1..=40).contains(&version).then_some(version)
}

// Mirrors the original collaborator's hand-rolled `/E`/`/V`/`/K`/`/O` parser:
// a single pending-option slot carries a `/X` flag over to the value that
// follows it, since slash-style options don't fit a `key=value` parser.
fn parse_args(args: &[String]) -> Result<Invocation, CliError> {
    let mut ec_level = CodeEcc::Low;
    let mut version = None;
    let mut use_kanji_mode = false;
    let mut optimize = false;
    let mut pending = Pending::None;

    for arg in args {
        match pending {
            Pending::None => {
                let mut chars = arg.chars();
                if chars.next() != Some('/') {
                    return Err(CliError::Usage);
                }
                let flag = chars.next().ok_or(CliError::Usage)?;
                if chars.next().is_some() {
                    return Err(CliError::Usage);
                }

                match flag.to_ascii_uppercase() {
                    'K' => use_kanji_mode = true,
                    'O' => optimize = true,
                    'E' => pending = Pending::ErrorCorrectionLevel,
                    'V' => pending = Pending::Version,
                    _ => return Err(CliError::Usage),
                }
            }
            Pending::ErrorCorrectionLevel => {
                let mut chars = arg.chars();
                let c = chars.next().ok_or(CliError::Usage)?;
                if chars.next().is_some() {
                    return Err(CliError::Usage);
                }
                ec_level = CodeEcc::from_letter(c).ok_or(CliError::Usage)?;
                pending = Pending::None;
            }
            Pending::Version => {
                version = Some(parse_version(arg).ok_or(CliError::Usage)?);
                pending = Pending::None;
            }
        }
    }

    if pending != Pending::None {
        return Err(CliError::Usage);
    }

    Ok(Invocation {
        ec_level,
        options: EncodeOptions {
            version: version.map(qrce_core::Version::new),
            use_kanji_mode,
            optimize,
        },
    })
}

fn read_payload() -> Result<Vec<u8>, CliError> {
    let mut buf = vec![0u8; MAX_DATA_LENGTH + 1];
    let mut stdin = std::io::stdin().lock();
    let mut total = 0;
    loop {
        let n = stdin.read(&mut buf[total..])?;
        if n == 0 {
            break;
        }
        total += n;
        if total > MAX_DATA_LENGTH {
            return Err(CliError::InputTooLong);
        }
    }
    buf.truncate(total);
    Ok(buf)
}

fn run() -> Result<(), CliError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let invocation = parse_args(&args)?;
    let payload = read_payload()?;

    let qr = encode(&payload, invocation.ec_level, invocation.options)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write!(out, "{} ", qr.version.value())?;
    for y in 0..qr.size() {
        for x in 0..qr.size() {
            out.write_all(if qr.get_module(x, y) { b"1" } else { b"0" })?;
        }
    }
    writeln!(out)?;
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Usage) => {
            eprint!("{USAGE}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
