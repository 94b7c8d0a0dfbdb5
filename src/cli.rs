// Command-line interface.
//
// Mirrors the classic driver: `-c` compresses input to output, `-d`
// decompresses. `-1` trades ratio for speed, `-2` shrinks the working
// set for small inputs. Input and output default to stdin/stdout.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{ArgGroup, Parser};

use crate::hash::config::{
    DEFAULT_CHUNK_SIZE, FAST_SEARCHLEN, Params, SMALL_BLOCKSIZE, SMALL_CHUNK_SIZE,
};
use crate::io::{compress_stream, decompress_stream};

const BUF_SIZE: usize = 64 * 1024;

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// LZ77 stream compressor/decompressor.
#[derive(Parser, Debug)]
#[command(
    name = "yalz",
    version,
    about = "LZ77 stream compressor/decompressor",
    group(ArgGroup::new("mode").required(true).args(["compress", "decompress"]))
)]
struct Cli {
    /// Compress input to output.
    #[arg(short = 'c', long)]
    compress: bool,

    /// Decompress input to output.
    #[arg(short = 'd', long)]
    decompress: bool,

    /// Fast mode: much faster compression, worse ratio.
    #[arg(short = '1', long = "fast")]
    fast: bool,

    /// Small-memory mode for small inputs.
    #[arg(short = '2', long = "small")]
    small: bool,

    /// Force overwrite of an existing output file.
    #[arg(short = 'f', long)]
    force: bool,

    /// Quiet mode (suppress non-error output).
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode (stats on stderr).
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Output stats as JSON to stderr.
    #[arg(long = "json")]
    json_output: bool,

    /// Input file (default: stdin).
    input: Option<PathBuf>,

    /// Output file (default: stdout).
    output: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Option resolution
// ---------------------------------------------------------------------------

fn params_for(cli: &Cli) -> Params {
    let mut params = Params::default();
    if cli.fast {
        params.searchlen = FAST_SEARCHLEN;
    }
    if cli.small {
        params.blocksize = SMALL_BLOCKSIZE;
    }
    params
}

fn chunk_size_for(cli: &Cli) -> usize {
    if cli.small {
        SMALL_CHUNK_SIZE
    } else {
        DEFAULT_CHUNK_SIZE
    }
}

// ---------------------------------------------------------------------------
// Stream setup
// ---------------------------------------------------------------------------

fn open_input(path: &Option<PathBuf>) -> Result<Box<dyn Read>, i32> {
    match path {
        Some(path) => match File::open(path) {
            Ok(f) => Ok(Box::new(BufReader::with_capacity(BUF_SIZE, f))),
            Err(e) => {
                eprintln!("yalz: input file: {}: {e}", path.display());
                Err(1)
            }
        },
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn open_output(path: &Option<PathBuf>, force: bool) -> Result<Box<dyn Write>, i32> {
    match path {
        Some(path) => {
            if path.exists() && !force {
                eprintln!(
                    "yalz: output file exists, use -f to overwrite: {}",
                    path.display()
                );
                return Err(1);
            }
            match File::create(path) {
                Ok(f) => Ok(Box::new(BufWriter::with_capacity(BUF_SIZE, f))),
                Err(e) => {
                    eprintln!("yalz: output file: {}: {e}", path.display());
                    Err(1)
                }
            }
        }
        None => Ok(Box::new(BufWriter::with_capacity(
            BUF_SIZE,
            io::stdout().lock(),
        ))),
    }
}

// ---------------------------------------------------------------------------
// Compress command
// ---------------------------------------------------------------------------

fn cmd_compress(cli: &Cli) -> i32 {
    let mut reader = match open_input(&cli.input) {
        Ok(r) => r,
        Err(code) => return code,
    };
    let mut writer = match open_output(&cli.output, cli.force) {
        Ok(w) => w,
        Err(code) => return code,
    };

    let stats = match compress_stream(&mut reader, &mut writer, params_for(cli), chunk_size_for(cli))
    {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("yalz: compress error: {e}");
            return 1;
        }
    };

    if let Err(e) = writer.flush() {
        eprintln!("yalz: write flush error: {e}");
        return 1;
    }

    if cli.verbose && !cli.quiet {
        eprintln!(
            "yalz: compress: {} bytes in, {} bytes out, {} frames",
            stats.bytes_in, stats.bytes_out, stats.frames
        );
    }

    if cli.json_output {
        let json = serde_json::json!({
            "command": "compress",
            "bytes_in": stats.bytes_in,
            "bytes_out": stats.bytes_out,
            "frames": stats.frames,
        });
        eprintln!("{}", serde_json::to_string_pretty(&json).unwrap());
    }

    0
}

// ---------------------------------------------------------------------------
// Decompress command
// ---------------------------------------------------------------------------

fn cmd_decompress(cli: &Cli) -> i32 {
    let mut reader = match open_input(&cli.input) {
        Ok(r) => r,
        Err(code) => return code,
    };
    let mut writer = match open_output(&cli.output, cli.force) {
        Ok(w) => w,
        Err(code) => return code,
    };

    let stats = match decompress_stream(&mut reader, &mut writer, chunk_size_for(cli)) {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("yalz: decompress error: {e}");
            return 1;
        }
    };

    if let Err(e) = writer.flush() {
        eprintln!("yalz: write flush error: {e}");
        return 1;
    }

    if cli.verbose && !cli.quiet {
        eprintln!(
            "yalz: decompress: {} bytes in, {} bytes out, {} frames",
            stats.bytes_in, stats.bytes_out, stats.frames
        );
    }

    if cli.json_output {
        let json = serde_json::json!({
            "command": "decompress",
            "bytes_in": stats.bytes_in,
            "bytes_out": stats.bytes_out,
            "frames": stats.frames,
        });
        eprintln!("{}", serde_json::to_string_pretty(&json).unwrap());
    }

    0
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Main CLI entry point. Parses arguments via clap, dispatches commands.
pub fn run() -> ! {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    let exit_code = if cli.compress {
        cmd_compress(&cli)
    } else {
        cmd_decompress(&cli)
    };

    process::exit(exit_code);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
