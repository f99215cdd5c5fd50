//! hash and verify commands

use crate::cli::{output::Output, CliContext};
use crate::crypto::encoding::hex_decode;
use crate::crypto::sha1::sha1_hex;
use crate::error::{Result, Rsha1Error};
use crate::{debug, warn};
use std::fs;
use std::io::{self, Read};

pub fn dispatch(ctx: &CliContext) -> Result<()> {
    match ctx.verb.as_deref() {
        Some("verify") => verify(ctx),
        _ => hash(ctx),
    }
}

/// Digest each named file, or stdin when no files are given.
///
/// Unreadable files are reported and skipped; the command fails afterwards
/// so scripted callers still see a nonzero exit.
fn hash(ctx: &CliContext) -> Result<()> {
    if ctx.args.is_empty() {
        let data = read_stdin()?;
        debug!("stdin: {} bytes", data.len());
        println!("{}  -", sha1_hex(&data)?);
        return Ok(());
    }

    let mut failures = 0usize;
    for path in &ctx.args {
        let data = if path == "-" {
            read_stdin()?
        } else {
            match fs::read(path) {
                Ok(data) => data,
                Err(e) => {
                    warn!("{}: {}", path, e);
                    failures += 1;
                    continue;
                }
            }
        };
        debug!("{}: {} bytes", path, data.len());
        println!("{}  {}", sha1_hex(&data)?, path);
    }

    if failures > 0 {
        return Err(Rsha1Error::Io(format!(
            "{} of {} files could not be read",
            failures,
            ctx.args.len()
        )));
    }
    Ok(())
}

/// Recompute a file's digest and compare against an expected value.
fn verify(ctx: &CliContext) -> Result<()> {
    const USAGE: &str = "Usage: rsha1 verify <file> <expected_hex>";

    let path = ctx
        .args
        .first()
        .ok_or_else(|| Rsha1Error::Validation(USAGE.to_string()))?;
    let expected = ctx
        .args
        .get(1)
        .ok_or_else(|| Rsha1Error::Validation(USAGE.to_string()))?;

    // Reject malformed digests before touching the file
    let decoded = hex_decode(expected).map_err(|e| Rsha1Error::Validation(e.to_string()))?;
    if decoded.len() != 20 {
        return Err(Rsha1Error::Validation(format!(
            "expected a 40-character SHA-1 digest, got {} characters",
            expected.len()
        )));
    }

    let data = fs::read(path).map_err(|e| Rsha1Error::Io(format!("{}: {}", path, e)))?;
    debug!("{}: {} bytes", path, data.len());
    let actual = sha1_hex(&data)?;

    if actual.eq_ignore_ascii_case(expected) {
        Output::success("Digest matches");
        Output::item("File", path);
        Output::item("SHA-1", &actual);
        Ok(())
    } else {
        Output::item("Actual", &actual);
        Output::item("Expect", expected);
        Err(Rsha1Error::Validation("digest mismatch".to_string()))
    }
}

fn read_stdin() -> Result<Vec<u8>> {
    let mut data = Vec::new();
    io::stdin().read_to_end(&mut data)?;
    Ok(data)
}

pub fn print_help() {
    println!("rsha1 - SHA-1 digest tool");
    println!();
    println!("Usage:");
    println!("  rsha1 [FILE ...]              Print SHA-1 digests (stdin when no files)");
    println!("  rsha1 verify <file> <digest>  Check a file against an expected digest");
    println!();
    println!("Flags:");
    println!("  -h, --help       Show this help");
    println!("      --version    Show version");
    println!("  -v, --verbose    Enable debug logging");
}
