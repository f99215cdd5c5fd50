//! CLI parser
//!
//! Pattern: rsha1 [verb] [args...] [flags]
//!
//! Verbs: verify. With no verb, positionals are file paths to digest.
//!
//! Examples:
//!   rsha1 release.tar.gz                 # digest one file
//!   rsha1 verify release.tar.gz <hex>    # check against an expected digest
//!   cat file | rsha1                     # digest stdin

use super::CliContext;

const VERBS: &[&str] = &["verify"];

const KNOWN_FLAGS: &[&str] = &["help", "h", "version", "verbose", "v"];

pub fn parse_args(args: &[String]) -> Result<CliContext, String> {
    let mut ctx = CliContext::new();
    ctx.raw = args.to_vec();

    let mut positionals: Vec<String> = Vec::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if arg == "--" {
            positionals.extend_from_slice(&args[i + 1..]);
            break;
        }

        if let Some(flag_name) = arg.strip_prefix("--") {
            if let Some(eq_pos) = flag_name.find('=') {
                let (key, value) = flag_name.split_at(eq_pos);
                check_flag(key)?;
                ctx.flags.insert(key.to_string(), value[1..].to_string());
            } else {
                check_flag(flag_name)?;
                ctx.flags.insert(flag_name.to_string(), "true".to_string());
            }
        } else if arg.starts_with('-') && arg.len() >= 2 {
            let flag_char = &arg[1..2];
            check_flag(flag_char)?;
            ctx.flags.insert(flag_char.to_string(), "true".to_string());
        } else {
            // Includes "-" for stdin
            positionals.push(arg.clone());
        }

        i += 1;
    }

    if positionals
        .first()
        .map(|p| VERBS.contains(&p.as_str()))
        .unwrap_or(false)
    {
        ctx.verb = Some(positionals.remove(0));
    }
    ctx.args = positionals;

    Ok(ctx)
}

fn check_flag(name: &str) -> Result<(), String> {
    if KNOWN_FLAGS.contains(&name) {
        Ok(())
    } else {
        Err(format!("Unknown flag '{}'. Try: rsha1 --help", name))
    }
}
