use crate::model::FlagMap;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The value carried by each flag of a short-flag cluster.
const SHORT_FLAG_VALUE: &str = "true";

/// Tokenize the Cli tokens into a [`FlagMap`].
///
/// Tokens are scanned left to right, in a single pass:
/// * `--name=value` maps `name` to `value` (split on the first `=` only).
/// * `--name value` maps `name` to `value`, when `value` does not start with `-`.
/// * `--name` maps `name` to the empty string, when followed by a dash-prefixed token or by nothing at all.
/// * `-abc` is a cluster of switches: each of `a`, `b` and `c` maps to `true`.
/// * Anything else is kept as a key with the empty string as its value.
///
/// When a flag name repeats, the later occurrence wins.
/// No names are validated at this stage.
///
/// ### Example
/// ```
/// # use argbind_builder as argbind;
/// use argbind::tokenize;
///
/// let flags = tokenize(&["--name=value", "--size", "3", "-vq"]);
///
/// assert_eq!(flags["name"], "value");
/// assert_eq!(flags["size"], "3");
/// assert_eq!(flags["v"], "true");
/// assert_eq!(flags["q"], "true");
/// ```
pub fn tokenize<S: AsRef<str>>(tokens: &[S]) -> FlagMap {
    let mut flags = FlagMap::default();
    let mut stream = tokens.iter().map(AsRef::as_ref).peekable();

    while let Some(token) = stream.next() {
        // Find a 'long' flag, such as:
        //  --initial
        //  --initial ..
        //  --initial=..
        if let Some(long) = token.strip_prefix("--") {
            let (name, value) = match long.split_once('=') {
                Some((name, value)) => (name, value),
                None => {
                    // A dash-prefixed lookahead is the next flag, so it stays in the stream.
                    let value = stream
                        .next_if(|next| !next.starts_with('-'))
                        .unwrap_or_default();
                    (long, value)
                }
            };

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Long flag '{name}' with value '{value}'.");
            }

            flags.insert(name.to_string(), value.to_string());
            continue;
        }

        // Find 'short' flag(s), such as (both -i and -v are example short flags):
        //  -i
        //  -iv
        if let Some(cluster) = token.strip_prefix('-') {
            for short in cluster.chars() {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Short flag '{short}'.");
                }

                flags.insert(short.to_string(), SHORT_FLAG_VALUE.to_string());
            }

            continue;
        }

        // Junk.
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Valueless token '{token}'.");
        }

        flags.insert(token.to_string(), String::default());
    }

    flags
}
