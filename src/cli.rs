use clap::{Parser, Subcommand};

/// snipnote - tagged code-snippet notes with variable placeholders
///
/// # Quick Reference
///
/// ## Search
///
/// ```bash
/// snipnote search "docker"                  # Match titles and tag names
/// snipnote search --tag linux --tag docker  # Notes carrying both tags
/// snipnote search "clean" --tag docker      # Both filters at once
/// snipnote --json search "doc"              # JSON output for scripting
/// ```
///
/// ## Variables
///
/// ```bash
/// snipnote encode 'docker rm $[[container]]'     # Interactive form
/// snipnote decode '<input placeholder="id">'    # Back to $[[id]]
/// snipnote copy -v web -v 5 < rendered.html      # Clipboard text
/// snipnote vars 'ssh $[[user]]@$[[host]]'        # List placeholders
/// ```
///
/// ## Tags
///
/// ```bash
/// snipnote tags                                 # Tags in use
/// snipnote tags --unused --all-tags tags.json   # Global tags nobody uses
/// ```
///
/// ## Environment Variables
///
/// - `SNIPNOTE_FILE`: Note collection file (default: ~/.snipnote/notes.json)
/// - `RUST_LOG`: Log filter (e.g. `RUST_LOG=snipnote=debug`)
///
/// Text arguments may be `-` (or omitted) to read from stdin.
#[derive(Parser, Debug)]
#[command(name = "snipnote")]
#[command(version = "0.1.0")]
#[command(about = "Tagged code-snippet notes with variable placeholders")]
pub struct Cli {
    /// Note collection file, JSON or YAML (default: ~/.snipnote/notes.json or $SNIPNOTE_FILE)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub notes: Option<String>,

    /// Output in JSON format (for scripting)
    #[arg(short = 'j', long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search notes by free text and tags
    #[command(alias = "s")]
    Search {
        /// Free text matched against titles and tag names
        text: Option<String>,

        /// Only notes carrying this tag (repeatable, all must match)
        #[arg(short, long = "tag", value_name = "NAME")]
        tags: Vec<String>,
    },

    /// List tags used by notes
    Tags {
        /// List global tags that no note references
        #[arg(long, requires = "all_tags")]
        unused: bool,

        /// Global tag list file (JSON or YAML array of {name})
        #[arg(long, value_name = "PATH")]
        all_tags: Option<String>,
    },

    /// Convert $[[label]] text into the interactive form
    Encode {
        /// Text with placeholders (or - for stdin)
        text: Option<String>,
    },

    /// Convert the interactive form back into $[[label]] text
    Decode {
        /// Rendered text (or - for stdin)
        html: Option<String>,
    },

    /// Flatten the interactive form into clipboard text
    Copy {
        /// Rendered text (or - for stdin)
        html: Option<String>,

        /// Value for the next input field, in document order (repeatable)
        #[arg(short, long = "value", value_name = "VALUE")]
        values: Vec<String>,
    },

    /// List the placeholder labels of a text
    Vars {
        /// Text with placeholders (or - for stdin)
        text: Option<String>,
    },

    /// Validate every note in the collection
    Check,
}
