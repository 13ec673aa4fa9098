use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "glossa")]
#[command(about = "Bulk translation of remote collection content", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Translate every item's content and write the results back
    Run {
        /// Source language code
        #[arg(short, long, default_value = "en")]
        source: String,

        /// Target language code
        #[arg(short, long)]
        target: String,

        /// Locale the translations are registered under (defaults to target)
        #[arg(long)]
        locale: Option<String>,

        /// Namespace of the translatable field
        #[arg(long, default_value = "custom")]
        namespace: String,

        /// Key of the translatable field
        #[arg(long, default_value = "specification")]
        key: String,

        /// Items translated concurrently per batch
        #[arg(long, default_value = "5")]
        batch_size: usize,

        /// Items requested per listing page
        #[arg(long, default_value = "250")]
        page_size: u32,

        /// Stop after this many items (omit to process everything)
        #[arg(long)]
        limit: Option<usize>,

        /// Pause between batches, in milliseconds
        #[arg(long, default_value = "2000")]
        delay_ms: u64,

        /// Comma-separated backend priority order
        #[arg(long, default_value = "google,deepl,azure,yandex,mymemory")]
        providers: String,
    },

    /// Show the shop's current request-budget status
    Status,
}
