use wordbank::{ExternalCodecSelector, TokenizerOptions};

/// External codec arg group.
#[derive(clap::Args, Debug)]
pub struct CodecArgs {
    /// Delegate to the external codec; falls back to the vocabulary on failure.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub external: bool,

    /// The external codec encoding.
    #[arg(long, default_value_t = ExternalCodecSelector::default())]
    pub external_codec: ExternalCodecSelector,
}

impl CodecArgs {
    /// Tokenizer options selecting the configured codec.
    ///
    /// Without `--external`, no codec is built.
    pub fn tokenizer_options(&self) -> TokenizerOptions {
        let codec = if self.external {
            self.external_codec
        } else {
            ExternalCodecSelector::Disabled
        };
        TokenizerOptions::default().with_external_codec(codec)
    }
}
