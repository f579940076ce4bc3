use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    tccgrant completions bash > ~/.bash_completion.d/tccgrant\n\n\
                  Generate zsh completions:\n    tccgrant completions zsh > ~/.zfunc/_tccgrant\n\n\
                  Generate fish completions:\n    tccgrant completions fish > ~/.config/fish/completions/tccgrant.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
